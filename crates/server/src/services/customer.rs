use std::sync::Arc;
use thiserror::Error;

use crate::models::{CreateCustomer, Customer, UpdateCustomer};
use crate::repositories::CustomerRepository;

/// Failure outcomes of [`CustomerService`].
///
/// The display text is the message shown to API clients. Store failures
/// keep the underlying error as `source()` but never expose it in the text.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found.")]
    NotFound,
    #[error("An error occurred while creating the customer.")]
    Create(#[source] sqlx::Error),
    #[error("An error occurred while updating the customer.")]
    Update(#[source] sqlx::Error),
    #[error("An error occurred while deleting the customer.")]
    Delete(#[source] sqlx::Error),
    #[error("An error occurred while fetching the customer.")]
    Fetch(#[source] sqlx::Error),
    #[error("An error occurred while fetching customers.")]
    FetchAll(#[source] sqlx::Error),
}

impl CustomerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type ServiceResult<T> = Result<T, CustomerError>;

/// Service for managing customers
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Create a new customer
    pub async fn create(&self, data: CreateCustomer) -> ServiceResult<Customer> {
        self.repository.add(data).await.map_err(|e| {
            tracing::error!("Failed to create customer: {}", e);
            CustomerError::Create(e)
        })
    }

    /// Update name and email of an existing customer
    pub async fn update(&self, data: UpdateCustomer) -> ServiceResult<Customer> {
        let id = data.id;
        match self.repository.update(data).await {
            Ok(Some(customer)) => Ok(customer),
            Ok(None) => {
                tracing::debug!("Customer {} not found for update", id);
                Err(CustomerError::NotFound)
            }
            Err(e) => {
                tracing::error!("Failed to update customer {}: {}", id, e);
                Err(CustomerError::Update(e))
            }
        }
    }

    /// Delete a customer by ID
    pub async fn delete(&self, id: i64) -> ServiceResult<bool> {
        match self.repository.delete(id).await {
            Ok(true) => Ok(true),
            Ok(false) => {
                tracing::debug!("Customer {} not found for delete", id);
                Err(CustomerError::NotFound)
            }
            Err(e) => {
                tracing::error!("Failed to delete customer {}: {}", id, e);
                Err(CustomerError::Delete(e))
            }
        }
    }

    /// Get a customer by ID
    pub async fn get(&self, id: i64) -> ServiceResult<Customer> {
        match self.repository.get(id).await {
            Ok(Some(customer)) => Ok(customer),
            Ok(None) => {
                tracing::debug!("Customer {} not found", id);
                Err(CustomerError::NotFound)
            }
            Err(e) => {
                tracing::error!("Failed to fetch customer {}: {}", id, e);
                Err(CustomerError::Fetch(e))
            }
        }
    }

    /// Get all customers
    pub async fn get_all(&self) -> ServiceResult<Vec<Customer>> {
        self.repository.get_all().await.map_err(|e| {
            tracing::error!("Failed to fetch customers: {}", e);
            CustomerError::FetchAll(e)
        })
    }
}
