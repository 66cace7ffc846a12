use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer entity as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Set once on insert, never modified afterwards
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// First and last name joined by a space, trimmed so an empty part
    /// does not leave a dangling separator
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Data required to insert a new customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Replacement values for an existing customer.
///
/// Only the name fields and email are written; `id` selects the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request body for creating a customer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl From<CreateCustomerRequest> for CreateCustomer {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

/// Request body for updating a customer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    /// Must match the id in the request path; absent means 0
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl From<UpdateCustomerRequest> for UpdateCustomer {
    fn from(req: UpdateCustomerRequest) -> Self {
        Self {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

/// Customer as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i64,
    /// First and last name, trimmed
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name(),
            email: customer.email,
            created_at: customer.created_at,
        }
    }
}
