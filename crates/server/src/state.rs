use sqlx::SqlitePool;
use std::sync::Arc;

use crate::repositories::{CustomerRepository, SqliteCustomerRepository};
use crate::services::CustomerService;

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self::with_repository(Arc::new(SqliteCustomerRepository::new(db)))
    }

    /// Build state around any repository implementation
    pub fn with_repository(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customers: Arc::new(CustomerService::new(repository)),
        }
    }
}
