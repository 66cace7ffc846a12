mod customers;
mod extract;

pub use extract::{AppJson, AppPath};

// Re-export all handlers
pub use customers::{
    create_customer, delete_customer, get_customer, list_customers, update_customer,
};

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use customers::{
    __path_create_customer, __path_delete_customer, __path_get_customer, __path_list_customers,
    __path_update_customer,
};
