mod customer;

pub use customer::{CustomerError, CustomerService, ServiceResult};
