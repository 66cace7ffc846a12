mod customer;

pub use customer::{CustomerRepository, SqliteCustomerRepository};
