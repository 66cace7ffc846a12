use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{CreateCustomerRequest, CustomerView, UpdateCustomerRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer API",
        version = "1.0.0"
    ),
    tags(
        (name = "customers", description = "Customer management endpoints")
    ),
    components(schemas(
        CustomerView,
        CreateCustomerRequest,
        UpdateCustomerRequest,
        ErrorResponse
    ))
)]
pub struct ApiDoc;
