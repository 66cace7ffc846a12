use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::{AppJson, AppPath};
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{CreateCustomerRequest, CustomerView, UpdateCustomerRequest};
use crate::state::AppState;

/// Create a new customer
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created successfully", body = CustomerView,
            headers(("Location" = String, description = "URL of the created customer"))),
        (status = 400, description = "Customer could not be created", body = ErrorResponse)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCustomerRequest>,
) -> AppResult<impl IntoResponse> {
    let customer = state.customers.create(payload.into()).await?;
    let location = format!("/api/customers/{}", customer.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CustomerView::from(customer)),
    ))
}

/// Get all customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "customers",
    responses(
        (status = 200, description = "List of all customers", body = Vec<CustomerView>),
        (status = 400, description = "Customers could not be fetched", body = ErrorResponse)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<CustomerView>>> {
    let customers = state.customers.get_all().await?;
    Ok(Json(customers.into_iter().map(CustomerView::from).collect()))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer details", body = CustomerView),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<CustomerView>> {
    let customer = state
        .customers
        .get(id)
        .await
        .map_err(|e| AppError::not_found(e.to_string()))?;

    Ok(Json(customer.into()))
}

/// Update a customer
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated successfully", body = CustomerView),
        (status = 400, description = "Id mismatch, customer not found or update failed", body = ErrorResponse)
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateCustomerRequest>,
) -> AppResult<Json<CustomerView>> {
    if id != payload.id {
        return Err(AppError::bad_request("Id mismatch."));
    }

    let customer = state.customers.update(payload.into()).await?;
    Ok(Json(customer.into()))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted successfully"),
        (status = 400, description = "Customer not found or delete failed", body = ErrorResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
