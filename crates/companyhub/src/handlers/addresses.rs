//! Address CRUD handlers, nested under a company.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use companyhub_core::company::{Address, AddressPatch, NewAddress};
use companyhub_core::storage::{AddressFilter, AddressScope};

use super::{invalid_body, invalid_path, store_failure, ApiError};
use crate::state::AppState;

const NOT_FOUND: &str = "Company address not found";

/// Create an address for a company (POST /api/companies/{id}/addresses).
///
/// Missing fields and unknown companies are rejected by the store.
pub async fn create_address(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewAddress>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(company_id) = company_id.map_err(invalid_path)?;
    let Json(address) = payload.map_err(invalid_body)?;

    let created = state
        .address_repo
        .create_address(company_id, &address)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to create company address: {e}")))?;

    tracing::info!(company_id, address_id = created.id, "Address created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// List a company's addresses (GET /api/companies/{id}/addresses).
///
/// An unknown company yields an empty list.
pub async fn list_addresses(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Address>>, ApiError> {
    let Path(company_id) = company_id.map_err(invalid_path)?;

    let addresses = state
        .address_repo
        .list_addresses(AddressFilter::for_company(company_id))
        .await
        .map_err(store_failure("Failed to retrieve company"))?;

    Ok(Json(addresses))
}

/// Update an address owned by a company (PUT /api/companies/{id}/addresses/{addressId}).
pub async fn update_address(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<AddressPatch>, JsonRejection>,
) -> Result<Json<Address>, ApiError> {
    let Path((company_id, address_id)) = ids.map_err(invalid_path)?;
    let Json(patch) = payload.map_err(invalid_body)?;
    let scope = AddressScope::new(company_id, address_id);

    let updated = state
        .address_repo
        .update_address(scope, &patch)
        .await
        .map_err(store_failure("Failed to update company address"))?;

    if updated == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    tracing::info!(company_id, address_id, "Address updated");

    state
        .address_repo
        .get_address(address_id)
        .await
        .map_err(store_failure("Failed to update company address"))?
        .filter(|a| scope.matches(a))
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// Delete an address owned by a company (DELETE /api/companies/{id}/addresses/{addressId}).
pub async fn delete_address(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((company_id, address_id)) = ids.map_err(invalid_path)?;

    let deleted = state
        .address_repo
        .delete_address(AddressScope::new(company_id, address_id))
        .await
        .map_err(store_failure("Failed to delete company address"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    tracing::info!(company_id, address_id, "Address deleted");

    Ok(StatusCode::NO_CONTENT)
}
