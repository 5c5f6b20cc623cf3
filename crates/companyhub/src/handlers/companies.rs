//! Company CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use companyhub_core::company::{
    validate_create_company, Company, CompanyPatch, CreateCompanyRequest,
};
use companyhub_core::storage::create_company_with_address;

use super::{invalid_body, invalid_path, store_failure, ApiError};
use crate::state::AppState;

const NOT_FOUND: &str = "Company not found";

/// Create a company, optionally with one address (POST /api/companies).
pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    let (company, address) =
        validate_create_company(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let created = create_company_with_address(
        state.company_repo.as_ref(),
        state.address_repo.as_ref(),
        &company,
        address.as_ref(),
    )
    .await
    .map_err(|e| ApiError::Internal(format!("Failed to create company: {e}")))?;

    tracing::info!(company_id = created.id, name = %created.name, "Company created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all companies without their addresses (GET /api/companies).
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state
        .company_repo
        .list_companies()
        .await
        .map_err(store_failure("Failed to retrieve companies"))?;

    Ok(Json(companies))
}

/// Get a company with its addresses (GET /api/companies/{id}).
pub async fn get_company(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Company>, ApiError> {
    let Path(id) = id.map_err(invalid_path)?;

    state
        .company_repo
        .get_company(id, true)
        .await
        .map_err(store_failure("Failed to retrieve company"))?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// Update a company's name and/or VAT number (PUT /api/companies/{id}).
pub async fn update_company(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CompanyPatch>, JsonRejection>,
) -> Result<Json<Company>, ApiError> {
    let Path(id) = id.map_err(invalid_path)?;
    let Json(patch) = payload.map_err(invalid_body)?;

    let updated = state
        .company_repo
        .update_company(id, &patch)
        .await
        .map_err(store_failure("Failed to update company"))?;

    if updated == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    tracing::info!(company_id = id, "Company updated");

    state
        .company_repo
        .get_company(id, false)
        .await
        .map_err(store_failure("Failed to update company"))?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// Delete a company and, through the cascade, its addresses (DELETE /api/companies/{id}).
pub async fn delete_company(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(invalid_path)?;

    let deleted = state
        .company_repo
        .delete_company(id)
        .await
        .map_err(store_failure("Failed to delete company"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    tracing::info!(company_id = id, "Company deleted");

    Ok(StatusCode::NO_CONTENT)
}
