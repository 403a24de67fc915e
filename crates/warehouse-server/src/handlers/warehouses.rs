//! Warehouse handlers (list, create, free capacity, add, withdraw, delete).

use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::warehouses::{
    AddResponse, CreateWarehouseResponse, DeleteResponse, FreeCapacityResponse, JsonFields,
    WarehouseListResponse, WithdrawResponse, AMOUNT, CAPACITY, INITIAL_BALANCE,
};
use crate::state::AppState;

/// Lists all warehouses.
///
/// `GET /warehouses`
pub async fn list_warehouses(State(state): State<AppState>) -> Json<WarehouseListResponse> {
    Json(state.registry.list())
}

/// Creates a new warehouse.
///
/// `POST /warehouses`
pub async fn create_warehouse(
    State(state): State<AppState>,
    body: Result<JsonFields, ApiError>,
) -> Result<Json<CreateWarehouseResponse>, ApiError> {
    let body = body?;
    let capacity = body.number(CAPACITY);
    let initial_balance = body.number(INITIAL_BALANCE);
    state.validation.check_new(capacity, initial_balance)?;

    let (id, acc) = state.registry.create(capacity, initial_balance);
    tracing::info!(%id, capacity, initial_balance, "warehouse created");
    Ok(Json(CreateWarehouseResponse {
        id,
        state: acc.snapshot(),
    }))
}

/// Reports remaining room in a warehouse.
///
/// `GET /warehouses/{id}/free-capacity`
pub async fn free_capacity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FreeCapacityResponse>, ApiError> {
    let acc = state.registry.get(&id).ok_or(ApiError::NotFound)?;
    Ok(Json(FreeCapacityResponse {
        free_capacity: acc.free_capacity(),
    }))
}

/// Adds stock, capped at capacity.
///
/// `POST /warehouses/{id}/add`
pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<JsonFields, ApiError>,
) -> Result<Json<AddResponse>, ApiError> {
    if state.registry.get(&id).is_none() {
        return Err(ApiError::NotFound);
    }
    let body = body?;
    let amount = body.number(AMOUNT);
    state.validation.check_amount(amount)?;

    let acc = state.registry.add(&id, amount).ok_or(ApiError::NotFound)?;
    tracing::debug!(%id, amount, balance = acc.balance(), "added to warehouse");
    Ok(Json(AddResponse {
        balance: acc.balance(),
        free_capacity: acc.free_capacity(),
    }))
}

/// Withdraws stock, capped at the current balance.
///
/// `POST /warehouses/{id}/withdraw`
pub async fn withdraw(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<JsonFields, ApiError>,
) -> Result<Json<WithdrawResponse>, ApiError> {
    if state.registry.get(&id).is_none() {
        return Err(ApiError::NotFound);
    }
    let body = body?;
    let amount = body.number(AMOUNT);
    state.validation.check_amount(amount)?;

    let (withdrawn, acc) = state
        .registry
        .withdraw(&id, amount)
        .ok_or(ApiError::NotFound)?;
    if withdrawn < 0.0 {
        tracing::warn!(%id, withdrawn, "negative withdrawal increased balance");
    }
    tracing::debug!(%id, amount, withdrawn, balance = acc.balance(), "withdrew from warehouse");
    Ok(Json(WithdrawResponse {
        withdrawn,
        balance: acc.balance(),
        free_capacity: acc.free_capacity(),
    }))
}

/// Deletes a warehouse by id.
///
/// `DELETE /warehouses/{id}`
pub async fn delete_warehouse(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.registry.remove(&id) {
        return Err(ApiError::NotFound);
    }
    tracing::info!(%id, "warehouse deleted");
    Ok(Json(DeleteResponse { success: true }))
}
