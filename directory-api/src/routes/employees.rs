/// Employee endpoints
///
/// Thin HTTP adapters over `EmployeeService`: extract, call, wrap the result in
/// an `Envelope`. Rejections from Axum extractors are converted to `ApiError`
/// so every failure uses the same envelope.
///
/// # Endpoints
///
/// - `GET /employees?search=` - List (newest first, optional substring search)
/// - `GET /employees/:id` - Get one
/// - `POST /employees` - Create
/// - `PUT /employees/:id` - Partial update
/// - `DELETE /employees/:id` - Delete

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use directory_shared::{
    envelope::Envelope,
    models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
};
use serde::Deserialize;

/// Query string of `GET /employees`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring matched against name, email and position
    pub search: Option<String>,
}

/// List employees
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "data": [
///     {
///       "id": "uuid",
///       "name": "Ann Lee",
///       "email": "ann@x.com",
///       "position": "Engineer",
///       "createdAt": "2025-01-03T12:00:00Z",
///       "updatedAt": "2025-01-03T12:00:00Z"
///     }
///   ]
/// }
/// ```
pub async fn list_employees(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Envelope<Vec<Employee>>>> {
    let Query(query) = query?;
    let employees = state.employees.list(query.search.as_deref()).await?;

    Ok(Json(Envelope::list(employees)))
}

/// Get one employee
///
/// # Errors
///
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: No employee with that id
pub async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Envelope<Employee>>> {
    let Path(id) = path?;
    let employee = state.employees.get(&id).await?;

    Ok(Json(Envelope::data(employee)))
}

/// Create an employee
///
/// # Endpoint
///
/// ```text
/// POST /employees
/// Content-Type: application/json
///
/// { "name": "Ann Lee", "email": "ann@x.com", "position": "Engineer" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed, malformed body, or email already exists
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Employee>>)> {
    let Json(req) = body?;
    let employee = state.employees.create(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(employee).with_message("Employee created successfully")),
    ))
}

/// Update an employee
///
/// Body may contain any subset of `name`, `email`, `position`.
///
/// # Errors
///
/// - `400 Bad Request`: Malformed id, validation failed, or email already exists
/// - `404 Not Found`: No employee with that id
pub async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope<Employee>>> {
    let Path(id) = path?;
    let Json(req) = body?;
    let employee = state.employees.update(&id, &req).await?;

    Ok(Json(
        Envelope::data(employee).with_message("Employee updated successfully"),
    ))
}

/// Delete an employee
///
/// # Errors
///
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: No employee with that id
pub async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Envelope<()>>> {
    let Path(id) = path?;
    state.employees.delete(&id).await?;

    Ok(Json(Envelope::message("Employee deleted successfully")))
}
