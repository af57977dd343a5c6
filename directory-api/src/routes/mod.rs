/// API route handlers
///
/// - `health`: Liveness check
/// - `employees`: Employee CRUD endpoints

pub mod employees;
pub mod health;
