/// Client gateway to the employee API
///
/// The views only talk to `EmployeeApi`. Two implementations exist:
///
/// - **HttpGateway**: JSON over HTTP against a running API server
/// - **LocalGateway**: In-process, over the shared service and an in-memory
///   store. Used by tests and demos; it can record calls and inject latency.
///
/// # Example
///
/// ```no_run
/// use directory_client::gateway::{EmployeeApi, HttpGateway};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = HttpGateway::new("http://localhost:5000", Duration::from_secs(30))?;
/// let engineers = gateway.list(Some("eng")).await?;
/// println!("{} matches", engineers.len());
/// # Ok(())
/// # }
/// ```

pub mod http;
pub mod local;

pub use http::HttpGateway;
pub use local::LocalGateway;

use crate::error::GatewayResult;
use async_trait::async_trait;
use directory_shared::models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use uuid::Uuid;

/// Operations the client can perform against the directory
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Lists employees, optionally filtered by a search term
    async fn list(&self, search: Option<&str>) -> GatewayResult<Vec<Employee>>;

    /// Fetches one employee
    async fn get(&self, id: Uuid) -> GatewayResult<Employee>;

    /// Creates an employee
    async fn create(&self, request: &CreateEmployeeRequest) -> GatewayResult<Employee>;

    /// Applies a partial update
    async fn update(&self, id: Uuid, request: &UpdateEmployeeRequest) -> GatewayResult<Employee>;

    /// Deletes an employee
    async fn delete(&self, id: Uuid) -> GatewayResult<()>;
}
