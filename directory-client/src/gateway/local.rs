/// In-process implementation of `EmployeeApi`
///
/// Runs the shared `EmployeeService` over a `MemoryStore` and maps service
/// errors to the same statuses and messages the HTTP API would send. Useful
/// for:
/// - Testing views without a server
/// - Demos (`DIRECTORY_API_URL=local`)
///
/// Every `list` call is recorded, and a per-search latency can be injected to
/// simulate slow responses arriving out of order.

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::EmployeeApi;
use async_trait::async_trait;
use directory_shared::models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use directory_shared::service::{EmployeeService, ServiceError};
use directory_shared::store::MemoryStore;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;
use uuid::Uuid;

/// Gateway over an in-memory directory
pub struct LocalGateway {
    service: EmployeeService,
    list_calls: Mutex<Vec<Option<String>>>,
    list_latency: Mutex<HashMap<String, Duration>>,
}

impl Default for LocalGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalGateway {
    /// Creates a gateway over an empty directory
    pub fn new() -> Self {
        Self {
            service: EmployeeService::new(Arc::new(MemoryStore::new())),
            list_calls: Mutex::new(Vec::new()),
            list_latency: Mutex::new(HashMap::new()),
        }
    }

    /// Delays `list` responses for the given search term (`""` for no search)
    pub async fn set_list_latency(&self, search: &str, latency: Duration) {
        self.list_latency
            .lock()
            .await
            .insert(search.to_string(), latency);
    }

    /// Search terms of every `list` call so far, in call order
    pub async fn list_calls(&self) -> Vec<Option<String>> {
        self.list_calls.lock().await.clone()
    }
}

/// Mirrors the HTTP boundary's status mapping
fn map_service_error(err: ServiceError) -> GatewayError {
    match err {
        ServiceError::Validation(errors) => GatewayError::Api {
            status: 400,
            message: "Validation failed".to_string(),
            errors,
        },
        ServiceError::InvalidArgument(field) => GatewayError::Api {
            status: 400,
            message: field.message.clone(),
            errors: vec![field],
        },
        ServiceError::Conflict(message) => GatewayError::Api {
            status: 400,
            message,
            errors: Vec::new(),
        },
        ServiceError::NotFound(message) => GatewayError::Api {
            status: 404,
            message,
            errors: Vec::new(),
        },
        ServiceError::Internal(_) => GatewayError::Api {
            status: 500,
            message: "Internal server error".to_string(),
            errors: Vec::new(),
        },
    }
}

#[async_trait]
impl EmployeeApi for LocalGateway {
    async fn list(&self, search: Option<&str>) -> GatewayResult<Vec<Employee>> {
        self.list_calls
            .lock()
            .await
            .push(search.map(str::to_string));

        let latency = self
            .list_latency
            .lock()
            .await
            .get(search.unwrap_or(""))
            .copied();

        if let Some(latency) = latency {
            sleep(latency).await;
        }

        self.service.list(search).await.map_err(map_service_error)
    }

    async fn get(&self, id: Uuid) -> GatewayResult<Employee> {
        self.service
            .get(&id.to_string())
            .await
            .map_err(map_service_error)
    }

    async fn create(&self, request: &CreateEmployeeRequest) -> GatewayResult<Employee> {
        self.service.create(request).await.map_err(map_service_error)
    }

    async fn update(&self, id: Uuid, request: &UpdateEmployeeRequest) -> GatewayResult<Employee> {
        self.service
            .update(&id.to_string(), request)
            .await
            .map_err(map_service_error)
    }

    async fn delete(&self, id: Uuid) -> GatewayResult<()> {
        self.service
            .delete(&id.to_string())
            .await
            .map_err(map_service_error)
    }
}
