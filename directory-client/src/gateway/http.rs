/// HTTP implementation of `EmployeeApi`
///
/// Every response body is an envelope. Success envelopes yield their `data`;
/// failure envelopes become `GatewayError::Api` with the status, message and
/// field errors the server sent.

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::EmployeeApi;
use async_trait::async_trait;
use directory_shared::envelope::Envelope;
use directory_shared::models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

/// Gateway over a running API server
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for `base_url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn employee_url(&self, id: Uuid) -> String {
        self.url(&format!("/employees/{}", id))
    }

    /// Decodes a response into its envelope, or a normalized error
    async fn handle_response<T: DeserializeOwned>(response: Response) -> GatewayResult<Envelope<T>> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let fallback = status.canonical_reason().unwrap_or("Request failed").to_string();

            return Err(match serde_json::from_slice::<Envelope<serde_json::Value>>(&bytes) {
                Ok(envelope) => GatewayError::Api {
                    status: status.as_u16(),
                    message: envelope.message.unwrap_or(fallback),
                    errors: envelope.errors.unwrap_or_default(),
                },
                Err(_) => GatewayError::Api {
                    status: status.as_u16(),
                    message: fallback,
                    errors: Vec::new(),
                },
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    fn take_data<T>(envelope: Envelope<T>) -> GatewayResult<T> {
        envelope
            .data
            .ok_or_else(|| GatewayError::Decode("Missing data in response".to_string()))
    }
}

#[async_trait]
impl EmployeeApi for HttpGateway {
    async fn list(&self, search: Option<&str>) -> GatewayResult<Vec<Employee>> {
        let mut request = self.client.get(self.url("/employees"));

        if let Some(term) = search.filter(|term| !term.is_empty()) {
            request = request.query(&[("search", term)]);
        }

        let response = request.send().await?;
        Self::take_data(Self::handle_response(response).await?)
    }

    async fn get(&self, id: Uuid) -> GatewayResult<Employee> {
        let response = self.client.get(self.employee_url(id)).send().await?;
        Self::take_data(Self::handle_response(response).await?)
    }

    async fn create(&self, request: &CreateEmployeeRequest) -> GatewayResult<Employee> {
        let response = self
            .client
            .post(self.url("/employees"))
            .json(request)
            .send()
            .await?;

        let employee: Employee = Self::take_data(Self::handle_response(response).await?)?;
        tracing::debug!(employee_id = %employee.id, "Created employee");
        Ok(employee)
    }

    async fn update(&self, id: Uuid, request: &UpdateEmployeeRequest) -> GatewayResult<Employee> {
        let response = self
            .client
            .put(self.employee_url(id))
            .json(request)
            .send()
            .await?;

        Self::take_data(Self::handle_response(response).await?)
    }

    async fn delete(&self, id: Uuid) -> GatewayResult<()> {
        let response = self.client.delete(self.employee_url(id)).send().await?;
        Self::handle_response::<serde_json::Value>(response).await?;

        tracing::debug!(employee_id = %id, "Deleted employee");
        Ok(())
    }
}
