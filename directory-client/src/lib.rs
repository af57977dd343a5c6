//! # Employee Directory Client Library
//!
//! Client side of the employee directory: a gateway to the API and the
//! view-models a front-end drives.
//!
//! ## Modules
//!
//! - `config`: Client configuration
//! - `error`: Normalized gateway errors
//! - `gateway`: `EmployeeApi` trait with HTTP and in-process implementations
//! - `views`: List with debounced search, form, delete confirmation, notices
//! - `app`: Wires the views together
//! - `render`: Plain-text rendering for the terminal front-end
//!
//! ## Example
//!
//! ```no_run
//! use directory_client::{app::DirectoryApp, config::ClientConfig, gateway::HttpGateway};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let gateway = HttpGateway::new(&config.api_url, config.request_timeout)?;
//! let app = DirectoryApp::new(Arc::new(gateway), config.search_debounce);
//!
//! app.list.refresh().await;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod gateway;
pub mod render;
pub mod views;
