//! # Employee Directory Shared Library
//!
//! This crate contains the employee model, validation rules, persistence and
//! the resource service used by both the API server and the client.
//!
//! ## Module Organization
//!
//! - `models`: Employee record and create/update inputs
//! - `validation`: Payload, identifier and search-query checks
//! - `store`: `RecordStore` trait with PostgreSQL and in-memory implementations
//! - `service`: CRUD orchestration over an injected store
//! - `envelope`: Uniform `{ success, data, count, message, errors }` wrapper
//! - `db`: Connection pool and migrations

pub mod db;
pub mod envelope;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
