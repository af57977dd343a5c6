/// Employee model and its inputs
///
/// The employee is the only entity in the directory. Request types carry what a
/// caller sent; `NewEmployee` and `EmployeeChanges` carry what survived
/// normalization and validation and are the only inputs a store accepts.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE employees (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(100) NOT NULL,
///     email VARCHAR(254) NOT NULL,
///     position VARCHAR(100) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
/// );
/// CREATE UNIQUE INDEX employees_email_key ON employees (LOWER(email));
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored employee
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`) to match the
/// HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-generated identifier, never reused
    pub id: Uuid,

    /// Display name, trimmed, 2-100 characters
    pub name: String,

    /// Lower-cased email address, unique across all employees
    pub email: String,

    /// Job title, trimmed, 2-100 characters
    pub position: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last changed
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns true if `needle` (already lower-cased) occurs in name, email or position
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.position]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Body of `POST /employees`
///
/// Missing fields deserialize as empty strings so that validation can report
/// them as required instead of failing the whole body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub position: String,
}

/// Body of `PUT /employees/:id`
///
/// Every field is optional. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// A validated, normalized employee ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub position: String,
}

/// Validated, normalized changes for an existing employee
///
/// Only `Some` fields are written. An empty change set still refreshes
/// `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}

impl EmployeeChanges {
    /// Returns true if no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.position.is_none()
    }

    /// Applies the changes to an in-memory record
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(position) = &self.position {
            employee.position = position.clone();
        }
    }
}
