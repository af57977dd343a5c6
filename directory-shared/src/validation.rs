/// Validation layer for employee payloads
///
/// Pure checks applied before any store access. Values are normalized first
/// (trimmed, email lower-cased) and then checked with `validator`. All field
/// violations are collected; identifier checks short-circuit.
///
/// # Example
///
/// ```
/// use directory_shared::models::employee::CreateEmployeeRequest;
/// use directory_shared::validation::validate_create;
///
/// let req = CreateEmployeeRequest {
///     name: "  Ann Lee ".to_string(),
///     email: "ANN@X.COM".to_string(),
///     position: "Engineer".to_string(),
/// };
///
/// let employee = validate_create(&req).unwrap();
/// assert_eq!(employee.name, "Ann Lee");
/// assert_eq!(employee.email, "ann@x.com");
/// ```

use crate::models::employee::{
    CreateEmployeeRequest, EmployeeChanges, NewEmployee, UpdateEmployeeRequest,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// `local-part@domain`, word characters optionally separated by single `.`/`-`,
/// ending in a 2-3 character top-level segment
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$",
    )
    .expect("email pattern compiles")
});

/// Fields reported in the order a form displays them
const FIELD_ORDER: [&str; 3] = ["name", "email", "position"];

/// A single field violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field that failed validation
    pub field: String,

    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Normalized values awaiting shape checks
///
/// `None` means "not supplied" (update) or "already reported as required".
#[derive(Debug, Default, Validate)]
struct EmployeeDraft {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    name: Option<String>,

    #[validate(regex(path = *EMAIL_PATTERN, message = "Please provide a valid email address"))]
    email: Option<String>,

    #[validate(length(min = 2, max = 100, message = "Position must be between 2 and 100 characters"))]
    position: Option<String>,
}

/// Checks a create payload; every field is required
///
/// # Errors
///
/// Returns every violation found, in name/email/position order.
pub fn validate_create(req: &CreateEmployeeRequest) -> Result<NewEmployee, Vec<FieldError>> {
    let mut errors = Vec::new();

    let draft = EmployeeDraft {
        name: required("name", "Name", normalize_text(&req.name), &mut errors),
        email: required("email", "Email", normalize_email(&req.email), &mut errors),
        position: required("position", "Position", normalize_text(&req.position), &mut errors),
    };

    let draft = check_draft(draft, errors)?;

    match (draft.name, draft.email, draft.position) {
        (Some(name), Some(email), Some(position)) => Ok(NewEmployee {
            name,
            email,
            position,
        }),
        // every None was reported as required above
        _ => Err(vec![FieldError::new("body", "Invalid employee payload")]),
    }
}

/// Checks an update payload; only supplied fields are checked
///
/// A supplied field that is empty after trimming is reported as required.
pub fn validate_update(req: &UpdateEmployeeRequest) -> Result<EmployeeChanges, Vec<FieldError>> {
    let mut errors = Vec::new();

    let draft = EmployeeDraft {
        name: req
            .name
            .as_deref()
            .and_then(|v| required("name", "Name", normalize_text(v), &mut errors)),
        email: req
            .email
            .as_deref()
            .and_then(|v| required("email", "Email", normalize_email(v), &mut errors)),
        position: req
            .position
            .as_deref()
            .and_then(|v| required("position", "Position", normalize_text(v), &mut errors)),
    };

    let draft = check_draft(draft, errors)?;

    Ok(EmployeeChanges {
        name: draft.name,
        email: draft.email,
        position: draft.position,
    })
}

/// Parses a path-supplied identifier
///
/// # Errors
///
/// Returns an `id` field error if the value is not a UUID.
pub fn parse_id(raw: &str) -> Result<Uuid, FieldError> {
    Uuid::parse_str(raw.trim()).map_err(|_| FieldError::new("id", "Invalid employee ID"))
}

/// Normalizes a search query; empty means "no filter"
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.filter(|q| !q.is_empty()).map(str::to_lowercase)
}

pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

fn required(
    field: &str,
    label: &str,
    value: String,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
        None
    } else {
        Some(value)
    }
}

fn check_draft(
    draft: EmployeeDraft,
    mut errors: Vec<FieldError>,
) -> Result<EmployeeDraft, Vec<FieldError>> {
    if let Err(e) = draft.validate() {
        errors.extend(field_errors(&e));
    }

    if errors.is_empty() {
        Ok(draft)
    } else {
        errors.sort_by_key(|e| {
            FIELD_ORDER
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(FIELD_ORDER.len())
        });
        Err(errors)
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string()),
            })
        })
        .collect()
}
