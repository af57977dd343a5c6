/// Create/edit form for one employee
///
/// The form runs the same field rules as the server before sending anything.
/// Errors are kept per field and shown inline; editing a field clears its
/// error. When the server rejects a submission, any field errors it reports
/// are merged in and the entered values stay as they were.

use crate::error::GatewayError;
use crate::gateway::EmployeeApi;
use directory_shared::models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use directory_shared::validation::{validate_create, FieldError};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Editable form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Position,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Position];

    /// Wire name, as used in `FieldError::field`
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Position => "position",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Position => "Position",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

/// Why a submission did not go through
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Local checks failed; nothing was sent
    #[error("Please fix the highlighted fields")]
    Invalid,

    /// The server refused the submission
    #[error(transparent)]
    Rejected(#[from] GatewayError),
}

#[derive(Debug, Clone)]
pub struct EmployeeForm {
    mode: FormMode,
    name: String,
    email: String,
    position: String,
    errors: BTreeMap<Field, String>,
}

impl EmployeeForm {
    /// Blank form for a new employee
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            email: String::new(),
            position: String::new(),
            errors: BTreeMap::new(),
        }
    }

    /// Form pre-filled from an existing employee
    pub fn edit(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit(employee.id),
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            errors: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Position => &self.position,
        }
    }

    /// Updates a field and clears its error
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Position => self.position = value,
        }
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Runs the field rules; returns true when the form can be sent
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        match validate_create(&self.create_request()) {
            Ok(_) => true,
            Err(errors) => {
                self.absorb(&errors);
                false
            }
        }
    }

    /// Validates, then creates or updates through the gateway
    ///
    /// # Errors
    ///
    /// - `SubmitError::Invalid` if local checks fail
    /// - `SubmitError::Rejected` if the server refuses; its field errors are
    ///   merged into the form
    pub async fn submit(&mut self, api: &dyn EmployeeApi) -> Result<Employee, SubmitError> {
        if !self.validate() {
            return Err(SubmitError::Invalid);
        }

        let result = match self.mode {
            FormMode::Create => api.create(&self.create_request()).await,
            FormMode::Edit(id) => api.update(id, &self.update_request()).await,
        };

        result.map_err(|err| {
            self.absorb(err.field_errors());
            SubmitError::Rejected(err)
        })
    }

    fn create_request(&self) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
        }
    }

    fn update_request(&self) -> UpdateEmployeeRequest {
        UpdateEmployeeRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            position: Some(self.position.clone()),
        }
    }

    // first message per field wins
    fn absorb(&mut self, errors: &[FieldError]) {
        for error in errors {
            if let Some(field) = Field::from_name(&error.field) {
                self.errors
                    .entry(field)
                    .or_insert_with(|| error.message.clone());
            }
        }
    }
}
