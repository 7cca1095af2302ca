//! Error types for the ps-app service layer.

/// Which form field an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FlowRate,
    Pressure,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FlowRate => "flow rate",
            Field::Pressure => "pressure",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Application error type providing a unified error interface for both
/// CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid {field} input: {text:?} is not a finite number")]
    InvalidInput { field: Field, text: String },

    #[error("Selection index out of range: {index} (shortlist has {len} entries)")]
    SelectionOutOfRange { index: usize, len: usize },
}

/// Result type for ps-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversion from the engine's validation error. The engine names the field
// by label; map it back onto the form field so frontends can point at the
// offending input.
impl From<ps_select::SelectError> for AppError {
    fn from(err: ps_select::SelectError) -> Self {
        let ps_select::SelectError::NonFinite { field, value } = err;
        AppError::InvalidInput {
            field: if field == Field::Pressure.label() {
                Field::Pressure
            } else {
                Field::FlowRate
            },
            text: value.to_string(),
        }
    }
}
