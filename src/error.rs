use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    ElevationGain,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::Cadence => "cadence",
            Self::ElevationGain => "elevation gain",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected workout form submission.
///
/// Always raised before an id is drawn or the store is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: Field },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: Field, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: Field, value: f64 },

    #[error("unknown workout type: {0:?}")]
    UnknownKind(String),
}

impl ValidationError {
    /// Message shown to the user when a submission is rejected.
    pub const ALERT: &'static str = "Inputs have to be a positive number";

    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Missing { field }
            | Self::NotFinite { field, .. }
            | Self::NotPositive { field, .. } => Some(*field),
            Self::UnknownKind(_) => None,
        }
    }
}
