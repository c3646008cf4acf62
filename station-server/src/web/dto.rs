//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{StationDraft, ValidationError};

/// Body of a create or update request.
///
/// Every field is optional here so that missing values surface as
/// validation errors rather than parse errors. Any `id` in the body is
/// ignored; the repository or the URL path decides the target.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationBody {
    /// Call sign (e.g., "2GB")
    #[serde(default, alias = "CallSign")]
    pub call_sign: Option<String>,

    /// Station code
    #[serde(default, alias = "Code")]
    pub code: Option<String>,

    /// State or territory (e.g., "NSW")
    #[serde(default, alias = "State")]
    pub state: Option<String>,

    /// City, may be omitted
    #[serde(default, alias = "City")]
    pub city: Option<String>,
}

impl StationBody {
    /// Validate the body into a draft, reporting every missing field.
    pub fn into_draft(self) -> Result<StationDraft, ValidationError> {
        StationDraft::validate(self.call_sign, self.code, self.state, self.city)
    }
}

/// Response for a rejected write.
#[derive(Debug, Serialize)]
pub struct ValidationProblem {
    /// Summary message
    pub error: String,

    /// Messages keyed by field name
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    /// Create from a domain validation error.
    pub fn from_error(err: &ValidationError) -> Self {
        let errors = err
            .fields()
            .iter()
            .map(|f| (f.name().to_string(), vec![f.message()]))
            .collect();

        Self {
            error: "One or more validation errors occurred.".to_string(),
            errors,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
