//! Repository error types.

use crate::domain::StationId;

/// Errors that can occur when reading or writing stations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No station has the requested id
    #[error("station {0} not found")]
    NotFound(StationId),

    /// Every representable id has already been handed out
    #[error("station id space exhausted")]
    IdsExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RepositoryError::NotFound(StationId::parse(16).unwrap());
        assert_eq!(err.to_string(), "station 16 not found");

        assert_eq!(
            RepositoryError::IdsExhausted.to_string(),
            "station id space exhausted"
        );
    }
}
