//! Error types for the planning engine.
//!
//! Only invalid parameters and I/O failures are errors. Malformed price rows
//! and checkpoints without a nearby station are absorbed by the engine.

/// Rejected planner parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("fuel range must be a positive number of miles, got {0}")]
    InvalidRange(f64),

    #[error("fuel economy must be a positive miles-per-gallon figure, got {0}")]
    InvalidMpg(f64),

    #[error("search radius must be a positive number of miles, got {0}")]
    InvalidSearchRadius(f64),
}

/// Failures reading a station price list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open price list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read price list header: {0}")]
    Header(#[from] csv::Error),
}

/// Failures decoding an encoded route polyline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    #[error("invalid polyline character {ch:?} at byte {index}")]
    InvalidCharacter { ch: char, index: usize },

    #[error("polyline ended in the middle of a value")]
    Truncated,

    #[error("polyline value overflows at byte {0}")]
    Overflow(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlanError::InvalidRange(0.0);
        assert_eq!(
            err.to_string(),
            "fuel range must be a positive number of miles, got 0"
        );

        let err = PlanError::InvalidMpg(-2.5);
        assert_eq!(
            err.to_string(),
            "fuel economy must be a positive miles-per-gallon figure, got -2.5"
        );

        let err = PolylineError::InvalidCharacter { ch: ' ', index: 3 };
        assert_eq!(err.to_string(), "invalid polyline character ' ' at byte 3");
    }
}
