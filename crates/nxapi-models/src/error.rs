//! Error types for the `nxapi-models` crate.
//!
//! Argument checks performed before a request is built, and enum
//! conversions from wire values, return variants of [`ModelError`].

/// Errors produced when validating arguments or converting wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A required argument was empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A pagination bound was negative.
    #[error("{field} cannot be negative (got {value})")]
    NegativeBound {
        /// The name of the offending bound (`skip` or `take`).
        field: String,
        /// The value that failed validation.
        value: i64,
    },

    /// An ATC facility type code outside the known range.
    #[error("invalid ATC type code {0}")]
    InvalidAtcType(u8),
}

impl ModelError {
    /// Return `Ok(value)` when `value` is non-empty after trimming.
    ///
    /// ```
    /// use nxapi_models::ModelError;
    ///
    /// assert_eq!(ModelError::require("icao", "EDDF"), Ok("EDDF"));
    /// assert!(ModelError::require("icao", "  ").is_err());
    /// ```
    pub fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, ModelError> {
        if value.trim().is_empty() {
            Err(ModelError::MissingField {
                field: field.to_string(),
            })
        } else {
            Ok(value)
        }
    }

    /// Return `Ok(value)` when the optional bound is absent or non-negative.
    pub fn non_negative(field: &str, value: Option<i64>) -> Result<Option<i64>, ModelError> {
        match value {
            Some(v) if v < 0 => Err(ModelError::NegativeBound {
                field: field.to_string(),
                value: v,
            }),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_missing_field() {
        let err = ModelError::MissingField {
            field: "icao".into(),
        };
        assert_eq!(err.to_string(), "missing required field: icao");
    }

    #[test]
    fn error_display_negative_bound() {
        let err = ModelError::NegativeBound {
            field: "skip".into(),
            value: -1,
        };
        assert_eq!(err.to_string(), "skip cannot be negative (got -1)");
    }

    #[test]
    fn require_rejects_blank() {
        assert!(ModelError::require("user", "").is_err());
        assert!(ModelError::require("user", "\t").is_err());
        assert_eq!(ModelError::require("user", "flybywiresim"), Ok("flybywiresim"));
    }

    #[test]
    fn non_negative_bounds() {
        assert_eq!(ModelError::non_negative("take", None), Ok(None));
        assert_eq!(ModelError::non_negative("take", Some(0)), Ok(Some(0)));
        assert_eq!(
            ModelError::non_negative("take", Some(-5)),
            Err(ModelError::NegativeBound {
                field: "take".into(),
                value: -5
            })
        );
    }
}
