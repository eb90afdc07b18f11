//! Error handling for the pairing ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_functions() {
        assert!(validate::parameter(true, "workers", "must be non-zero").is_ok());
        let err = validate::parameter(false, "workers", "must be non-zero").unwrap_err();
        match err {
            Error::InvalidParameter { context, message } => {
                assert_eq!(context, "workers");
                assert_eq!(message, "must be non-zero");
            }
            _ => panic!("Expected InvalidParameter error"),
        }

        assert!(validate::length("batch", 4, 4).is_ok());
        let err = validate::length("batch", 3, 4).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "batch",
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_with_context() {
        let err = Error::UninitializedParameters { context: "pairing" }.with_context("batch_pairing");
        assert_eq!(err, Error::UninitializedParameters { context: "batch_pairing" });

        let err = Error::InvalidLength {
            context: "bytes",
            expected: 32,
            actual: 31,
        }
        .with_context("Fp::from_slice");
        assert_eq!(
            err.to_string(),
            "Fp::from_slice: invalid length (expected 32, got 31)"
        );
    }

    #[test]
    fn test_display() {
        let err = Error::ArithmeticFailure {
            context: "miller_loop",
            message: "denominator is not invertible".into(),
        };
        assert_eq!(
            err.to_string(),
            "Arithmetic failure in miller_loop: denominator is not invertible"
        );
    }
}
