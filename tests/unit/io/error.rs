//! Tests for error messages and context propagation

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;

    use nees::GenerationError;
    use nees::io::error::{ErrorContext, WithContext};

    // Tests user-facing messages name the offending value
    // Verified by dropping the value from the message
    #[test]
    fn test_messages() {
        assert_eq!(
            GenerationError::UnimplementedRule { rule: 7 }.to_string(),
            "Rule 7 is not implemented (expected 0 to 4)"
        );
        let invalid = GenerationError::InvalidParameter {
            parameter: "p",
            value: "2".to_string(),
            reason: "p must be at least 3".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid parameter 'p' = '2': p must be at least 3"
        );
        let option = GenerationError::UnimplementedOption {
            parameter: "mode",
            value: "triangle".to_string(),
        };
        assert!(option.to_string().contains("triangle"));
    }

    // Tests exhaustion messages include the cell once known
    // Verified by always printing the cell
    #[test]
    fn test_exhausted_message() {
        let bare = GenerationError::SamplingExhausted {
            operation: "walk step",
            attempts: 5,
            cell: None,
        };
        assert_eq!(bare.to_string(), "Sampling exhausted in walk step after 5 draws");

        let located: nees::Result<()> = Err(bare);
        let err = located.with_cell((2, 3)).unwrap_err();
        assert!(err.to_string().ends_with("(cell 2,3)"));
    }

    // Tests an existing cell is not overwritten by outer context
    // Verified by overwriting unconditionally
    #[test]
    fn test_context_keeps_inner_cell() {
        let inner: nees::Result<()> = Err(GenerationError::SamplingExhausted {
            operation: "step",
            attempts: 1,
            cell: Some((0, 1)),
        });
        let err = inner
            .with_context(ErrorContext { cell: Some((5, 5)) })
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::SamplingExhausted {
                cell: Some((0, 1)),
                ..
            }
        ));
    }

    // Tests context leaves unrelated errors untouched
    // Verified by converting every error to SamplingExhausted
    #[test]
    fn test_context_other_errors() {
        let result: nees::Result<()> = Err(GenerationError::UnbalancedRestore);
        assert!(matches!(
            result.with_cell((1, 1)),
            Err(GenerationError::UnbalancedRestore)
        ));
    }

    // Tests I/O failures expose their source
    // Verified by returning None from source()
    #[test]
    fn test_io_source() {
        let err = GenerationError::SvgExport {
            path: PathBuf::from("out.svg"),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out.svg"));

        let converted: GenerationError = std::io::Error::other("boom").into();
        assert!(matches!(converted, GenerationError::FileSystem { .. }));
    }
}
