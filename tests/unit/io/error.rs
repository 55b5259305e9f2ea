//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use gridwalk::GenerationError;
    use gridwalk::io::error::{WithContext, invalid_grid, invalid_parameter};
    use std::error::Error;
    use std::io;
    use std::path::{Path, PathBuf};

    // Tests parameter errors name the parameter, value and reason
    // Verified by dropping the value from the display format
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("shapes", &16, &"must be at most 15");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'shapes' = '16': must be at most 15"
        );
        assert!(err.source().is_none());
    }

    // Tests grid errors carry their reason
    // Verified by changing the display prefix
    #[test]
    fn test_invalid_grid_display() {
        let err = invalid_grid(&"width 410 is not a multiple of cell width 20");
        assert_eq!(
            err.to_string(),
            "Invalid grid: width 410 is not a multiple of cell width 20"
        );
    }

    // Tests file system errors expose the underlying I/O error
    // Verified by returning None from source
    #[test]
    fn test_file_system_source_chain() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let Err(err) = result.with_path(Path::new("out/paths.json"), "write") else {
            unreachable!("error input must stay an error");
        };

        let message = err.to_string();
        assert!(message.contains("during write"));
        assert!(message.contains("out/paths.json"));
        assert!(message.contains("missing"));
        assert!(err.source().is_some());
    }

    // Tests bare I/O errors are attributed to stdout
    // Verified by changing the fallback path
    #[test]
    fn test_io_error_conversion() {
        let err = GenerationError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        match err {
            GenerationError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, PathBuf::from("<stdout>"));
                assert_eq!(operation, "write");
            }
            other => unreachable!("expected FileSystem, got {other:?}"),
        }
    }

    // Tests serializer errors convert and chain
    // Verified by mapping serde errors to InvalidParameter
    #[test]
    fn test_serialization_conversion() {
        let Err(json_err) = serde_json::from_str::<u32>("not json") else {
            unreachable!("input is not valid JSON");
        };
        let err = GenerationError::from(json_err);

        assert!(matches!(err, GenerationError::Serialization { .. }));
        assert!(err.to_string().starts_with("Failed to serialize output"));
        assert!(err.source().is_some());
    }
}
