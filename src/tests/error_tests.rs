use crate::error::{ErrorContext, OctofitError};
use crate::octofit_error;

#[test]
fn test_http_status_message() {
    let error = OctofitError::HttpStatus(404);
    assert_eq!(error.to_string(), "HTTP error! status: 404");
}

#[test]
fn test_view_failed_is_verbatim() {
    let error = OctofitError::ViewFailed("HTTP error! status: 500".to_string());
    assert_eq!(error.to_string(), "HTTP error! status: 500");
}

#[test]
fn test_json_error_conversion() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let error: OctofitError = parse.unwrap_err().into();
    assert!(matches!(error, OctofitError::JsonError(_)));
    assert!(error.to_string().starts_with("JSON error:"));
}

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));
    
    let octofit_result = result.context("Failed to read config file");
    assert!(octofit_result.is_err());
    
    match octofit_result {
        Err(OctofitError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected OctofitError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Base URL not found");
    
    match result {
        Err(OctofitError::Unknown(msg)) => {
            assert_eq!(msg, "Base URL not found");
        }
        _ => panic!("Expected OctofitError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));
    
    let octofit_result = result.with_context(|| {
        format!("Failed to access file at path: {}", "/tmp/test.txt")
    });
    
    match octofit_result {
        Err(OctofitError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected OctofitError::Unknown"),
    }
}

#[test]
fn test_octofit_error_macro() {
    let error = octofit_error!(ConfigError, "Config unreadable");
    match error {
        OctofitError::ConfigError(msg) => assert_eq!(msg, "Config unreadable"),
        _ => panic!("Expected OctofitError::ConfigError"),
    }
    
    let error = octofit_error!(UnknownRoute, "No view at {}", "/nope");
    match error {
        OctofitError::UnknownRoute(msg) => assert_eq!(msg, "No view at /nope"),
        _ => panic!("Expected OctofitError::UnknownRoute"),
    }
}

#[test]
fn test_terminal_error_message() {
    let err = octofit_error!(TerminalError, "failed to enable raw mode: {}", "not a tty");
    assert_eq!(err.to_string(), "Terminal error: failed to enable raw mode: not a tty");
}
