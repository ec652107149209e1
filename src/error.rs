use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctofitError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A view settled in its error state; the view already showed the message
    #[error("{0}")]
    ViewFailed(String),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type OctofitResult<T> = Result<T, OctofitError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> OctofitResult<T>;
    fn with_context<F>(self, f: F) -> OctofitResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> OctofitResult<T> {
        self.map_err(|e| OctofitError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> OctofitResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| OctofitError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> OctofitResult<T> {
        self.ok_or_else(|| OctofitError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> OctofitResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| OctofitError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! octofit_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::OctofitError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::OctofitError::$error_type(format!($fmt, $($arg)*))
    };
}
