use std::error::Error;

/// Base trait for all penmap errors
pub trait PenmapError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error is caused by the user's environment rather than a bug
    fn is_user_error(&self) -> bool {
        false
    }
}
