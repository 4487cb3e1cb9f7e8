use thiserror::Error;

pub type ShellResult<T> = Result<T, ShellError>;

/// Failures that end a shell session.
///
/// Inventory errors are not listed here: the session renders them and
/// carries on.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid {key}='{value}': {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ShellError {
    pub fn config(key: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Config {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
