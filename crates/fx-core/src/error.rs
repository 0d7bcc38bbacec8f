use thiserror::Error;

/// Errors surfaced at configuration time. Animation itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("invalid value {value:?} for `{key}`: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("unknown configuration key `{0}`")]
    UnknownConfigKey(String),
    #[error("counter target {0:?} is not a finite number")]
    InvalidCounterTarget(String),
}

pub type Result<T> = std::result::Result<T, FxError>;
