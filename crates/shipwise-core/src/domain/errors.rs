//! Errors - エラー型と分類
//!
//! 解決処理（resolver）自体はエラーを返さない。ここにあるのは
//! 入力検証・courier lookup・設定読み込みのエラーだけ。

use std::time::Duration;

use thiserror::Error;

/// ErrorKind は lookup エラーの運用分類
///
/// - Transient: 一時的なエラー（リトライ推奨）
/// - Permanent: 恒久的なエラー（リトライ無意味）
/// - Infrastructure: 上流の障害
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transient,
    Permanent,
    Infrastructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("postal code must not be empty")]
    EmptyPostalCode,

    #[error("parcel weight must be a positive number of grams")]
    ZeroWeight,
}

/// Failure of a courier-serviceability lookup.
///
/// The resolver recovers from every variant by offering the transport
/// fallback; the classification only matters to lookup wrappers such as
/// the retrying courier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("courier lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("courier upstream error: {0}")]
    Upstream(String),

    #[error("malformed courier response: {0}")]
    MalformedResponse(String),

    #[error("postal code '{0}' is not in the courier's format")]
    InvalidPostalCode(String),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Timeout(_) => ErrorKind::Transient,
            LookupError::Upstream(_) => ErrorKind::Infrastructure,
            LookupError::MalformedResponse(_) | LookupError::InvalidPostalCode(_) => {
                ErrorKind::Permanent
            }
        }
    }

    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_timeouts_are_transient() {
        assert!(LookupError::Timeout(Duration::from_secs(1)).is_transient());
        assert!(!LookupError::Upstream("502".into()).is_transient());
        assert_eq!(
            LookupError::MalformedResponse("x".into()).kind(),
            ErrorKind::Permanent
        );
        assert_eq!(
            LookupError::InvalidPostalCode("abc".into()).kind(),
            ErrorKind::Permanent
        );
        assert_eq!(
            LookupError::Upstream("502".into()).kind(),
            ErrorKind::Infrastructure
        );
    }
}
