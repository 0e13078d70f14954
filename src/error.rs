//! 错误类型定义
//!
//! 所有对外暴露的错误都通过 `DocCacheError` 表达，消息文本经由 i18n 模块生成

use thiserror::Error;

/// 文档缓存键库错误
#[derive(Error, Debug)]
pub enum DocCacheError {
    /// 缓存键格式错误（分段数量不足等）
    #[error("{message}")]
    KeyFormatError { message: String },

    /// 序列化/反序列化错误（投影哈希不是合法 JSON 等）
    #[error("{message}")]
    SerializationError { message: String },

    /// 输入校验失败
    #[error("{field}: {message}")]
    ValidationError { field: String, message: String },

    /// 调用前置条件被违反（空批量、批量键不一致）
    #[error("{message}")]
    PreconditionError { message: String },

    /// 配置错误
    #[error("{message}")]
    ConfigError { message: String },

    /// 异步桥接错误
    #[error("{message}")]
    BridgeError { message: String },

    /// IO 错误
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// 库统一结果类型
pub type DocCacheResult<T> = Result<T, DocCacheError>;

/// 快速构造错误
///
/// ```ignore
/// doc_error!(config, "日志级别必须设置");
/// doc_error!(validation, "_id", "不支持的类型");
/// ```
#[macro_export]
macro_rules! doc_error {
    (key_format, $msg:expr) => {
        $crate::error::DocCacheError::KeyFormatError { message: ($msg).into() }
    };
    (serialization, $msg:expr) => {
        $crate::error::DocCacheError::SerializationError { message: ($msg).into() }
    };
    (validation, $field:expr, $msg:expr) => {
        $crate::error::DocCacheError::ValidationError {
            field: ($field).into(),
            message: ($msg).into(),
        }
    };
    (precondition, $msg:expr) => {
        $crate::error::DocCacheError::PreconditionError { message: ($msg).into() }
    };
    (config, $msg:expr) => {
        $crate::error::DocCacheError::ConfigError { message: ($msg).into() }
    };
    (bridge, $msg:expr) => {
        $crate::error::DocCacheError::BridgeError { message: ($msg).into() }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_builds_expected_variant() {
        let err = crate::doc_error!(validation, "_id", "bad");
        match err {
            DocCacheError::ValidationError { field, message } => {
                assert_eq!(field, "_id");
                assert_eq!(message, "bad");
            }
            other => panic!("unexpected variant: {:?}", other),
        }

        let err = crate::doc_error!(config, String::from("missing"));
        assert_eq!(err.to_string(), "missing");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DocCacheError = io.into();
        assert!(matches!(err, DocCacheError::IoError(_)));
    }
}
