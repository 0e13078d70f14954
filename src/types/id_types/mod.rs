use crate::error::DocCacheResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 文档 ID 类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdType {
    /// 数字 ID
    Number(i64),
    /// 字符串 ID
    String(String),
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdType::Number(n) => write!(f, "{}", n),
            IdType::String(s) => write!(f, "{}", s),
        }
    }
}

impl IdType {
    /// 从 JSON 标量解析 ID
    ///
    /// `null` 返回 `None`；字符串和整数为合法 ID；其余类型报错
    pub fn from_json(value: &Value) -> DocCacheResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(IdType::String(s.clone()))),
            Value::Number(n) => n.as_i64().map(|n| Some(IdType::Number(n))).ok_or_else(|| {
                crate::doc_error!(
                    validation,
                    "_id",
                    crate::i18n::message("error.unsupported_id", &[("value", &n.to_string())])
                )
            }),
            other => Err(crate::doc_error!(
                validation,
                "_id",
                crate::i18n::message("error.unsupported_id", &[("value", &other.to_string())])
            )),
        }
    }

    /// 转换为 JSON 值
    pub fn to_json(&self) -> Value {
        match self {
            IdType::Number(n) => Value::from(*n),
            IdType::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<i64> for IdType {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for IdType {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for IdType {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_stringifies_scalar() {
        assert_eq!(IdType::from(42).to_string(), "42");
        assert_eq!(IdType::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(IdType::from_json(&json!(null)).unwrap(), None);
        assert_eq!(IdType::from_json(&json!("x")).unwrap(), Some(IdType::from("x")));
        assert_eq!(IdType::from_json(&json!(7)).unwrap(), Some(IdType::from(7)));
        assert!(IdType::from_json(&json!(1.5)).is_err());
        assert!(IdType::from_json(&json!(true)).is_err());
        assert!(IdType::from_json(&json!({"a": 1})).is_err());
    }
}
