//! 缓存键解析模块

use crate::types::{FindOptions, IdType, Selector, SelectorParts};
use crate::error::DocCacheResult;
use rat_logger::debug;
use serde_json::Value;

use super::generator::{KEY_DELIMITER, KeyGenerator};

/// 缓存键拆分后的三个片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeySegments<'a> {
    pub collection_name: &'a str,
    pub id: &'a str,
    pub fields_hash: &'a str,
}

/// 按分隔符拆分缓存键
///
/// 最多拆成三段，第二个分隔符之后的内容全部属于投影哈希
pub(crate) fn split_key(key: &str) -> DocCacheResult<KeySegments<'_>> {
    let mut parts = key.splitn(3, KEY_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(collection_name), Some(id), Some(fields_hash)) => Ok(KeySegments {
            collection_name,
            id,
            fields_hash,
        }),
        _ => {
            let count = key.split(KEY_DELIMITER).count();
            Err(crate::doc_error!(
                key_format,
                crate::i18n::message("error.key_format", &[("count", &count.to_string()), ("key", key)])
            ))
        }
    }
}

impl KeyGenerator {
    /// 解析单个缓存键
    ///
    /// 还原出的 `_id` 一律为字符串；投影哈希非空时按 JSON 解析，解析失败返回序列化错误
    pub fn merged_selector_parts(&self, key: &str) -> DocCacheResult<SelectorParts> {
        let segments = split_key(key)?;

        let options = if segments.fields_hash.is_empty() {
            None
        } else {
            let fields: Value = serde_json::from_str(segments.fields_hash).map_err(|e| {
                crate::doc_error!(
                    serialization,
                    crate::i18n::message("error.fields_parse", &[("message", &e.to_string())])
                )
            })?;
            Some(FindOptions::with_fields(fields))
        };

        if self.log_keys {
            debug!(
                "解析缓存键: key={}, collection={}, id={}",
                key, segments.collection_name, segments.id
            );
        }

        Ok(SelectorParts {
            collection_name: segments.collection_name.to_string(),
            selector: Selector::by_id(IdType::from(segments.id)),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocCacheError;
    use serde_json::json;

    #[test]
    fn test_split_key_keeps_delimiter_inside_hash() {
        let segments = split_key(r#"users__a__{"x__y":1}"#).unwrap();
        assert_eq!(segments.collection_name, "users");
        assert_eq!(segments.id, "a");
        assert_eq!(segments.fields_hash, r#"{"x__y":1}"#);
    }

    #[test]
    fn test_split_key_requires_three_parts() {
        assert!(matches!(split_key("users__a"), Err(DocCacheError::KeyFormatError { .. })));
        assert!(matches!(split_key("users"), Err(DocCacheError::KeyFormatError { .. })));
    }

    #[test]
    fn test_parts_without_projection() {
        let parts = KeyGenerator::standard().merged_selector_parts("users__abc__").unwrap();
        assert_eq!(parts.collection_name, "users");
        assert_eq!(parts.selector, Selector::by_id(IdType::from("abc")));
        assert_eq!(parts.options, None);
    }

    #[test]
    fn test_parts_with_projection() {
        let parts = KeyGenerator::standard()
            .merged_selector_parts(r#"users__abc__{"name":1}"#)
            .unwrap();
        assert_eq!(parts.options, Some(FindOptions::with_fields(json!({"name": 1}))));
    }

    #[test]
    fn test_malformed_hash_is_reported() {
        let result = KeyGenerator::standard().merged_selector_parts("users__abc__{not json");
        assert!(matches!(result, Err(DocCacheError::SerializationError { .. })));
    }
}
