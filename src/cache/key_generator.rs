//! 缓存键生成模块
//!
//! 键格式：`<集合名>__<id>__<投影哈希>`，投影哈希为 `fields` 的紧凑 JSON 文本，
//! 没有投影时为空串

use crate::types::{FindOptions, IdSelector, IdType, MergedSelector, Selector};
use crate::error::DocCacheResult;
use rat_logger::debug;
use std::borrow::Cow;

use super::generator::{KEY_DELIMITER, KeyGenerator};

/// 计算投影哈希
///
/// 没有选项或没有 `fields` 时返回空串；空对象 `{}` 得到 `"{}"`，与"无投影"区分
pub fn compute_fields_hash(options: Option<&FindOptions>) -> DocCacheResult<String> {
    match options.and_then(|o| o.fields.as_ref()) {
        Some(fields) => serde_json::to_string(fields).map_err(|e| {
            crate::doc_error!(
                serialization,
                crate::i18n::message("error.fields_serialize", &[("message", &e.to_string())])
            )
        }),
        None => Ok(String::new()),
    }
}

impl KeyGenerator {
    /// 生成缓存键
    ///
    /// # 参数
    ///
    /// * `collection_name` - 集合名
    /// * `selector` - 查询选择器
    /// * `options` - 查询选项
    /// * `cached_fields_hash` - 预先计算好的投影哈希，为空时按 `options` 计算
    ///
    /// 选择器没有 `_id` 时返回 `Ok(None)`；`$in` 查询按输入顺序为每个非空 ID 生成一个键
    pub fn merged_selector(
        &self,
        collection_name: &str,
        selector: &Selector,
        options: Option<&FindOptions>,
        cached_fields_hash: Option<&str>,
    ) -> DocCacheResult<Option<MergedSelector>> {
        let Some(id) = &selector.id else {
            crate::debug_log!("选择器缺少_id，不生成缓存键: collection={}", collection_name);
            return Ok(None);
        };

        let fields_hash: Cow<'_, str> = match cached_fields_hash {
            Some(hash) if !hash.is_empty() => Cow::Borrowed(hash),
            _ => Cow::Owned(compute_fields_hash(options)?),
        };

        if self.config.validate_key_parts {
            check_key_part("collectionName", collection_name)?;
        }

        let merged = match id {
            IdSelector::Single(id) => MergedSelector::Single(self.single_key(collection_name, id, &fields_hash)?),
            IdSelector::In(ids) => {
                // 过滤空 ID
                let keys = ids
                    .iter()
                    .flatten()
                    .map(|id| self.single_key(collection_name, id, &fields_hash))
                    .collect::<DocCacheResult<Vec<_>>>()?;
                crate::debug_log!(
                    "$in 查询扇出: collection={}, 输入={}, 生成键={}",
                    collection_name,
                    ids.len(),
                    keys.len()
                );
                MergedSelector::Batch(keys)
            }
        };

        Ok(Some(merged))
    }

    /// 生成单个 ID 的缓存键
    fn single_key(&self, collection_name: &str, id: &IdType, fields_hash: &str) -> DocCacheResult<String> {
        let id_str = id.to_string();
        if self.config.validate_key_parts {
            check_key_part("_id", &id_str)?;
        }

        let key = format!(
            "{}{}{}{}{}",
            collection_name, KEY_DELIMITER, id_str, KEY_DELIMITER, fields_hash
        );
        if self.log_keys {
            debug!("生成缓存键: {}", key);
        }
        Ok(key)
    }
}

/// 集合名和 ID 必须能从键中被唯一拆分
///
/// 除了不能包含分隔符，也不能以 `_` 结尾：结尾的 `_` 会和后面的分隔符连成 `___`，
/// 解析时被归入下一段。以 `_` 开头的 ID 不受影响
fn check_key_part(part: &str, value: &str) -> DocCacheResult<()> {
    if value.contains(KEY_DELIMITER) {
        return Err(crate::doc_error!(
            validation,
            part,
            crate::i18n::message("error.delimiter_in_part", &[("part", part), ("value", value)])
        ));
    }
    if value.ends_with('_') {
        return Err(crate::doc_error!(
            validation,
            part,
            crate::i18n::message("error.trailing_underscore", &[("part", part), ("value", value)])
        ));
    }
    Ok(())
}
