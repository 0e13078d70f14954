//! 批量选择器重建模块
//!
//! 把多个单 ID 缓存键合并为一个 `$in` 查询，用于缓存未命中时的批量回源

use crate::types::{IdSelector, IdType, Selector, SelectorParts};
use crate::error::DocCacheResult;
use rat_logger::debug;

use super::generator::KeyGenerator;

impl KeyGenerator {
    /// 由缓存键重建查询
    ///
    /// 只有一个键时直接返回其解析结果（含投影）；多个键时合并为 `$in` 查询，
    /// 不携带投影选项，投影由调用方在批量层面处理
    ///
    /// # 错误
    ///
    /// 空输入返回前置条件错误；开启 `verify_batch_consistency` 时，
    /// 集合名或投影与首个键不一致同样返回前置条件错误
    pub fn build_selector<S: AsRef<str>>(&self, keys: &[S]) -> DocCacheResult<SelectorParts> {
        let Some((first, rest)) = keys.split_first() else {
            return Err(crate::doc_error!(
                precondition,
                crate::i18n::message("error.empty_batch", &[])
            ));
        };

        let first_parts = self.merged_selector_parts(first.as_ref())?;
        if rest.is_empty() {
            return Ok(first_parts);
        }

        let mut ids = Vec::with_capacity(keys.len());
        ids.push(decoded_id(&first_parts.selector));

        for (offset, key) in rest.iter().enumerate() {
            let parts = self.merged_selector_parts(key.as_ref())?;

            if self.config.verify_batch_consistency {
                let mismatch = if parts.collection_name != first_parts.collection_name {
                    Some("collectionName")
                } else if parts.options != first_parts.options {
                    Some("fieldsHash")
                } else {
                    None
                };
                if let Some(part) = mismatch {
                    let index = (offset + 2).to_string();
                    return Err(crate::doc_error!(
                        precondition,
                        crate::i18n::message(
                            "error.batch_mismatch",
                            &[("index", &index), ("part", part), ("key", key.as_ref())]
                        )
                    ));
                }
            }

            ids.push(decoded_id(&parts.selector));
        }

        if self.log_keys {
            debug!(
                "重建批量选择器: collection={}, 键数量={}",
                first_parts.collection_name,
                ids.len()
            );
        }

        Ok(SelectorParts {
            collection_name: first_parts.collection_name,
            selector: Selector::by_id(IdSelector::In(ids)),
            options: None,
        })
    }
}

/// 解析出的选择器总是单 ID
fn decoded_id(selector: &Selector) -> Option<IdType> {
    match &selector.id {
        Some(IdSelector::Single(id)) => Some(id.clone()),
        _ => None,
    }
}
