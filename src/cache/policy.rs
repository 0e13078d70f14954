//! 可缓存判断

use crate::types::{FindOptions, Selector};

use super::generator::KeyGenerator;

impl KeyGenerator {
    /// 判断查询是否走缓存
    ///
    /// 仅当选择器只有 `_id` 一个条件时可缓存，标量 `_id` 与 `$in` 均可。
    /// `cache_projected_queries` 关闭时，带 `fields` 投影的查询也不走缓存
    pub fn should_use_cache(&self, selector: &Selector, options: Option<&FindOptions>) -> bool {
        if !self.config.cache_projected_queries && options.is_some_and(|o| o.fields.is_some()) {
            return false;
        }

        selector.id.is_some() && selector.conditions.is_empty()
    }
}
