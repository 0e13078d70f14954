//! 使用标准配置的便捷函数

use crate::error::DocCacheResult;
use crate::types::{FindOptions, MergedSelector, Selector, SelectorParts};

use super::generator::KeyGenerator;

/// 生成缓存键，见 [`KeyGenerator::merged_selector`]
pub fn get_merged_selector(
    collection_name: &str,
    selector: &Selector,
    options: Option<&FindOptions>,
    cached_fields_hash: Option<&str>,
) -> DocCacheResult<Option<MergedSelector>> {
    KeyGenerator::standard().merged_selector(collection_name, selector, options, cached_fields_hash)
}

/// 解析单个缓存键，见 [`KeyGenerator::merged_selector_parts`]
pub fn get_merged_selector_parts(key: &str) -> DocCacheResult<SelectorParts> {
    KeyGenerator::standard().merged_selector_parts(key)
}

/// 由缓存键重建查询，见 [`KeyGenerator::build_selector`]
pub fn build_selector<S: AsRef<str>>(keys: &[S]) -> DocCacheResult<SelectorParts> {
    KeyGenerator::standard().build_selector(keys)
}

/// 判断查询是否走缓存，见 [`KeyGenerator::should_use_cache`]
pub fn should_use_cache(selector: &Selector, options: Option<&FindOptions>) -> bool {
    KeyGenerator::standard().should_use_cache(selector, options)
}
