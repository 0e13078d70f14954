//! 缓存键模块
//!
//! 为文档缓存层计算缓存键、把缓存键还原为查询，并判断查询是否可缓存。
//! 本模块只负责键，不存储也不淘汰缓存数据。

// 导出所有子模块
pub mod generator;
pub mod key_generator;
pub mod key_parser;
pub mod selector_builder;
pub mod policy;
pub mod functions;

// 重新导出主要的公共类型和函数
pub use generator::{KeyGenerator, KEY_DELIMITER};
pub use key_generator::compute_fields_hash;
pub use functions::{build_selector, get_merged_selector, get_merged_selector_parts, should_use_cache};
