//! 缓存键相关的数据类型
//!
//! 定义文档 ID、选择器、查询选项以及编码/解码结果

pub mod id_types;
pub mod merged;
pub mod selector;

// 重新导出所有公共类型
pub use id_types::IdType;
pub use merged::{MergedSelector, SelectorParts};
pub use selector::{FindOptions, IdSelector, Selector, ID_FIELD, IN_OPERATOR};
