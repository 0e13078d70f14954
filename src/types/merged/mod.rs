use crate::types::selector::{FindOptions, Selector};

/// 编码结果：单个缓存键，或 `$in` 扇出后的有序键列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedSelector {
    /// 单 ID 查询
    Single(String),
    /// `$in` 查询，每个非空 ID 一个键，顺序与输入一致
    Batch(Vec<String>),
}

impl MergedSelector {
    /// 借用形式的键列表
    pub fn keys(&self) -> Vec<&str> {
        match self {
            MergedSelector::Single(key) => vec![key.as_str()],
            MergedSelector::Batch(keys) => keys.iter().map(String::as_str).collect(),
        }
    }

    /// 取出全部键
    pub fn into_keys(self) -> Vec<String> {
        match self {
            MergedSelector::Single(key) => vec![key],
            MergedSelector::Batch(keys) => keys,
        }
    }

    /// 单键时返回该键
    pub fn as_single(&self) -> Option<&str> {
        match self {
            MergedSelector::Single(key) => Some(key.as_str()),
            MergedSelector::Batch(_) => None,
        }
    }
}

/// 由缓存键还原出的查询
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorParts {
    /// 集合名
    pub collection_name: String,
    /// 还原的选择器
    pub selector: Selector,
    /// 投影选项，键中没有投影时为 `None`
    pub options: Option<FindOptions>,
}
