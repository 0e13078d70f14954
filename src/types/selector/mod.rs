//! 选择器与查询选项
//!
//! 只建模缓存层关心的部分：`_id`（标量或 `$in` 列表）以及 `fields` 投影

use crate::error::DocCacheResult;
use crate::types::id_types::IdType;
use serde_json::{Map, Value};

/// `_id` 字段名
pub const ID_FIELD: &str = "_id";

/// `$in` 操作符
pub const IN_OPERATOR: &str = "$in";

/// `_id` 选择方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSelector {
    /// 单个 ID
    Single(IdType),
    /// `$in` 列表，`None` 代表原始列表中的空值
    In(Vec<Option<IdType>>),
}

impl IdSelector {
    /// 由 ID 列表构建 `$in` 选择
    pub fn in_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<IdType>,
    {
        IdSelector::In(ids.into_iter().map(|id| Some(id.into())).collect())
    }

    /// 对象形式只接受单独的 `$in`，其它操作符会改变查询语义，不能被缓存键表达
    fn from_json(value: &Value) -> DocCacheResult<Option<Self>> {
        if let Value::Object(map) = value {
            let items = match map.get(IN_OPERATOR) {
                Some(Value::Array(items)) if map.len() == 1 => Some(items),
                _ => None,
            };
            let Some(items) = items else {
                return Err(crate::doc_error!(
                    validation,
                    ID_FIELD,
                    crate::i18n::message("error.unsupported_id", &[("value", &value.to_string())])
                ));
            };
            let ids = items
                .iter()
                .map(IdType::from_json)
                .collect::<DocCacheResult<Vec<_>>>()?;
            return Ok(Some(IdSelector::In(ids)));
        }

        Ok(IdType::from_json(value)?.map(IdSelector::Single))
    }

    fn to_json(&self) -> Value {
        match self {
            IdSelector::Single(id) => id.to_json(),
            IdSelector::In(ids) => {
                let items = ids
                    .iter()
                    .map(|id| id.as_ref().map(IdType::to_json).unwrap_or(Value::Null))
                    .collect();
                let mut map = Map::new();
                map.insert(IN_OPERATOR.to_string(), Value::Array(items));
                Value::Object(map)
            }
        }
    }
}

impl From<IdType> for IdSelector {
    fn from(value: IdType) -> Self {
        IdSelector::Single(value)
    }
}

/// 查询选择器
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    /// `_id` 条件，缺失或为 null 时为 `None`
    pub id: Option<IdSelector>,
    /// 除 `_id` 以外的其它条件
    pub conditions: Map<String, Value>,
}

impl Selector {
    /// 创建只按 `_id` 查询的选择器
    pub fn by_id(id: impl Into<IdSelector>) -> Self {
        Self {
            id: Some(id.into()),
            conditions: Map::new(),
        }
    }

    /// 追加一个非 `_id` 条件
    pub fn with_condition(mut self, field: impl Into<String>, value: Value) -> Self {
        self.conditions.insert(field.into(), value);
        self
    }

    /// 从 JSON 文档解析选择器
    pub fn from_json(value: &Value) -> DocCacheResult<Self> {
        let Value::Object(map) = value else {
            return Err(crate::doc_error!(
                validation,
                "selector",
                crate::i18n::message("error.not_object", &[("name", "selector")])
            ));
        };

        let mut selector = Selector::default();
        for (field, field_value) in map {
            if field == ID_FIELD {
                selector.id = IdSelector::from_json(field_value)?;
            } else {
                selector.conditions.insert(field.clone(), field_value.clone());
            }
        }
        Ok(selector)
    }

    /// 转换为数据存储使用的 JSON 查询
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert(ID_FIELD.to_string(), id.to_json());
        }
        for (field, value) in &self.conditions {
            map.insert(field.clone(), value.clone());
        }
        Value::Object(map)
    }
}

/// 查询选项，缓存层只关心 `fields` 投影
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindOptions {
    /// 字段投影，不做语义校验，仅用于生成键
    pub fields: Option<Value>,
}

impl FindOptions {
    /// 带投影的选项
    pub fn with_fields(fields: Value) -> Self {
        Self {
            fields: Some(fields),
        }
    }

    /// 从 JSON 文档解析选项，`fields: null` 视为未设置
    pub fn from_json(value: &Value) -> DocCacheResult<Self> {
        let Value::Object(map) = value else {
            return Err(crate::doc_error!(
                validation,
                "options",
                crate::i18n::message("error.not_object", &[("name", "options")])
            ));
        };

        let fields = match map.get("fields") {
            None | Some(Value::Null) => None,
            Some(fields) => Some(fields.clone()),
        };
        Ok(Self { fields })
    }
}
