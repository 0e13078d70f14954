//! # 缓存键生成配置构建器模块

use crate::config::core::KeyGeneratorConfig;
use crate::error::DocCacheResult;
use rat_logger::{info, warn};

/// 缓存键生成配置构建器
#[derive(Debug)]
pub struct KeyGeneratorConfigBuilder {
    validate_key_parts: Option<bool>,
    verify_batch_consistency: Option<bool>,
    cache_projected_queries: Option<bool>,
}

impl KeyGeneratorConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            validate_key_parts: None,
            verify_batch_consistency: None,
            cache_projected_queries: None,
        }
    }

    /// 设置编码时是否校验集合名和 ID 不含分隔符
    pub fn validate_key_parts(mut self, validate: bool) -> Self {
        self.validate_key_parts = Some(validate);
        self
    }

    /// 设置批量重建时是否校验键的一致性
    pub fn verify_batch_consistency(mut self, verify: bool) -> Self {
        self.verify_batch_consistency = Some(verify);
        self
    }

    /// 设置带投影的查询是否可缓存
    pub fn cache_projected_queries(mut self, cache: bool) -> Self {
        self.cache_projected_queries = Some(cache);
        self
    }

    /// 构建缓存键生成配置
    ///
    /// # 错误
    ///
    /// 如果任何必需的配置项未设置，将返回错误
    pub fn build(self) -> DocCacheResult<KeyGeneratorConfig> {
        let validate_key_parts = self
            .validate_key_parts
            .ok_or_else(|| crate::doc_error!(config, "键片段校验选项必须设置"))?;

        let verify_batch_consistency = self
            .verify_batch_consistency
            .ok_or_else(|| crate::doc_error!(config, "批量一致性校验选项必须设置"))?;

        let cache_projected_queries = self
            .cache_projected_queries
            .ok_or_else(|| crate::doc_error!(config, "投影查询缓存选项必须设置"))?;

        if !validate_key_parts {
            warn!("已关闭键片段校验，包含 '__' 的集合名或ID将生成有歧义的缓存键");
        }

        info!(
            "创建缓存键生成配置: 校验片段={}, 校验批量={}, 缓存投影查询={}",
            validate_key_parts, verify_batch_consistency, cache_projected_queries
        );

        Ok(KeyGeneratorConfig {
            validate_key_parts,
            verify_batch_consistency,
            cache_projected_queries,
        })
    }
}

impl Default for KeyGeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
