//! # 整体配置构建器模块
//!
//! 提供库整体配置的构建器实现，支持链式调用和严格验证

use crate::config::core::{DocCacheConfig, KeyGeneratorConfig, LoggingConfig};
use crate::error::DocCacheResult;
use rat_logger::info;

/// 整体配置构建器
///
/// 提供链式配置接口，支持流畅的API调用
#[derive(Debug)]
pub struct DocCacheConfigBuilder {
    key_generator: Option<KeyGeneratorConfig>,
    logging: Option<LoggingConfig>,
}

impl DocCacheConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            key_generator: None,
            logging: None,
        }
    }

    /// 设置缓存键生成配置
    ///
    /// # 参数
    ///
    /// * `key_generator` - 缓存键生成配置
    pub fn key_generator(mut self, key_generator: KeyGeneratorConfig) -> Self {
        self.key_generator = Some(key_generator);
        self
    }

    /// 设置日志配置
    ///
    /// # 参数
    ///
    /// * `logging` - 日志配置
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// 构建整体配置
    ///
    /// # 错误
    ///
    /// 如果任何必需的配置项未设置，将返回错误
    pub fn build(self) -> DocCacheResult<DocCacheConfig> {
        let key_generator = self
            .key_generator
            .ok_or_else(|| crate::doc_error!(config, "缓存键生成配置必须设置"))?;

        let logging = self
            .logging
            .ok_or_else(|| crate::doc_error!(config, "日志配置必须设置"))?;

        info!(
            "创建整体配置: 缓存键生成={:?}, 日志级别={:?}",
            key_generator, logging.level
        );

        Ok(DocCacheConfig {
            key_generator,
            logging,
        })
    }
}

impl Default for DocCacheConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
