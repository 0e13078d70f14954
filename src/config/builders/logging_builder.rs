//! # 日志配置构建器模块
//!
//! 提供日志配置的构建器实现，支持链式调用和严格验证

use crate::config::core::{LogLevel, LoggingConfig};
use crate::error::DocCacheResult;
use rat_logger::info;

/// 日志配置构建器
#[derive(Debug)]
pub struct LoggingConfigBuilder {
    level: Option<LogLevel>,
    log_keys: Option<bool>,
}

impl LoggingConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            level: None,
            log_keys: None,
        }
    }

    /// 设置日志级别
    ///
    /// # 参数
    ///
    /// * `level` - 日志级别
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// 设置是否记录缓存键
    ///
    /// # 参数
    ///
    /// * `log_keys` - 是否记录每个生成/解析的缓存键
    pub fn log_keys(mut self, log_keys: bool) -> Self {
        self.log_keys = Some(log_keys);
        self
    }

    /// 构建日志配置
    ///
    /// # 错误
    ///
    /// 如果任何必需的配置项未设置，将返回错误
    pub fn build(self) -> DocCacheResult<LoggingConfig> {
        let level = self
            .level
            .ok_or_else(|| crate::doc_error!(config, "日志级别必须设置"))?;

        let log_keys = self
            .log_keys
            .ok_or_else(|| crate::doc_error!(config, "缓存键日志选项必须设置"))?;

        info!("创建日志配置: 级别={:?}, 记录缓存键={}", level, log_keys);

        Ok(LoggingConfig { level, log_keys })
    }
}

impl Default for LoggingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
