//! # 配置管理模块 - 核心配置类型
//!
//! 提供统一的配置管理系统，支持构建器模式和链式配置
//! 所有配置项必须显式设置；`KeyGeneratorConfig::standard()` 是唯一的预设

use crate::error::{DocCacheError, DocCacheResult};
use rat_logger::{info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 库整体配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocCacheConfig {
    /// 缓存键生成配置
    pub key_generator: KeyGeneratorConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// 缓存键生成配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGeneratorConfig {
    /// 编码时拒绝包含分隔符的集合名或 ID
    pub validate_key_parts: bool,
    /// 批量重建时校验所有键的集合名和投影哈希一致
    pub verify_batch_consistency: bool,
    /// 带 `fields` 投影的查询是否可以走缓存
    pub cache_projected_queries: bool,
}

impl KeyGeneratorConfig {
    /// 标准配置：校验键片段、校验批量一致性、投影查询可缓存
    pub const fn standard() -> Self {
        Self {
            validate_key_parts: true,
            verify_batch_consistency: true,
            cache_projected_queries: true,
        }
    }

    /// 创建构建器
    pub fn builder() -> super::builders::KeyGeneratorConfigBuilder {
        super::builders::KeyGeneratorConfigBuilder::new()
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,
    /// 是否记录每个生成/解析的缓存键（调试用）
    pub log_keys: bool,
}

impl LoggingConfig {
    /// 创建构建器
    pub fn builder() -> super::builders::LoggingConfigBuilder {
        super::builders::LoggingConfigBuilder::new()
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 错误级别
    Error,
    /// 警告级别
    Warn,
    /// 信息级别
    Info,
    /// 调试级别
    Debug,
    /// 跟踪级别
    Trace,
}

impl LogLevel {
    /// 转换为 rat_logger 的级别过滤器，供调用者初始化日志时使用
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl DocCacheConfig {
    /// 创建配置构建器
    pub fn builder() -> super::builders::DocCacheConfigBuilder {
        super::builders::DocCacheConfigBuilder::new()
    }

    /// 从配置文件加载配置
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径，`.toml` 按 TOML 解析，其余按 JSON 解析
    pub fn from_file<P: AsRef<Path>>(config_path: P) -> DocCacheResult<Self> {
        let content = std::fs::read_to_string(config_path.as_ref()).map_err(DocCacheError::IoError)?;

        let config: DocCacheConfig = if is_toml(config_path.as_ref()) {
            toml::from_str(&content).map_err(|e| {
                crate::doc_error!(
                    config,
                    crate::i18n::message("error.config", &[("message", &format!("解析TOML配置文件失败: {}", e))])
                )
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                crate::doc_error!(
                    config,
                    crate::i18n::message("error.config", &[("message", &format!("解析JSON配置文件失败: {}", e))])
                )
            })?
        };

        info!("从文件加载配置: {:?}", config_path.as_ref());
        Ok(config)
    }

    /// 保存配置到文件
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn save_to_file<P: AsRef<Path>>(&self, config_path: P) -> DocCacheResult<()> {
        let content = if is_toml(config_path.as_ref()) {
            toml::to_string_pretty(self).map_err(|e| {
                crate::doc_error!(
                    config,
                    crate::i18n::message("error.config", &[("message", &format!("序列化TOML配置失败: {}", e))])
                )
            })?
        } else {
            serde_json::to_string_pretty(self).map_err(|e| {
                crate::doc_error!(
                    config,
                    crate::i18n::message("error.config", &[("message", &format!("序列化JSON配置失败: {}", e))])
                )
            })?
        };

        std::fs::write(config_path.as_ref(), content).map_err(DocCacheError::IoError)?;

        info!("保存配置到文件: {:?}", config_path.as_ref());
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}
