//! 缓存键生成器核心模块
//!
//! 提供KeyGenerator的结构定义和构造函数，编码、解析、批量重建与可缓存判断
//! 分别在同目录的其它文件中实现

use crate::config::{DocCacheConfig, KeyGeneratorConfig, LoggingConfig};
use rat_logger::info;

/// 缓存键片段分隔符
pub const KEY_DELIMITER: &str = "__";

static STANDARD_GENERATOR: KeyGenerator = KeyGenerator {
    config: KeyGeneratorConfig::standard(),
    log_keys: false,
};

/// 缓存键生成器
///
/// 无内部可变状态，可在任意线程间共享
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenerator {
    /// 生成配置
    pub(crate) config: KeyGeneratorConfig,
    /// 是否记录每个键
    pub(crate) log_keys: bool,
}

impl KeyGenerator {
    /// 使用指定配置创建生成器
    pub fn new(config: KeyGeneratorConfig) -> Self {
        Self {
            config,
            log_keys: false,
        }
    }

    /// 使用整体配置创建生成器
    pub fn from_config(config: &DocCacheConfig) -> Self {
        info!("创建缓存键生成器: {:?}", config.key_generator);
        Self::new(config.key_generator.clone()).with_logging(&config.logging)
    }

    /// 应用日志配置
    pub fn with_logging(mut self, logging: &LoggingConfig) -> Self {
        self.log_keys = logging.log_keys;
        self
    }

    /// 标准配置的共享生成器
    pub fn standard() -> &'static KeyGenerator {
        &STANDARD_GENERATOR
    }

    /// 当前配置
    pub fn config(&self) -> &KeyGeneratorConfig {
        &self.config
    }
}
