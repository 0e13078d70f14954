//! # 配置管理模块
//!
//! 提供统一的配置管理系统，支持构建器模式和链式配置
//! 所有配置项必须显式设置

pub mod builders;
pub mod core;

// 重新导出所有公共类型
pub use builders::{DocCacheConfigBuilder, KeyGeneratorConfigBuilder, LoggingConfigBuilder};
pub use self::core::{DocCacheConfig, KeyGeneratorConfig, LogLevel, LoggingConfig};
