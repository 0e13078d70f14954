//! # 配置构建器模块
//!
//! 提供所有配置类型的构建器实现，支持链式调用和严格验证

pub mod global_builder;
pub mod key_generator_builder;
pub mod logging_builder;

// 重新导出所有Builder类型
pub use global_builder::DocCacheConfigBuilder;
pub use key_generator_builder::KeyGeneratorConfigBuilder;
pub use logging_builder::LoggingConfigBuilder;
