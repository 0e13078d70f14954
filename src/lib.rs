//! rat_doccache - 文档缓存键库
//!
//! 为位于文档数据库之前的缓存层计算缓存键：判断查询是否可缓存、
//! 把 `_id`/`$in` 查询编码为稳定的缓存键，并能把一组缓存键还原为一次批量查询

// 导出所有公共模块
pub mod error;
pub mod types;
pub mod config;
pub mod cache;
pub mod bridge;
pub mod utils;
pub mod i18n;

// 重新导出常用类型和函数
pub use error::{DocCacheError, DocCacheResult};
pub use types::*;
pub use config::{
    DocCacheConfig, DocCacheConfigBuilder, KeyGeneratorConfig, KeyGeneratorConfigBuilder,
    LogLevel, LoggingConfig, LoggingConfigBuilder,
};
pub use cache::{
    KeyGenerator, KEY_DELIMITER, build_selector, compute_fields_hash, get_merged_selector,
    get_merged_selector_parts, should_use_cache,
};
pub use bridge::{BlockingAdapter, TokioBlockingAdapter, create_blocking_function};
pub use utils::{Invocable, optimized_apply};

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化rat_doccache库
///
/// 注册多语言错误消息并按环境变量设置语言
///
/// 注意：日志系统由调用者自行初始化，本库不初始化日志
pub fn init() {
    i18n::ErrorMessageI18n::init();
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
