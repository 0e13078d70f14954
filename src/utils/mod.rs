//! 通用工具

pub mod invoke;

pub use invoke::{optimized_apply, Invocable};
