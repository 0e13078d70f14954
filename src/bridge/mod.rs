//! 异步到同步桥接
//!
//! 缓存层是同步调用的，数据存储查询是异步的。桥接能力以 `BlockingAdapter`
//! 注入，而不是依赖全局运行时。

use crate::error::DocCacheResult;
use futures::future::BoxFuture;
use rat_logger::{debug, info};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Builder, Handle, Runtime};

/// 把异步计算转为阻塞调用的能力
pub trait BlockingAdapter: Send + Sync {
    /// 阻塞当前线程直到 future 完成，每次调用恰好执行一次
    fn run_blocking<T: Send + 'static>(
        &self,
        future: BoxFuture<'static, DocCacheResult<T>>,
    ) -> DocCacheResult<T>;
}

/// 基于独立 tokio 运行时的桥接实现
#[derive(Debug)]
pub struct TokioBlockingAdapter {
    runtime: Runtime,
}

impl TokioBlockingAdapter {
    /// 创建单线程运行时
    pub fn new() -> DocCacheResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build().map_err(|e| {
            crate::doc_error!(
                bridge,
                crate::i18n::message("error.bridge_runtime_create", &[("message", &e.to_string())])
            )
        })?;
        info!("创建异步桥接运行时");
        Ok(Self { runtime })
    }
}

impl BlockingAdapter for TokioBlockingAdapter {
    fn run_blocking<T: Send + 'static>(
        &self,
        future: BoxFuture<'static, DocCacheResult<T>>,
    ) -> DocCacheResult<T> {
        // 在运行时内部 block_on 会 panic
        if Handle::try_current().is_ok() {
            return Err(crate::doc_error!(
                bridge,
                crate::i18n::message("error.bridge_nested_runtime", &[])
            ));
        }
        debug!("阻塞执行异步调用");
        self.runtime.block_on(future)
    }
}

/// 把返回 future 的函数包装为阻塞函数
///
/// # 参数
///
/// * `adapter` - 注入的桥接能力
/// * `promise_func` - 接收参数并返回 future 的函数
pub fn create_blocking_function<A, P, T, F, Fut>(
    adapter: Arc<A>,
    promise_func: F,
) -> impl Fn(P) -> DocCacheResult<T>
where
    A: BlockingAdapter,
    F: Fn(P) -> Fut,
    Fut: Future<Output = DocCacheResult<T>> + Send + 'static,
    T: Send + 'static,
{
    move |params: P| adapter.run_blocking(Box::pin(promise_func(params)))
}
