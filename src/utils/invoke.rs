//! 定参调用优化
//!
//! 0 到 5 个参数时走固定参数的调用路径，6 个及以上回落到通用的 `apply`。
//! 两条路径的结果必须完全一致，区别只在调用开销。

/// 可调用对象
///
/// `apply` 是通用调用形式，`call0` 到 `call5` 为固定参数的快速路径。
///
/// 默认的 `callN` 会把参数重新装进 `Vec` 再转发给 `apply`，开销与直接调用 `apply` 相同；
/// 只有覆盖了 `callN` 的实现者才能真正省掉这次分配。闭包走的是默认实现
pub trait Invocable<C: ?Sized, A, R> {
    /// 通用调用
    fn apply(&self, context: &C, args: Vec<A>) -> R;

    fn call0(&self, context: &C) -> R {
        self.apply(context, Vec::new())
    }

    fn call1(&self, context: &C, a0: A) -> R {
        self.apply(context, vec![a0])
    }

    fn call2(&self, context: &C, a0: A, a1: A) -> R {
        self.apply(context, vec![a0, a1])
    }

    fn call3(&self, context: &C, a0: A, a1: A, a2: A) -> R {
        self.apply(context, vec![a0, a1, a2])
    }

    fn call4(&self, context: &C, a0: A, a1: A, a2: A, a3: A) -> R {
        self.apply(context, vec![a0, a1, a2, a3])
    }

    fn call5(&self, context: &C, a0: A, a1: A, a2: A, a3: A, a4: A) -> R {
        self.apply(context, vec![a0, a1, a2, a3, a4])
    }
}

impl<C: ?Sized, A, R, F> Invocable<C, A, R> for F
where
    F: Fn(&C, Vec<A>) -> R,
{
    fn apply(&self, context: &C, args: Vec<A>) -> R {
        self(context, args)
    }
}

/// 按参数个数分派调用
pub fn optimized_apply<C, A, R, F>(context: &C, f: &F, args: Vec<A>) -> R
where
    C: ?Sized,
    F: Invocable<C, A, R> + ?Sized,
{
    let args = match <[A; 0]>::try_from(args) {
        Ok([]) => return f.call0(context),
        Err(args) => args,
    };
    let args = match <[A; 1]>::try_from(args) {
        Ok([a0]) => return f.call1(context, a0),
        Err(args) => args,
    };
    let args = match <[A; 2]>::try_from(args) {
        Ok([a0, a1]) => return f.call2(context, a0, a1),
        Err(args) => args,
    };
    let args = match <[A; 3]>::try_from(args) {
        Ok([a0, a1, a2]) => return f.call3(context, a0, a1, a2),
        Err(args) => args,
    };
    let args = match <[A; 4]>::try_from(args) {
        Ok([a0, a1, a2, a3]) => return f.call4(context, a0, a1, a2, a3),
        Err(args) => args,
    };
    let args = match <[A; 5]>::try_from(args) {
        Ok([a0, a1, a2, a3, a4]) => return f.call5(context, a0, a1, a2, a3, a4),
        Err(args) => args,
    };
    f.apply(context, args)
}
