#[cfg(test)]
mod tests {
    use rat_doccache::{optimized_apply, Invocable};
    use std::cell::RefCell;

    /// 调用上下文，记录副作用
    struct Context {
        name: String,
        log: RefCell<Vec<String>>,
    }

    impl Context {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                log: RefCell::new(Vec::new()),
            }
        }
    }

    fn describe(context: &Context, args: Vec<i64>) -> String {
        let rendered = args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(",");
        context.log.borrow_mut().push(rendered.clone());
        format!("{}({})", context.name, rendered)
    }

    /// 任意参数个数下，分派调用与直接调用的结果和副作用一致
    #[test]
    fn test_equivalent_to_direct_call_for_all_arities() {
        println!("🔍 测试定参调用等价性");

        for arity in 0..=7i64 {
            let args: Vec<i64> = (0..arity).map(|i| i * 10 - 3).collect();

            let direct_ctx = Context::new("direct");
            let direct = describe(&direct_ctx, args.clone());

            let apply_ctx = Context::new("direct");
            let applied = optimized_apply(&apply_ctx, &describe, args.clone());

            println!("  参数个数 {}: {}", arity, applied);
            assert_eq!(applied, direct);
            assert_eq!(*apply_ctx.log.borrow(), *direct_ctx.log.borrow());
        }

        println!("✅ 定参调用等价性测试完成");
    }

    /// 覆盖了快速路径的实现同样与通用调用一致
    struct Concat;

    impl Invocable<str, &'static str, String> for Concat {
        fn apply(&self, context: &str, args: Vec<&'static str>) -> String {
            format!("{}{}", context, args.concat())
        }

        fn call2(&self, context: &str, a0: &'static str, a1: &'static str) -> String {
            let mut out = String::with_capacity(context.len() + a0.len() + a1.len());
            out.push_str(context);
            out.push_str(a0);
            out.push_str(a1);
            out
        }
    }

    #[test]
    fn test_overridden_fast_path_matches_apply() {
        let all = ["a", "b", "c", "d", "e", "f", "g"];
        for n in 0..=all.len() {
            let args = all[..n].to_vec();
            assert_eq!(
                optimized_apply(">", &Concat, args.clone()),
                Concat.apply(">", args)
            );
        }
    }

    /// 闭包也可以直接作为可调用对象
    #[test]
    fn test_closure_counts_calls() {
        let calls = RefCell::new(0usize);
        let count = |_: &(), args: Vec<u8>| {
            *calls.borrow_mut() += 1;
            args.len()
        };
        for n in 0..8 {
            assert_eq!(optimized_apply(&(), &count, vec![0u8; n]), n);
        }
        assert_eq!(*calls.borrow(), 8);
    }
}
