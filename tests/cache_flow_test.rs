//! 模拟缓存层的完整流程：判断可缓存 -> 生成键 -> 查缓存 -> 对未命中的键重建批量查询 -> 异步回源

use rat_doccache::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn init_logger() {
    let _ = rat_logger::LoggerBuilder::new()
        .with_level(rat_logger::LevelFilter::Debug)
        .add_terminal_with_config(rat_logger::handler::term::TermConfig::default())
        .init();
}

/// 模拟数据存储：按 `$in` 查询返回文档，并记录收到的查询
async fn fetch_documents(
    documents: Arc<HashMap<String, Value>>,
    queries: Arc<Mutex<Vec<Value>>>,
    parts: SelectorParts,
) -> DocCacheResult<Vec<Value>> {
    let query = parts.selector.to_json();
    queries.lock().unwrap().push(query.clone());

    let ids: Vec<String> = match &parts.selector.id {
        Some(IdSelector::In(ids)) => ids.iter().flatten().map(|id| id.to_string()).collect(),
        Some(IdSelector::Single(id)) => vec![id.to_string()],
        None => Vec::new(),
    };
    Ok(ids.iter().filter_map(|id| documents.get(id).cloned()).collect())
}

#[test]
fn test_cache_miss_is_batched_into_one_query() {
    init_logger();
    init();

    let documents: Arc<HashMap<String, Value>> = Arc::new(
        ["a", "b", "c", "d"]
            .iter()
            .map(|id| (id.to_string(), json!({"_id": id, "name": format!("user-{}", id)})))
            .collect(),
    );
    let queries = Arc::new(Mutex::new(Vec::new()));

    let adapter = Arc::new(TokioBlockingAdapter::new().unwrap());
    let fetch = {
        let documents = documents.clone();
        let queries = queries.clone();
        create_blocking_function(adapter, move |parts: SelectorParts| {
            fetch_documents(documents.clone(), queries.clone(), parts)
        })
    };

    // 缓存里已有 b
    let mut store: HashMap<String, Value> = HashMap::new();
    store.insert("users__b__".to_string(), json!({"_id": "b", "name": "user-b"}));

    let selector = Selector::from_json(&json!({"_id": {"$in": ["a", "b", null, "d"]}})).unwrap();
    assert!(should_use_cache(&selector, None));

    let keys = get_merged_selector("users", &selector, None, None)
        .unwrap()
        .unwrap()
        .into_keys();
    assert_eq!(keys.len(), 3);

    let missing: Vec<&String> = keys.iter().filter(|k| !store.contains_key(k.as_str())).collect();
    assert_eq!(missing, vec!["users__a__", "users__d__"]);

    let batch = build_selector(&missing).unwrap();
    assert_eq!(batch.collection_name, "users");

    let fetched = fetch(batch).unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(
        queries.lock().unwrap().as_slice(),
        &[json!({"_id": {"$in": ["a", "d"]}})]
    );
}

#[test]
fn test_single_miss_keeps_projection() {
    let adapter = Arc::new(TokioBlockingAdapter::new().unwrap());
    let fetch = create_blocking_function(adapter, |parts: SelectorParts| async move {
        Ok(parts.options.and_then(|o| o.fields))
    });

    let opts = FindOptions::with_fields(json!({"name": 1}));
    let selector = Selector::by_id(IdType::from("a"));
    let key = get_merged_selector("users", &selector, Some(&opts), None)
        .unwrap()
        .unwrap()
        .into_keys();

    let batch = build_selector(&key).unwrap();
    assert_eq!(fetch(batch).unwrap(), Some(json!({"name": 1})));
}
