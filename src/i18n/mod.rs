//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use once_cell::sync::OnceCell;
use rat_embed_lang::{register_translations, set_language};
use std::collections::HashMap;

static REGISTERED: OnceCell<()> = OnceCell::new();

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 缓存键格式错误
        let mut key_format_errors = HashMap::new();
        key_format_errors.insert("zh-CN".to_string(), "缓存键格式错误，期望3段，实际{count}段: {key}".to_string());
        key_format_errors.insert("en-US".to_string(), "Malformed cache key, expected 3 parts but found {count}: {key}".to_string());
        key_format_errors.insert("ja-JP".to_string(), "キャッシュキーの形式が不正です。3つの部分が必要ですが{count}つでした: {key}".to_string());
        translations.insert("error.key_format".to_string(), key_format_errors);

        // 投影哈希解析失败
        let mut fields_parse_errors = HashMap::new();
        fields_parse_errors.insert("zh-CN".to_string(), "投影哈希解析失败: {message}".to_string());
        fields_parse_errors.insert("en-US".to_string(), "Failed to parse fields hash: {message}".to_string());
        fields_parse_errors.insert("ja-JP".to_string(), "フィールドハッシュの解析に失敗しました: {message}".to_string());
        translations.insert("error.fields_parse".to_string(), fields_parse_errors);

        // 投影序列化失败
        let mut fields_serialize_errors = HashMap::new();
        fields_serialize_errors.insert("zh-CN".to_string(), "投影序列化失败: {message}".to_string());
        fields_serialize_errors.insert("en-US".to_string(), "Failed to serialize fields projection: {message}".to_string());
        fields_serialize_errors.insert("ja-JP".to_string(), "フィールド射影のシリアライズに失敗しました: {message}".to_string());
        translations.insert("error.fields_serialize".to_string(), fields_serialize_errors);

        // 键片段包含分隔符
        let mut delimiter_errors = HashMap::new();
        delimiter_errors.insert("zh-CN".to_string(), "{part}不能包含分隔符 '__': {value}".to_string());
        delimiter_errors.insert("en-US".to_string(), "{part} must not contain the delimiter '__': {value}".to_string());
        delimiter_errors.insert("ja-JP".to_string(), "{part}に区切り文字 '__' を含めることはできません: {value}".to_string());
        translations.insert("error.delimiter_in_part".to_string(), delimiter_errors);

        // 键片段以下划线结尾
        let mut trailing_underscore_errors = HashMap::new();
        trailing_underscore_errors.insert("zh-CN".to_string(), "{part}不能以 '_' 结尾，否则与分隔符连在一起无法拆分: {value}".to_string());
        trailing_underscore_errors.insert("en-US".to_string(), "{part} must not end with '_', it would merge with the delimiter: {value}".to_string());
        trailing_underscore_errors.insert("ja-JP".to_string(), "{part}は '_' で終わることはできません。区切り文字と結合してしまいます: {value}".to_string());
        translations.insert("error.trailing_underscore".to_string(), trailing_underscore_errors);

        // 空批量
        let mut empty_batch_errors = HashMap::new();
        empty_batch_errors.insert("zh-CN".to_string(), "批量重建选择器至少需要一个缓存键".to_string());
        empty_batch_errors.insert("en-US".to_string(), "Rebuilding a batch selector requires at least one cache key".to_string());
        empty_batch_errors.insert("ja-JP".to_string(), "バッチセレクタの再構築には少なくとも1つのキャッシュキーが必要です".to_string());
        translations.insert("error.empty_batch".to_string(), empty_batch_errors);

        // 批量键不一致
        let mut batch_mismatch_errors = HashMap::new();
        batch_mismatch_errors.insert("zh-CN".to_string(), "批量缓存键不一致: 第{index}个键的{part}与首个键不同: {key}".to_string());
        batch_mismatch_errors.insert("en-US".to_string(), "Inconsistent batch keys: {part} of key #{index} differs from the first key: {key}".to_string());
        batch_mismatch_errors.insert("ja-JP".to_string(), "バッチキーが一致しません: {index}番目のキーの{part}が最初のキーと異なります: {key}".to_string());
        translations.insert("error.batch_mismatch".to_string(), batch_mismatch_errors);

        // 选择器不是对象
        let mut selector_shape_errors = HashMap::new();
        selector_shape_errors.insert("zh-CN".to_string(), "{name}必须是JSON对象".to_string());
        selector_shape_errors.insert("en-US".to_string(), "{name} must be a JSON object".to_string());
        selector_shape_errors.insert("ja-JP".to_string(), "{name}はJSONオブジェクトである必要があります".to_string());
        translations.insert("error.not_object".to_string(), selector_shape_errors);

        // 不支持的 _id 类型
        let mut unsupported_id_errors = HashMap::new();
        unsupported_id_errors.insert("zh-CN".to_string(), "不支持的_id类型: {value}".to_string());
        unsupported_id_errors.insert("en-US".to_string(), "Unsupported _id type: {value}".to_string());
        unsupported_id_errors.insert("ja-JP".to_string(), "サポートされていない_idタイプ: {value}".to_string());
        translations.insert("error.unsupported_id".to_string(), unsupported_id_errors);

        // 配置错误
        let mut config_errors = HashMap::new();
        config_errors.insert("zh-CN".to_string(), "配置错误: {message}".to_string());
        config_errors.insert("en-US".to_string(), "Configuration error: {message}".to_string());
        config_errors.insert("ja-JP".to_string(), "設定エラー: {message}".to_string());
        translations.insert("error.config".to_string(), config_errors);

        // 异步桥接：在运行时内部阻塞
        let mut nested_runtime_errors = HashMap::new();
        nested_runtime_errors.insert("zh-CN".to_string(), "不能在异步运行时内部执行阻塞调用".to_string());
        nested_runtime_errors.insert("en-US".to_string(), "Cannot perform a blocking call from inside an async runtime".to_string());
        nested_runtime_errors.insert("ja-JP".to_string(), "非同期ランタイム内でブロッキング呼び出しはできません".to_string());
        translations.insert("error.bridge_nested_runtime".to_string(), nested_runtime_errors);

        // 异步桥接：运行时创建失败
        let mut runtime_create_errors = HashMap::new();
        runtime_create_errors.insert("zh-CN".to_string(), "创建异步运行时失败: {message}".to_string());
        runtime_create_errors.insert("en-US".to_string(), "Failed to create async runtime: {message}".to_string());
        runtime_create_errors.insert("ja-JP".to_string(), "非同期ランタイムの作成に失敗しました: {message}".to_string());
        translations.insert("error.bridge_runtime_create".to_string(), runtime_create_errors);

        // 注册所有翻译
        register_translations(translations);
    }

    /// 确保翻译只注册一次
    pub fn ensure_registered() {
        REGISTERED.get_or_init(Self::register_all_translations);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        Self::ensure_registered();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}

/// 生成带参数的错误消息，未注册时先注册翻译
pub(crate) fn message(key: &str, args: &[(&str, &str)]) -> String {
    ErrorMessageI18n::ensure_registered();
    if args.is_empty() {
        t(key)
    } else {
        tf(key, args)
    }
}

/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{t, tf};
