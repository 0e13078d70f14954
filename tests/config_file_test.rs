#[cfg(test)]
mod tests {
    use rat_doccache::*;
    use serde_json::json;

    fn sample_config() -> DocCacheConfig {
        DocCacheConfig::builder()
            .key_generator(
                KeyGeneratorConfig::builder()
                    .validate_key_parts(true)
                    .verify_batch_consistency(false)
                    .cache_projected_queries(false)
                    .build()
                    .expect("缓存键配置构建失败"),
            )
            .logging(
                LoggingConfig::builder()
                    .level(LogLevel::Debug)
                    .log_keys(true)
                    .build()
                    .expect("日志配置构建失败"),
            )
            .build()
            .expect("整体配置构建失败")
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doccache.toml");

        let config = sample_config();
        config.save_to_file(&path).unwrap();
        let loaded = DocCacheConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doccache.json");

        let config = sample_config();
        config.save_to_file(&path).unwrap();
        let loaded = DocCacheConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "key_generator = 1").unwrap();

        assert!(matches!(
            DocCacheConfig::from_file(&path),
            Err(DocCacheError::ConfigError { .. })
        ));
        assert!(matches!(
            DocCacheConfig::from_file(dir.path().join("missing.json")),
            Err(DocCacheError::IoError(_))
        ));
    }

    /// 配置文件驱动的生成器行为
    #[test]
    fn test_generator_from_config() {
        let generator = KeyGenerator::from_config(&sample_config());

        let selector = Selector::by_id(IdType::from("x"));
        let projected = FindOptions::with_fields(json!({"name": 1}));
        assert!(!generator.should_use_cache(&selector, Some(&projected)));

        // 未开启批量一致性校验时，混合集合的键也会被合并
        let parts = generator.build_selector(&["users__a__", "posts__b__"]).unwrap();
        assert_eq!(parts.collection_name, "users");
    }

    #[test]
    fn test_log_level_mapping() {
        init();
        assert!(matches!(LogLevel::Warn.to_level_filter(), rat_logger::LevelFilter::Warn));
        assert!(get_info().starts_with("rat_doccache v"));
    }
}
