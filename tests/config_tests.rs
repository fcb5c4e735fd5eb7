//! Configuration round-trip tests on disk.

use seqcomb::prelude::*;

#[test]
fn test_toml_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("experiment.toml");

    let config = AggregationConfig {
        window: WindowSpec::new(3),
        strategy: WindowStrategy::Chunked,
        aggregate: Aggregate::Average,
        metadata: Some(ExperimentMetadata {
            name: "chunked-average".to_string(),
            description: Some("three-sample chunk means".to_string()),
        }),
    };

    config.save_toml(&path).unwrap();
    let loaded = AggregationConfig::load_toml(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("experiment.json");

    let config = AggregationConfig {
        window: WindowSpec::new(4).with_step(2),
        strategy: WindowStrategy::Chunked,
        aggregate: Aggregate::Max,
        metadata: None,
    };

    config.save_json(&path).unwrap();
    let loaded = AggregationConfig::load_json(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_loaded_config_builds_working_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("experiment.toml");

    let config = AggregationConfig {
        window: WindowSpec::new(2),
        strategy: WindowStrategy::Chunked,
        aggregate: Aggregate::Sum,
        metadata: None,
    };
    config.save_toml(&path).unwrap();

    let run = AggregationConfig::load_toml(&path).unwrap().build().unwrap();
    assert_eq!(run(&[1.0, 2.0, 3.0, 4.0, 5.0]), vec![3.0, 7.0, 5.0]);
}

#[test]
fn test_load_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "strategy = \"sideways\"\n").unwrap();
    assert!(AggregationConfig::load_toml(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(AggregationConfig::load_toml("/nonexistent/experiment.toml").is_err());
}
