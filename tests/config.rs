use float_pitfalls::engine::types::{
    DEFAULT_CHUNK_SIZE,
    DEFAULT_SEED,
    DEFAULT_SEQUENCE_LEN,
    DEFAULT_WORKERS,
};
use float_pitfalls::{ConfigError, DemoError, ReduceConfig, SequenceConfig, TeamError};

#[test]
fn defaults_reproduce_the_classic_setup() {
    let reduce = ReduceConfig::default();
    assert_eq!(reduce.workers, DEFAULT_WORKERS);
    assert_eq!(reduce.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!((reduce.workers, reduce.chunk_size), (10, 50));

    let sequence = SequenceConfig::default();
    assert_eq!(sequence.len, DEFAULT_SEQUENCE_LEN);
    assert_eq!(sequence.seed, DEFAULT_SEED);
    assert_eq!((sequence.len, sequence.seed), (10_000_000, 0));
}

#[test]
fn builders_replace_single_fields() {
    let reduce = ReduceConfig::default().with_workers(3).with_chunk_size(8);
    assert_eq!(reduce, ReduceConfig::new(3, 8));

    let sequence = SequenceConfig::default().with_len(100).with_seed(42);
    assert_eq!(sequence, SequenceConfig::new(100, 42));
}

#[test]
fn validation_rejects_zero_parameters() {
    assert_eq!(ReduceConfig::new(1, 1).validate(), Ok(()));
    assert_eq!(ReduceConfig::new(0, 50).validate(), Err(ConfigError::ZeroWorkers));
    assert_eq!(ReduceConfig::new(4, 0).validate(), Err(ConfigError::ZeroChunkSize));
    assert_eq!(ReduceConfig::new(0, 0).validate(), Err(ConfigError::ZeroWorkers));
}

#[test]
fn chunk_count_rounds_up() {
    let config = ReduceConfig::new(4, 50);
    assert_eq!(config.chunk_count(0), 0);
    assert_eq!(config.chunk_count(1), 1);
    assert_eq!(config.chunk_count(50), 1);
    assert_eq!(config.chunk_count(51), 2);
    assert_eq!(config.chunk_count(10_000_000), 200_000);
    assert_eq!(ReduceConfig::new(4, 0).chunk_count(10), 0);
}

#[test]
fn errors_convert_and_display() {
    let team: TeamError = ConfigError::ZeroWorkers.into();
    assert_eq!(team, TeamError::Config(ConfigError::ZeroWorkers));
    assert_eq!(
        team.to_string(),
        "invalid team configuration: worker count must be at least 1"
    );

    let demo: DemoError = team.into();
    assert!(matches!(demo, DemoError::Team(TeamError::Config(_))));

    let demo: DemoError = ConfigError::ZeroChunkSize.into();
    assert_eq!(demo.to_string(), "chunk size must be at least 1");
}
