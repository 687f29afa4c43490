use pullstream::{from_iter, stream, StreamConfig, StreamError};

#[test]
fn test_default_config() {
    let config = StreamConfig::default();
    assert_eq!(config.name, "stream");
    assert_eq!(config.channel_capacity, 64);
    assert!(!config.trace_pulls);
    assert!(config.validate().is_ok());
    assert_eq!(StreamConfig::new(), config);
}

#[test]
fn test_config_builder() {
    let config = StreamConfig::new()
        .name("orders")
        .channel_capacity(16)
        .trace_pulls(true);
    assert_eq!(config.name, "orders");
    assert_eq!(config.channel_capacity, 16);
    assert!(config.trace_pulls);
}

#[test]
fn test_config_validation() {
    let zero = StreamConfig::new().channel_capacity(0);
    assert!(matches!(
        zero.validate(),
        Err(StreamError::InvalidConfiguration(msg)) if msg.contains("channel_capacity")
    ));

    let unnamed = StreamConfig::new().name("");
    assert!(matches!(
        unnamed.validate(),
        Err(StreamError::InvalidConfiguration(msg)) if msg.contains("name")
    ));
}

#[test]
fn test_config_from_json() {
    let config = StreamConfig::from_json(r#"{"name": "clicks", "trace_pulls": true}"#).unwrap();
    assert_eq!(config.name, "clicks");
    assert!(config.trace_pulls);
    assert_eq!(config.channel_capacity, 64);

    let empty = StreamConfig::from_json("{}").unwrap();
    assert_eq!(empty, StreamConfig::default());
}

#[test]
fn test_config_from_json_errors() {
    assert!(matches!(
        StreamConfig::from_json("not json"),
        Err(StreamError::Config(_))
    ));
    assert!(matches!(
        StreamConfig::from_json(r#"{"channel_capacity": 0}"#),
        Err(StreamError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_config_json_roundtrip() {
    let config = StreamConfig::new().name("metrics").channel_capacity(3);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(StreamConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_config_carried_through_operators() {
    let config = StreamConfig::new().name("numbers").trace_pulls(true);
    let pipeline = from_iter(0..10)
        .with_config(config.clone())
        .filter(|x| x % 2 == 0)
        .map(|x| x + 1)
        .distinct()
        .take(3);
    assert_eq!(pipeline.config(), &config);
    assert_eq!(pipeline.collect(), vec![1, 3, 5]);
}

#[test]
fn test_streams_start_with_default_config() {
    let s = stream![1, 2, 3];
    assert_eq!(s.config(), &StreamConfig::default());
}

#[test]
fn test_error_display() {
    let err = StreamError::InvalidConfiguration("bad".to_string());
    assert_eq!(err.to_string(), "Invalid configuration: bad");
    assert_eq!(
        StreamError::ChannelClosed.to_string(),
        "Channel closed: the consuming stream is gone"
    );
}
