use std::io::Write;

use volunteer_pool::{
    config::{Config, Vars, DEFAULT_FITNESS_PER_TRAP},
    error::PoolError,
    pool::Coordinator,
    termination::Termination,
};

#[test]
fn test_shipped_config_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.json");
    let config = Config::from_file(path).unwrap();

    assert_eq!(config.repository(), "https://github.com/JJ/splash-volunteer");
    assert_eq!(config.vars().traps(), 50);
    assert_eq!(config.vars().fitness_per_trap(), DEFAULT_FITNESS_PER_TRAP);

    let pool = Coordinator::new(&config).unwrap();
    assert_eq!(pool.termination().target(), 50);
}

#[test]
fn test_shipped_config_winning_fitness() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.json");
    let config = Config::from_file(path).unwrap();
    let termination = Termination::from_vars(config.vars());

    assert!(termination.is_solution("whatever", Some(60)));
    assert!(!termination.is_solution("whatever", None));

    let traps = config.vars().traps();
    let winner = "1".repeat((traps * 4) as usize);
    assert!(termination.is_solution(&winner, Some(traps * 4)));
    assert!(!termination.is_solution("0000", Some(traps - 1)));
}

#[test]
fn test_unvalidated_zero_traps_cannot_build_a_pool() {
    let config = Config::new("local", Vars::new(0, 4));
    assert!(matches!(
        Coordinator::new(&config),
        Err(PoolError::Configuration(_))
    ));
}

#[test]
fn test_config_from_temp_file() {
    let path = std::env::temp_dir().join(format!("volunteer-pool-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "repository": "local", "vars": {{ "traps": 10, "cache_size": 4, "fitness_per_trap": 6 }} }}"#
        )
        .unwrap();
    }

    let config = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.vars().cache_size(), 4);
    assert_eq!(Coordinator::new(&config).unwrap().termination().target(), 60);
}

#[test]
fn test_missing_file_is_reported() {
    let result = Config::from_file("/nonexistent/volunteer-pool/config.json");
    match result {
        Err(PoolError::Other(message)) => assert!(message.contains("Failed to read config")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let result = Config::from_json_str("{ not json");
    assert!(matches!(result, Err(PoolError::Serialization(_))));
}
