use swarm_shooter::config::GameConfig;
use swarm_shooter::entities::Tint;
use swarm_shooter::error::ConfigError;

// ── Defaults ──────────────────────────────────────────────────────────────────

#[test]
fn defaults_are_valid() {
    let config = GameConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.swarm.rows, 4);
    assert_eq!(config.swarm.columns, 10);
    assert_eq!(config.arena.width, 800.0);
    assert_eq!(config.swarm.cooldown().as_millis(), 1000);
    assert_eq!(config.swarm.fire_chance, 1.0);
}

#[test]
fn grid_width_counts_units_and_gaps() {
    let config = GameConfig::default();
    assert_eq!(config.swarm.grid_width(), 580.0);
}

// ── TOML parsing ──────────────────────────────────────────────────────────────

#[test]
fn partial_toml_keeps_other_defaults() {
    let text = r#"
        [arena]
        width = 1024.0

        [swarm]
        rows = 5
        fire_chance = 0.25

        [swarm.missile]
        tint = "red"
    "#;
    let config = GameConfig::from_toml(text, "inline").unwrap();
    assert_eq!(config.arena.width, 1024.0);
    assert_eq!(config.arena.height, 600.0);
    assert_eq!(config.swarm.rows, 5);
    assert_eq!(config.swarm.columns, 10);
    assert_eq!(config.swarm.fire_chance, 0.25);
    assert_eq!(config.swarm.missile.tint, Tint::Red);
    assert_eq!(config.swarm.missile.speed, 3.0);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_toml_is_default() {
    let config = GameConfig::from_toml("", "inline").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn unknown_tint_is_parse_error() {
    let result = GameConfig::from_toml("[swarm]\nunit_tint = \"mauve\"\n", "bad.toml");
    match result {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, "bad.toml"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn missing_file_is_io_error() {
    let result = GameConfig::load("/definitely/not/here/swarm.toml");
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn zero_columns_rejected() {
    let mut config = GameConfig::default();
    config.swarm.columns = 0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroDimension {
            name: "swarm.columns"
        })
    );
}

#[test]
fn zero_unit_width_rejected() {
    let mut config = GameConfig::default();
    config.swarm.unit_width = 0.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroDimension {
            name: "swarm.unit_width"
        })
    );
}

#[test]
fn negative_descent_rejected() {
    let mut config = GameConfig::default();
    config.swarm.descent_rate = -0.1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            name: "swarm.descent_rate",
            ..
        })
    ));
}

#[test]
fn fire_chance_above_one_rejected() {
    let mut config = GameConfig::default();
    config.swarm.fire_chance = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            name: "swarm.fire_chance",
            ..
        })
    ));
}

#[test]
fn inverted_spark_range_rejected() {
    let mut config = GameConfig::default();
    config.swarm.spark_count_min = 50;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            name: "swarm.spark_count_min",
            ..
        })
    ));
}

#[test]
fn gutter_swallowing_arena_rejected() {
    let mut config = GameConfig::default();
    config.arena.gutter = 400.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            name: "arena.gutter",
            ..
        })
    ));
}

#[test]
fn grid_wider_than_arena_rejected() {
    let mut config = GameConfig::default();
    config.swarm.columns = 20;
    assert_eq!(
        config.validate(),
        Err(ConfigError::GridTooWide {
            grid_width: 1180.0,
            arena_width: 780.0,
        })
    );
}

#[test]
fn nan_top_offset_rejected() {
    let mut config = GameConfig::default();
    config.swarm.top_offset = f32::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            name: "swarm.top_offset",
            ..
        })
    ));
}

#[test]
fn negative_top_offset_rejected() {
    let mut config = GameConfig::default();
    config.swarm.top_offset = -10.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange {
            name: "swarm.top_offset",
            ..
        })
    ));
}

#[test]
fn grid_bottom_counts_rows_and_gaps() {
    // 50 + 3 * (40 + 20) + 20
    assert_eq!(GameConfig::default().swarm.grid_bottom(), 250.0);
}

#[test]
fn grid_below_floor_rejected() {
    let mut config = GameConfig::default();
    config.swarm.top_offset = 5000.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::GridTooTall {
            grid_bottom: 5200.0,
            arena_height: 600.0,
        })
    );
}

#[test]
fn grid_touching_floor_rejected() {
    let mut config = GameConfig::default();
    config.arena.height = 250.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::GridTooTall { .. })
    ));
    config.arena.height = 251.0;
    assert!(config.validate().is_ok());
}

#[test]
fn errors_describe_the_offending_key() {
    let err = ConfigError::ZeroDimension { name: "swarm.rows" };
    assert!(err.to_string().contains("swarm.rows"));

    let err = ConfigError::OutOfRange {
        name: "swarm.fire_chance",
        value: 1.5,
        expected: "[0, 1]",
    };
    let message = err.to_string();
    assert!(message.contains("swarm.fire_chance"));
    assert!(message.contains("1.5"));
}
