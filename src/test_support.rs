//! Fixtures shared by unit tests.

#![allow(clippy::unwrap_used)]

use crate::connector::Catalog;

/// A 6x6 room with two outward male doors (north, east) and two inward
/// female doors (south, west), plus a straight and an elbow corridor.
pub(crate) const SAMPLE_CATALOG: &str = r#"
[room]
name = "room"
connectors = [
    { name = "north", polarity = "male", position = [0.0, 0.0, 3.0], forward = [0.0, 0.0, 1.0] },
    { name = "east", polarity = "male", position = [3.0, 0.0, 0.0], forward = [1.0, 0.0, 0.0] },
    { name = "south", polarity = "female", position = [0.0, 0.0, -3.0], forward = [0.0, 0.0, 1.0] },
    { name = "west", polarity = "female", position = [-3.0, 0.0, 0.0], forward = [1.0, 0.0, 0.0] },
]

[[corridors]]
name = "straight"
connectors = [
    { name = "in", polarity = "female", position = [0.0, 0.0, -2.0] },
    { name = "out", polarity = "male", position = [0.0, 0.0, 2.0] },
]

[[corridors]]
name = "elbow"
connectors = [
    { name = "in", polarity = "female", position = [0.0, 0.0, -2.0] },
    { name = "out", polarity = "male", position = [2.0, 0.0, 0.0], forward = [1.0, 0.0, 0.0] },
]
"#;

pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_toml_str(SAMPLE_CATALOG).unwrap()
}

/// Installs a test-writer subscriber filtered by `RUST_LOG`, once.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
