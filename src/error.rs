use thiserror::Error;

/// Top-level error type for dungeon generation.
///
/// Only caller contract violations end up here. Expected outcomes such as a
/// point set too small to triangulate or a branch with no compatible
/// connector are reported through ordinary return values.
#[derive(Debug, Error)]
pub enum DungeonError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to structure templates and catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("structure template '{0}' has no connectors")]
    NoConnectors(String),

    #[error("catalog has no corridor templates")]
    NoCorridors,

    #[error("connector '{connector}' on '{template}' has a degenerate frame: {reason}")]
    DegenerateFrame {
        template: String,
        connector: String,
        reason: &'static str,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors related to generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_branch must be at least 1")]
    ZeroBranch,

    #[error("min_room_distance must be finite and non-negative, got {0}")]
    InvalidDistance(f64),

    #[error("area extents must be finite and positive, got {width} x {depth}")]
    InvalidArea { width: f64, depth: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by operations given inconsistent inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("edge ({a}, {b}) references a point outside 0..{len}")]
    EdgeOutOfRange { a: usize, b: usize, len: usize },

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`DungeonError`].
pub type Result<T> = std::result::Result<T, DungeonError>;
