//! Runtime scene parameters.
//!
//! Defaults mirror the constants in [`crate::config`]. On desktop the
//! `SNOWSCAPE_PARAMS` environment variable may point at a JSON file with any
//! subset of the fields below, and `SNOWSCAPE_SEED` overrides only the seed.
//! A missing or malformed file is logged and the defaults are kept.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    FLASH_DURATION_MS, PARTICLE_COUNT, PLACEMENT_HALF_EXTENT, TREE_COUNT,
};
use crate::scene_rng::DEFAULT_SEED;

pub const PARAMS_PATH_ENV: &str = "SNOWSCAPE_PARAMS";
pub const SEED_ENV: &str = "SNOWSCAPE_SEED";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    /// Number of trees scattered around the centerpiece.
    pub tree_count: usize,
    /// Number of snow particles.
    pub particle_count: usize,
    /// Trees are placed in `[-half_extent, half_extent]` on both axes.
    pub placement_half_extent: f32,
    /// How long a clicked tree stays white.
    pub flash_duration_ms: u64,
    /// Seed for `SceneRng`.
    pub seed: u64,
    /// Asset path of the centerpiece glTF. The default model is not shipped;
    /// see `crates/app/README.md`.
    pub centerpiece_path: String,
    /// Give up waiting for the centerpiece after this many seconds.
    pub centerpiece_timeout_secs: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            tree_count: TREE_COUNT,
            particle_count: PARTICLE_COUNT,
            placement_half_extent: PLACEMENT_HALF_EXTENT,
            flash_duration_ms: FLASH_DURATION_MS,
            seed: DEFAULT_SEED,
            centerpiece_path: "models/snowman.glb".to_string(),
            centerpiece_timeout_secs: 10.0,
        }
    }
}

impl SceneParams {
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }

    pub fn centerpiece_timeout(&self) -> Duration {
        Duration::from_secs_f32(self.centerpiece_timeout_secs.max(0.0))
    }

    /// Parse params from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ParamsError> {
        serde_json::from_str(text).map_err(|e| ParamsError::Parse(e.to_string()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ParamsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Resolve params from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut params = match std::env::var(PARAMS_PATH_ENV) {
            Ok(path) => match Self::load_from_path(Path::new(&path)) {
                Ok(params) => {
                    info!("Loaded scene params from {}", path);
                    params
                }
                Err(e) => {
                    warn!("Ignoring scene params file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        if let Ok(raw) = std::env::var(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => params.seed = seed,
                Err(e) => warn!("Ignoring {}={:?}: {}", SEED_ENV, raw, e),
            }
        }
        params
    }
}

/// Errors from reading a params override file.
#[derive(Debug)]
pub enum ParamsError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid params JSON.
    Parse(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {e}"),
            ParamsError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            ParamsError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

/// Inserts `SceneParams` unless one was provided up front (tests do this).
pub struct SceneParamsPlugin;

impl Plugin for SceneParamsPlugin {
    fn build(&self, app: &mut App) {
        if app.world().contains_resource::<SceneParams>() {
            return;
        }
        #[cfg(not(target_arch = "wasm32"))]
        let params = SceneParams::from_env();
        #[cfg(target_arch = "wasm32")]
        let params = SceneParams::default();
        app.insert_resource(params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let p = SceneParams::default();
        assert_eq!(p.tree_count, 30);
        assert_eq!(p.particle_count, 2000);
        assert_eq!(p.placement_half_extent, 40.0);
        assert_eq!(p.flash_duration(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let p = SceneParams::from_json(r#"{ "tree_count": 5, "seed": 9 }"#).unwrap();
        assert_eq!(p.tree_count, 5);
        assert_eq!(p.seed, 9);
        assert_eq!(p.particle_count, PARTICLE_COUNT);
        assert_eq!(p.centerpiece_path, "models/snowman.glb");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SceneParams::from_json("{ tree_count: ").unwrap_err();
        assert!(matches!(err, ParamsError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SceneParams::load_from_path(Path::new("/nonexistent/snowscape.json")).unwrap_err();
        assert!(matches!(err, ParamsError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_fields() {
        let p = SceneParams {
            flash_duration_ms: 500,
            ..Default::default()
        };
        let text = serde_json::to_string(&p).unwrap();
        assert_eq!(SceneParams::from_json(&text).unwrap(), p);
    }

    #[test]
    fn test_negative_timeout_clamps_to_zero() {
        let p = SceneParams {
            centerpiece_timeout_secs: -1.0,
            ..Default::default()
        };
        assert_eq!(p.centerpiece_timeout(), Duration::ZERO);
    }
}
