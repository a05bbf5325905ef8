//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – world size, grid cell size, sub-steps, wall inset
//! - [`ParametersConfig`] – response coefficients and gravity
//! - [`SpawnConfig`]      – how the initial population is created
//! - [`RunConfig`]        – frame rate and number of frames for headless runs
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every numeric field is optional; anything left out takes the value of
//! `Engine::default()` / `Parameters::default()`.
//!
//! # YAML format
//! ```yaml
//! engine:
//!   world: [1200.0, 1200.0]
//!   cell_size: 10.0
//!   sub_steps: 8
//!   border_margin: 50.0
//!
//! parameters:
//!   restitution: 0.6
//!   friction: 0.1
//!   gravity: [0.0, 150.0]
//!
//! spawn:
//!   mode: scatter          # or "emitter"
//!   count: 20000
//!   radius: 1.0
//!   speed: 2.0
//!   seed: 42
//!
//! run:
//!   frame_rate: 120
//!   frames: 600
//! ```

use serde::Deserialize;

/// Structural engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    pub world: Option<Vec<f64>>, // [width, height]
    pub cell_size: Option<f64>, // broad-phase cell edge
    pub sub_steps: Option<u32>, // physics steps per frame
    pub border_margin: Option<f64>, // inset of the walls from the world edge
}

/// Physical tuning
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub restitution: Option<f64>,
    pub friction: Option<f64>,
    pub epsilon: Option<f64>,
    pub damping: Option<f64>,
    pub scale: Option<f64>, // world units per metre
    pub gravity: Option<Vec<f64>>, // [gx, gy], y grows downward
}

/// Initial population
///
/// `mode: scatter` places `count` bodies at once at random positions inside
/// the walls; `mode: emitter` launches bodies from one point over time
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SpawnConfig {
    Scatter {
        count: usize,
        radius: f64,
        speed: f64, // launch speed in metres per second, random heading
        #[serde(default)]
        seed: u64,
        color: Option<[u8; 3]>,
    },
    Emitter {
        position: Vec<f64>, // [x, y]
        radius: f64,
        speed: f64, // launch speed in metres per second
        angle_deg: f64, // launch direction, from +x towards +y
        max: usize, // stop once this many bodies exist
        #[serde(default = "one")]
        per_frame: usize,
        color: Option<[u8; 3]>,
    },
}

fn one() -> usize {
    1
}

/// Headless run settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frame_rate() -> u32 {
    120
}

fn default_frames() -> u32 {
    600
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            frames: default_frames(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub spawn: SpawnConfig,
    #[serde(default)]
    pub run: RunConfig,
}
