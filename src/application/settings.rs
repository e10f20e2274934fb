//! Start-up configuration read from the environment.
//!
//! | Variable                | Meaning                                   |
//! |-------------------------|-------------------------------------------|
//! | `LIGHTS_OUT_LAYOUT`     | preset building name, e.g. `office`       |
//! | `LIGHTS_OUT_DIFFICULTY` | `easy`, `medium` or `hard`; skips the panel |
//! | `LIGHTS_OUT_SEED`       | u64 seed for a reproducible scramble      |

use log::warn;

use crate::domain::{Difficulty, Layout, presets};

pub const LAYOUT_VAR: &str = "LIGHTS_OUT_LAYOUT";
pub const DIFFICULTY_VAR: &str = "LIGHTS_OUT_DIFFICULTY";
pub const SEED_VAR: &str = "LIGHTS_OUT_SEED";

#[derive(Clone, Debug)]
pub struct Settings {
    pub layout: Layout,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: presets::default_layout(),
            difficulty: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through any key lookup. Unknown values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(name) = lookup(LAYOUT_VAR) {
            match presets::find(name.trim()) {
                Some(layout) => settings.layout = layout,
                None => warn!("Unknown {} {:?}, using {}", LAYOUT_VAR, name, settings.layout.name),
            }
        }

        if let Some(name) = lookup(DIFFICULTY_VAR) {
            settings.difficulty = Difficulty::from_name(&name);
            if settings.difficulty.is_none() {
                warn!("Unknown {} {:?}, showing the difficulty panel", DIFFICULTY_VAR, name);
            }
        }

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => settings.seed = Some(seed),
                Err(err) => warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, err),
            }
        }

        settings
    }
}
