//! Demo configuration, loaded from JSON.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use mz_core::SimConfig;
use mz_nav::NavConfig;
use mz_policy::GhostMode;

/// One stretch of the ghost-mode timer.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ModePhase {
    pub mode: GhostMode,
    pub secs: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sim:               SimConfig,
    pub nav:               NavConfig,
    pub player_speed:      f32,
    pub ghost_speed:       f32,
    /// How often the scripted "joystick" changes direction.
    pub input_period_secs: f32,
    /// Ghost-mode timer; the last phase lasts until the run ends.
    pub modes:             Vec<ModePhase>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig {
                total_ticks:           60 * 60,
                seed:                  7,
                output_interval_ticks: 30,
                ..SimConfig::default()
            },
            nav:               NavConfig::default(),
            player_speed:      100.0,
            ghost_speed:       90.0,
            input_period_secs: 1.5,
            modes: vec![
                ModePhase { mode: GhostMode::Scatter, secs: 7.0 },
                ModePhase { mode: GhostMode::Chase,   secs: 20.0 },
                ModePhase { mode: GhostMode::Scatter, secs: 7.0 },
                ModePhase { mode: GhostMode::Chase,   secs: 60.0 },
            ],
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        config.validate().with_context(|| format!("checking {}", path.display()))?;
        Ok(config)
    }

    /// Every mode phase must last at least one tick; a zero-length phase
    /// would start on the same tick as the next one.
    pub fn validate(&self) -> Result<()> {
        for (i, phase) in self.modes.iter().enumerate() {
            if phase.secs.is_nan() || phase.secs <= 0.0 {
                bail!("modes[{i}] ({:?}) must last > 0 s, got {}", phase.mode, phase.secs);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: DemoConfig = serde_json::from_str(r#"{ "player_speed": 50.0 }"#).unwrap();
        assert_eq!(config.player_speed, 50.0);
        assert_eq!(config.modes.len(), DemoConfig::default().modes.len());
    }

    #[test]
    fn zero_length_phase_rejected() {
        let config: DemoConfig = serde_json::from_str(
            r#"{ "modes": [
                { "mode": "Scatter", "secs": 0.0 },
                { "mode": "Chase",   "secs": 5.0 }
            ] }"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("modes[0]"));
    }
}
