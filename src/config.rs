use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::times::default_time_angles;
use crate::types::{Observer, TimeAngle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub observer: Observer,
    #[serde(default = "default_time_angles")]
    pub time_angles: Vec<TimeAngle>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            observer: Observer::default(),
            time_angles: default_time_angles(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.observer.coordinate()?;
        debug!(
            "loaded tracker config: observer=({}, {}, {} m), {} time angles",
            config.observer.latitude,
            config.observer.longitude,
            config.observer.altitude_m,
            config.time_angles.len()
        );
        Ok(config)
    }
}
