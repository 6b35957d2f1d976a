//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Engine configuration
//!
//! Deployments describe the simulation tuning and the roster of fake
//! players to materialize in a YAML file the embedding server points the
//! engine at. String values support `${VAR}` environment substitution.

use crate::error::ConfigError;
use crate::player::DEFAULT_DRAG_MULTIPLIER;
use mimic_common::Location;
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use uuid::Uuid;

/// Top-level engine configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Simulation tuning shared by every fake player
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Fake players to materialize when the engine starts
    #[serde(default)]
    pub players: Vec<PlayerDefinition>,
}

impl Configuration {
    /// Load configuration from a YAML file
    pub fn load(path: &str) -> Result<Configuration, ConfigError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }
}

/// Simulation tuning shared by every fake player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Factor applied to a host entity's drag coefficient at spawn
    #[serde(default = "default_drag_multiplier")]
    pub drag_multiplier: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            drag_multiplier: DEFAULT_DRAG_MULTIPLIER,
        }
    }
}

fn default_drag_multiplier() -> f64 {
    DEFAULT_DRAG_MULTIPLIER
}

/// One fake player to materialize at engine start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDefinition {
    /// Display name; supports `${VAR}` environment substitution
    pub name: EnvField<String>,

    /// Stable identity across restarts; generated fresh when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,

    /// Where the player enters the world; the host decides when omitted
    #[serde(default)]
    pub spawn: Option<Location>,
}
