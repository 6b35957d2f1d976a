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

//! Engine error types

use mimic_common::ActorRuntimeId;
use thiserror::Error;

/// Errors raised when admitting a fake player into the engine.
///
/// A host entity that fails admission never gets a controller; per-tick code
/// assumes a well-formed host and does not re-check.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The host entity reference is stale or was never valid
    #[error("host entity {0} is not valid")]
    InvalidHostEntity(ActorRuntimeId),

    /// The host entity's drag coefficient cannot be amplified sanely
    #[error("host entity {actor} has an unusable drag coefficient ({drag})")]
    InvalidDrag { actor: ActorRuntimeId, drag: f64 },

    /// A fake player is already attached to this actor
    #[error("actor {0} already has a fake player attached")]
    DuplicateActor(ActorRuntimeId),
}

/// Errors raised while loading the engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to open configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for the expected schema
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_yaml::Error),
}
