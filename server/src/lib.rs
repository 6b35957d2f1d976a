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

//! Mimic Server Engine
//!
//! This library drives simulated participants ("fake players") inside a
//! live multiplayer world server: entities that look and behave like real
//! connected participants but have no network client behind them. Each
//! tick, a fake player's motion is co-driven by three sources of truth —
//! the host environment's own physics step, the attached behaviours, and
//! authoritative corrections pushed over the network — and the controller
//! reconciles them without bypassing the host's movement-broadcast
//! pipeline.
//!
//! The engine embeds into a host server: the integration layer supplies a
//! [`host::HostEntity`] adapter per entity and drives
//! [`registry::FakePlayerRegistry::tick_all`] from the simulation loop.

pub mod behaviour;
pub mod config;
pub mod error;
pub mod host;
pub mod listener;
pub mod metadata;
pub mod motion;
pub mod player;
pub mod registry;
pub mod session;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use behaviour::{Behaviour, BehaviourHandle};
pub use config::{Configuration, PlayerDefinition, SimulationConfig};
pub use error::{ConfigError, SpawnError};
pub use host::HostEntity;
pub use listener::{ClosurePacketListener, PacketListener};
pub use metadata::MetadataStore;
pub use motion::{MOTION_THRESHOLD, MotionState};
pub use player::{DEFAULT_DRAG_MULTIPLIER, FakePlayer};
pub use registry::FakePlayerRegistry;
pub use session::FakePlayerSession;
