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

//! Host entity adapter boundary
//!
//! The engine needs privileged access to motion and location state the host
//! environment does not expose through its public entity contract. The
//! integration layer implements [`HostEntity`] with whatever mechanism the
//! host runtime offers (internal API, crate-internal visibility, or an
//! accompanying host patch) and binds any precomputed entry points at
//! construction. The engine depends only on this trait.

use glam::DVec3;
use mimic_common::{ActorRuntimeId, Location};

/// Privileged view of the host-environment entity backing one fake player.
///
/// All receivers take `&self`: the entity is shared with the host
/// environment and never exclusively owned by the engine, so implementations
/// manage their own interior mutability. The engine only calls in during its
/// own tick window and tolerates the host mutating the entity between ticks.
#[cfg_attr(test, mockall::automock)]
pub trait HostEntity: Send + Sync {
    /// Runtime id packets use to address this entity
    fn runtime_id(&self) -> ActorRuntimeId;

    /// Whether the entity still exists in the host world
    fn is_valid(&self) -> bool;

    /// Read the host's motion vector for this entity
    fn motion(&self) -> DVec3;

    /// Overwrite the host's motion vector for this entity
    fn set_motion(&self, motion: DVec3);

    /// Read the host's stored location for this entity
    fn location(&self) -> Location;

    /// Overwrite the stored location without triggering any movement handling
    fn set_location(&self, location: Location);

    /// Current drag coefficient
    fn drag(&self) -> f64;

    /// Replace the drag coefficient
    fn set_drag(&self, drag: f64);

    /// Toggle the host's own movement retention for this entity
    fn set_keep_movement(&self, keep: bool);

    /// Advance the host's per-tick physics for this entity (gravity, drag,
    /// friction), the step the host normally drives for entities it owns
    fn apply_physics_step(&self);

    /// Move by `delta` with collision resolution. Resolving the move updates
    /// the stored location as a side effect.
    fn move_with_collision(&self, delta: DVec3);

    /// Whether the host's internal motion would produce a position delta
    /// this tick
    fn needs_movement_update(&self) -> bool;

    /// The canonical movement notification entry point. This is the one
    /// path that feeds the host's movement-broadcast pipeline (packet
    /// generation, event hooks).
    fn handle_movement(&self, destination: Location);
}
