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

//! Test utilities for engine testing

use crate::config::SimulationConfig;
use crate::host::HostEntity;
use crate::player::FakePlayer;
use crate::session::FakePlayerSession;
use glam::DVec3;
use mimic_common::{ActorRuntimeId, Location};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A call observed on a [`StubHost`], in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetMotion(DVec3),
    SetDrag(f64),
    SetKeepMovement(bool),
    PhysicsStep,
    Move(DVec3),
    SetLocation(Location),
    HandleMovement(Location),
}

/// Scripted host entity double.
///
/// Holds plain mutable state behind locks, applies a configurable velocity
/// delta on each physics step, resolves collision moves against an optional
/// floor plane, and records every mutating call for order assertions.
pub struct StubHost {
    runtime_id: ActorRuntimeId,
    valid: AtomicBool,
    motion: Mutex<DVec3>,
    location: Mutex<Location>,
    drag: Mutex<f64>,
    needs_movement_update: AtomicBool,
    physics_delta: Mutex<DVec3>,
    floor_y: Mutex<Option<f64>>,
    calls: Mutex<Vec<HostCall>>,
}

impl StubHost {
    /// Create a valid host with a small drag coefficient and zeroed state
    pub fn new(actor: u64) -> Self {
        Self {
            runtime_id: ActorRuntimeId(actor),
            valid: AtomicBool::new(true),
            motion: Mutex::new(DVec3::ZERO),
            location: Mutex::new(Location::default()),
            drag: Mutex::new(0.02),
            needs_movement_update: AtomicBool::new(false),
            physics_delta: Mutex::new(DVec3::ZERO),
            floor_y: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mark the host entity as removed from the world
    pub fn set_valid(&self, valid: bool) {
        self.valid.store(valid, Ordering::SeqCst);
    }

    /// Script the needs-movement-update flag for the next tick
    pub fn set_needs_movement_update(&self, needs: bool) {
        self.needs_movement_update.store(needs, Ordering::SeqCst);
    }

    /// Script the velocity change each physics step applies
    pub fn set_physics_delta(&self, delta: DVec3) {
        *self.physics_delta.lock().unwrap() = delta;
    }

    /// Script a floor plane the collision move resolves against
    pub fn set_floor_y(&self, floor: Option<f64>) {
        *self.floor_y.lock().unwrap() = floor;
    }

    /// Seed host motion without recording a call
    pub fn seed_motion(&self, motion: DVec3) {
        *self.motion.lock().unwrap() = motion;
    }

    /// Seed host location without recording a call
    pub fn seed_location(&self, location: Location) {
        *self.location.lock().unwrap() = location;
    }

    /// Calls observed so far, in invocation order
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Forget the calls observed so far
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl HostEntity for StubHost {
    fn runtime_id(&self) -> ActorRuntimeId {
        self.runtime_id
    }

    fn is_valid(&self) -> bool {
        self.valid.load(Ordering::SeqCst)
    }

    fn motion(&self) -> DVec3 {
        *self.motion.lock().unwrap()
    }

    fn set_motion(&self, motion: DVec3) {
        self.record(HostCall::SetMotion(motion));
        *self.motion.lock().unwrap() = motion;
    }

    fn location(&self) -> Location {
        *self.location.lock().unwrap()
    }

    fn set_location(&self, location: Location) {
        self.record(HostCall::SetLocation(location));
        *self.location.lock().unwrap() = location;
    }

    fn drag(&self) -> f64 {
        *self.drag.lock().unwrap()
    }

    fn set_drag(&self, drag: f64) {
        self.record(HostCall::SetDrag(drag));
        *self.drag.lock().unwrap() = drag;
    }

    fn set_keep_movement(&self, keep: bool) {
        self.record(HostCall::SetKeepMovement(keep));
    }

    fn apply_physics_step(&self) {
        self.record(HostCall::PhysicsStep);
        let delta = *self.physics_delta.lock().unwrap();
        *self.motion.lock().unwrap() += delta;
    }

    fn move_with_collision(&self, delta: DVec3) {
        self.record(HostCall::Move(delta));
        let mut location = self.location.lock().unwrap();
        let mut position = location.position + delta;
        if let Some(floor) = *self.floor_y.lock().unwrap() {
            if position.y < floor {
                position.y = floor;
            }
        }
        location.position = position;
    }

    fn needs_movement_update(&self) -> bool {
        self.needs_movement_update.load(Ordering::SeqCst)
    }

    fn handle_movement(&self, destination: Location) {
        self.record(HostCall::HandleMovement(destination));
        *self.location.lock().unwrap() = destination;
    }
}

/// Spawn a fake player over a fresh [`StubHost`] with default tuning
pub fn spawn_test_player(actor: u64) -> (FakePlayer, Arc<StubHost>) {
    let host = Arc::new(StubHost::new(actor));
    let session = Arc::new(FakePlayerSession::new("Test Player"));
    let player = FakePlayer::new(
        session,
        Arc::clone(&host) as Arc<dyn HostEntity>,
        &SimulationConfig::default(),
    )
    .expect("test player should spawn");
    // Admission already amplified drag and disabled movement retention;
    // start order assertions from a clean slate.
    host.clear_calls();
    (player, host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_host_records_calls_in_order() {
        let host = StubHost::new(1);
        host.set_motion(DVec3::new(1.0, 0.0, 0.0));
        host.apply_physics_step();

        assert_eq!(
            host.calls(),
            vec![
                HostCall::SetMotion(DVec3::new(1.0, 0.0, 0.0)),
                HostCall::PhysicsStep,
            ]
        );
    }

    #[test]
    fn test_stub_host_collision_floor() {
        let host = StubHost::new(1);
        host.set_floor_y(Some(0.0));
        host.seed_location(Location::from_position(DVec3::new(0.0, 0.05, 0.0)));

        host.move_with_collision(DVec3::new(0.0, -0.2, 0.0));
        assert_eq!(host.location().position, DVec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_spawn_test_player_starts_clean() {
        let (player, host) = spawn_test_player(7);
        assert_eq!(player.actor_runtime_id(), ActorRuntimeId(7));
        assert!(host.calls().is_empty());
        // Drag was amplified by the default multiplier at spawn.
        assert!((host.drag() - 0.16).abs() < 1.0e-12);
    }
}
