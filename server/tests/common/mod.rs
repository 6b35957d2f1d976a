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

//! Shared test support for the integration tests

use glam::DVec3;
use mimic_common::{ActorRuntimeId, Location};
use mimic_server::{FakePlayer, FakePlayerSession, HostEntity, SimulationConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A mutating call observed on a [`RecordingHost`], in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    SetMotion(DVec3),
    SetDrag(f64),
    SetKeepMovement(bool),
    PhysicsStep,
    Move(DVec3),
    SetLocation(Location),
    HandleMovement(Location),
}

/// Scripted host entity double for driving full tick scenarios.
///
/// Applies a configurable velocity delta on each physics step, resolves
/// collision moves against an optional floor plane, optionally rewrites its
/// motion when the movement notification fires, and records every mutating
/// call for order assertions.
pub struct RecordingHost {
    runtime_id: ActorRuntimeId,
    valid: AtomicBool,
    motion: Mutex<DVec3>,
    location: Mutex<Location>,
    drag: Mutex<f64>,
    needs_movement_update: AtomicBool,
    physics_delta: Mutex<DVec3>,
    floor_y: Mutex<Option<f64>>,
    motion_after_movement: Mutex<Option<DVec3>>,
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
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
            motion_after_movement: Mutex::new(None),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn set_valid(&self, valid: bool) {
        self.valid.store(valid, Ordering::SeqCst);
    }

    pub fn set_needs_movement_update(&self, needs: bool) {
        self.needs_movement_update.store(needs, Ordering::SeqCst);
    }

    pub fn set_physics_delta(&self, delta: DVec3) {
        *self.physics_delta.lock().unwrap() = delta;
    }

    pub fn set_floor_y(&self, floor: Option<f64>) {
        *self.floor_y.lock().unwrap() = floor;
    }

    /// Script the motion value the movement notification leaves behind
    pub fn set_motion_after_movement(&self, motion: Option<DVec3>) {
        *self.motion_after_movement.lock().unwrap() = motion;
    }

    /// Seed host location without recording an event
    pub fn seed_location(&self, location: Location) {
        *self.location.lock().unwrap() = location;
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear_events(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl HostEntity for RecordingHost {
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
        self.record(HostEvent::SetMotion(motion));
        *self.motion.lock().unwrap() = motion;
    }

    fn location(&self) -> Location {
        *self.location.lock().unwrap()
    }

    fn set_location(&self, location: Location) {
        self.record(HostEvent::SetLocation(location));
        *self.location.lock().unwrap() = location;
    }

    fn drag(&self) -> f64 {
        *self.drag.lock().unwrap()
    }

    fn set_drag(&self, drag: f64) {
        self.record(HostEvent::SetDrag(drag));
        *self.drag.lock().unwrap() = drag;
    }

    fn set_keep_movement(&self, keep: bool) {
        self.record(HostEvent::SetKeepMovement(keep));
    }

    fn apply_physics_step(&self) {
        self.record(HostEvent::PhysicsStep);
        let delta = *self.physics_delta.lock().unwrap();
        *self.motion.lock().unwrap() += delta;
    }

    fn move_with_collision(&self, delta: DVec3) {
        self.record(HostEvent::Move(delta));
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
        self.record(HostEvent::HandleMovement(destination));
        *self.location.lock().unwrap() = destination;
        if let Some(motion) = *self.motion_after_movement.lock().unwrap() {
            *self.motion.lock().unwrap() = motion;
        }
    }
}

/// Spawn a fake player over a fresh [`RecordingHost`] with default tuning,
/// with the admission-time host calls already cleared.
pub fn spawn_player(actor: u64) -> (FakePlayer, Arc<RecordingHost>, Arc<FakePlayerSession>) {
    let host = Arc::new(RecordingHost::new(actor));
    let session = Arc::new(FakePlayerSession::new(format!("Bot {actor}")));
    let player = FakePlayer::new(
        Arc::clone(&session),
        Arc::clone(&host) as Arc<dyn HostEntity>,
        &SimulationConfig::default(),
    )
    .expect("test player should spawn");
    host.clear_events();
    (player, host, session)
}
