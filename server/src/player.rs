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

//! Fake player controller and per-tick movement synchronization
//!
//! Three sources of truth touch a simulated player's motion every tick: the
//! host's own physics step, the attached behaviours, and authoritative
//! corrections pushed over the network. [`FakePlayer::tick`] reconciles
//! them in a fixed order without bypassing the host's movement-broadcast
//! pipeline.

use crate::behaviour::{Behaviour, BehaviourHandle, BehaviourSet, RemoveOutcome};
use crate::config::SimulationConfig;
use crate::error::SpawnError;
use crate::host::HostEntity;
use crate::listener::ClosurePacketListener;
use crate::metadata::MetadataStore;
use crate::motion::MotionState;
use crate::session::FakePlayerSession;
use glam::DVec3;
use mimic_common::{ActorRuntimeId, GamePacket, PacketKind};
use serde_json::Value;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Default factor applied to the host entity's drag coefficient at spawn.
///
/// Entity types without a controlling client assume flight-disabled, no
/// client-input bookkeeping; amplifying drag compensates so a simulated
/// player decelerates the way a controlled one does. Override through
/// [`SimulationConfig`].
pub const DEFAULT_DRAG_MULTIPLIER: f64 = 8.0;

/// Controller for one simulated participant.
///
/// Owns the engine-side motion state, the attached behaviours, and the
/// metadata store; shares the host entity and the fake session with the
/// surrounding environment.
pub struct FakePlayer {
    session: Arc<FakePlayerSession>,
    host: Arc<dyn HostEntity>,
    actor: ActorRuntimeId,
    motion: MotionState,
    behaviours: BehaviourSet,
    metadata: MetadataStore,
}

impl FakePlayer {
    /// Bind a controller to a host entity and a fake session.
    ///
    /// Refuses stale host references and unusable drag coefficients here —
    /// per-tick code assumes a well-formed host and does not re-check.
    /// Initialization amplifies drag by the configured multiplier, disables
    /// the host's own movement retention for the entity, zeroes motion, and
    /// subscribes the actor-motion override listener.
    pub fn new(
        session: Arc<FakePlayerSession>,
        host: Arc<dyn HostEntity>,
        tuning: &SimulationConfig,
    ) -> Result<Self, SpawnError> {
        let actor = host.runtime_id();
        if !host.is_valid() {
            return Err(SpawnError::InvalidHostEntity(actor));
        }

        let drag = host.drag() * tuning.drag_multiplier;
        if !drag.is_finite() || drag < 0.0 {
            return Err(SpawnError::InvalidDrag { actor, drag });
        }
        host.set_drag(drag);
        host.set_keep_movement(false);

        let motion = MotionState::new();
        {
            let motion = motion.clone();
            session.register_specific_packet_listener(
                PacketKind::SetActorMotion,
                Arc::new(ClosurePacketListener::new(move |packet, _session| {
                    if let GamePacket::SetActorMotion(correction) = packet {
                        if correction.actor_runtime_id == actor {
                            motion.set(correction.motion);
                        }
                    }
                })),
            );
        }

        Ok(Self {
            session,
            host,
            actor,
            motion,
            behaviours: BehaviourSet::default(),
            metadata: MetadataStore::new(),
        })
    }

    /// The fake session this player is driven through
    pub fn session(&self) -> &Arc<FakePlayerSession> {
        &self.session
    }

    /// The host entity backing this player
    pub fn host(&self) -> &Arc<dyn HostEntity> {
        &self.host
    }

    /// Runtime id of the backing host entity
    pub fn actor_runtime_id(&self) -> ActorRuntimeId {
        self.actor
    }

    /// Engine-side motion vector.
    ///
    /// During the behaviour phase this reflects the last push, override, or
    /// behaviour write; the authoritative host value is pulled back in
    /// right after the behaviours run.
    pub fn motion(&self) -> DVec3 {
        self.motion.get()
    }

    /// Replace the motion vector.
    ///
    /// Writes through to the host entity as well, so a behaviour's motion
    /// change survives the post-behaviour pull. Authoritative network
    /// corrections take the listener path instead and touch only the
    /// engine-side vector.
    pub fn set_motion(&self, motion: DVec3) {
        self.motion.set(motion);
        self.host.set_motion(motion);
    }

    /// Attach a behaviour at the end of the tick order.
    ///
    /// Invokes its `on_attach` hook exactly once, before returning. The
    /// handle is the key for later removal.
    pub fn add_behaviour(&mut self, behaviour: Box<dyn Behaviour>) -> BehaviourHandle {
        let handle = self.behaviours.insert(behaviour);
        if let Some(mut behaviour) = self.behaviours.take(handle) {
            behaviour.on_attach(self);
            self.finish_loan(handle, behaviour);
        }
        handle
    }

    /// Detach a behaviour, invoking its `on_detach` hook exactly once.
    ///
    /// A handle that is not attached is a no-op, not an error. A behaviour
    /// removing itself from inside its own `tick` has the detach completed
    /// as soon as that `tick` call returns.
    pub fn remove_behaviour(&mut self, handle: BehaviourHandle) {
        match self.behaviours.begin_remove(handle) {
            RemoveOutcome::Detached(mut behaviour) => behaviour.on_detach(self),
            RemoveOutcome::Deferred | RemoveOutcome::Absent => {}
        }
    }

    /// Handles of the attached behaviours, in attachment order
    pub fn behaviour_handles(&self) -> Vec<BehaviourHandle> {
        self.behaviours.order_snapshot()
    }

    /// Whether the handle refers to a currently attached behaviour
    pub fn has_behaviour(&self, handle: BehaviourHandle) -> bool {
        self.behaviours.contains(handle)
    }

    /// Look up a metadata value
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Look up a metadata value, falling back to `default` on a miss
    pub fn metadata_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.metadata.get_or(key, default)
    }

    /// Store a metadata value, replacing any previous value for the key
    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.set(key, value);
    }

    /// Remove a metadata key, returning its value if present
    pub fn delete_metadata(&mut self, key: &str) -> Option<Value> {
        self.metadata.delete(key)
    }

    /// Run one simulation tick.
    ///
    /// Call once per game tick, on the simulation thread, while the host
    /// entity is valid.
    pub fn tick(&mut self) {
        self.do_movement_updates();
    }

    fn do_movement_updates(&mut self) {
        // The controller, not the host's idle bookkeeping, is the authority
        // on velocity going into this tick.
        self.host.set_motion(self.motion.get());
        self.host.apply_physics_step();
        self.run_behaviours();
        // The physics step and behaviours may have changed host motion
        // independently of the pushed value.
        self.sync_motion_from_host();

        if self.host.needs_movement_update() {
            let motion = self.motion.clamp_to_threshold();
            if motion != DVec3::ZERO {
                let before = self.host.location();
                self.host.move_with_collision(motion);
                let after = self.host.location();
                // The collision move wrote the location directly, which
                // bypasses the movement-broadcast pipeline. Roll it back and
                // route the change through the canonical entry point.
                self.host.set_location(before);
                self.host.handle_movement(after);
            }
            // The movement path may mutate motion again.
            self.sync_motion_from_host();
        }
    }

    fn sync_motion_from_host(&mut self) {
        self.motion.set(self.host.motion());
    }

    fn run_behaviours(&mut self) {
        for handle in self.behaviours.order_snapshot() {
            let Some(mut behaviour) = self.behaviours.take(handle) else {
                // Detached by an earlier behaviour this tick.
                continue;
            };
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| behaviour.tick(self))) {
                tracing::error!(
                    "Behaviour {} on actor {} panicked during tick: {}",
                    handle,
                    self.actor,
                    panic_message(payload.as_ref())
                );
            }
            self.finish_loan(handle, behaviour);
        }
    }

    /// Hand a loaned behaviour back to the arena, completing a deferred
    /// detach if it removed itself during the loan.
    fn finish_loan(&mut self, handle: BehaviourHandle, behaviour: Box<dyn Behaviour>) {
        if let Some(mut removed) = self.behaviours.restore(handle, behaviour) {
            removed.on_detach(self);
        }
    }

    /// Tear the controller down: detach every behaviour in attachment order
    /// and clear metadata. The host entity itself stays with the host world.
    pub fn destroy(&mut self) {
        for handle in self.behaviours.order_snapshot() {
            self.remove_behaviour(handle);
        }
        self.metadata.clear();
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
