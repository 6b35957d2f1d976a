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

//! Fake player lifecycle registry
//!
//! The registry is the engine's lifecycle owner: a controller is created
//! when a fake session is established, ticked while its host entity stays
//! valid, and destroyed when the session ends. Tick order is spawn order.

use crate::config::SimulationConfig;
use crate::error::SpawnError;
use crate::host::HostEntity;
use crate::player::FakePlayer;
use crate::session::FakePlayerSession;
use mimic_common::ActorRuntimeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of live fake player controllers, keyed by actor runtime id.
#[derive(Default)]
pub struct FakePlayerRegistry {
    players: HashMap<ActorRuntimeId, FakePlayer>,
    /// Spawn order, which is also tick order
    order: Vec<ActorRuntimeId>,
    tuning: SimulationConfig,
}

impl FakePlayerRegistry {
    /// Create an empty registry with the given simulation tuning
    pub fn new(tuning: SimulationConfig) -> Self {
        Self {
            players: HashMap::new(),
            order: Vec::new(),
            tuning,
        }
    }

    /// Admit a fake player for a newly established session.
    ///
    /// Fails if a controller already exists for the host entity's actor id
    /// or if the host fails admission checks (see [`FakePlayer::new`]).
    pub fn spawn(
        &mut self,
        session: Arc<FakePlayerSession>,
        host: Arc<dyn HostEntity>,
    ) -> Result<ActorRuntimeId, SpawnError> {
        let actor = host.runtime_id();
        if self.players.contains_key(&actor) {
            return Err(SpawnError::DuplicateActor(actor));
        }

        let player = FakePlayer::new(session, host, &self.tuning)?;
        tracing::debug!(
            "Spawned fake player '{}' for actor {}",
            player.session().display_name(),
            actor
        );
        self.players.insert(actor, player);
        self.order.push(actor);
        Ok(actor)
    }

    /// Destroy and drop the controller for an ended session.
    ///
    /// Detaches every behaviour and clears metadata before dropping.
    /// Returns `false` if no controller existed — despawning twice is fine.
    pub fn despawn(&mut self, actor: ActorRuntimeId) -> bool {
        match self.players.remove(&actor) {
            Some(mut player) => {
                player.destroy();
                self.order.retain(|spawned| *spawned != actor);
                tracing::debug!("Despawned fake player for actor {}", actor);
                true
            }
            None => false,
        }
    }

    /// Tick every live fake player, in spawn order.
    ///
    /// A player whose host entity is no longer valid is skipped — the host
    /// owns that entity's lifecycle, so the registry waits for its owner to
    /// despawn rather than tearing anything down itself. Each session's
    /// packet queue is pumped before its player ticks, which is what
    /// serializes cross-thread motion overrides onto the simulation thread.
    pub fn tick_all(&mut self) {
        for actor in &self.order {
            let Some(player) = self.players.get_mut(actor) else {
                continue;
            };
            if !player.host().is_valid() {
                tracing::warn!(
                    "Skipping fake player for actor {}: host entity is no longer valid",
                    actor
                );
                continue;
            }
            player.session().pump();
            player.tick();
        }
    }

    /// Look up a controller by actor id
    pub fn get(&self, actor: ActorRuntimeId) -> Option<&FakePlayer> {
        self.players.get(&actor)
    }

    /// Look up a controller by actor id (mutable)
    pub fn get_mut(&mut self, actor: ActorRuntimeId) -> Option<&mut FakePlayer> {
        self.players.get_mut(&actor)
    }

    /// Whether a controller exists for the actor id
    pub fn contains(&self, actor: ActorRuntimeId) -> bool {
        self.players.contains_key(&actor)
    }

    /// Number of live fake players
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no fake players are live
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Actor ids of the live fake players, in spawn order
    pub fn actor_ids(&self) -> Vec<ActorRuntimeId> {
        self.order.clone()
    }

    /// Destroy every controller, in spawn order. Used at shutdown.
    pub fn clear(&mut self) {
        for actor in std::mem::take(&mut self.order) {
            if let Some(mut player) = self.players.remove(&actor) {
                player.destroy();
            }
        }
    }
}
