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

//! Fake player session management
//!
//! A real participant has a transport-backed network session; a simulated
//! one gets a [`FakePlayerSession`] instead. It carries the session
//! identity and the specific-packet listener registry, and it is where the
//! host's clientbound traffic for the fake participant is delivered.
//!
//! Delivery must observe the engine's motion state from the simulation
//! thread's perspective. [`FakePlayerSession::handle_clientbound`] dispatches
//! immediately and must only be called on the simulation thread; transports
//! running elsewhere enqueue packets with
//! [`FakePlayerSession::enqueue_clientbound`], and the registry drains the
//! queue with [`FakePlayerSession::pump`] at the top of each tick.

use crate::listener::PacketListener;
use chrono::{DateTime, Utc};
use mimic_common::{GamePacket, PacketKind};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// Network-session stand-in for one simulated participant.
pub struct FakePlayerSession {
    /// Unique session identifier
    session_id: Uuid,

    /// Display name of the simulated participant
    display_name: String,

    /// Session creation timestamp
    created_at: DateTime<Utc>,

    /// Listeners keyed by the packet kind they registered for
    listeners: RwLock<HashMap<PacketKind, Vec<Arc<dyn PacketListener>>>>,

    /// Clientbound packets queued from outside the simulation thread
    inbound: Mutex<VecDeque<GamePacket>>,
}

impl FakePlayerSession {
    /// Open a session for a simulated participant
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            display_name: display_name.into(),
            created_at: Utc::now(),
            listeners: RwLock::new(HashMap::new()),
            inbound: Mutex::new(VecDeque::new()),
        }
    }

    /// Unique session identifier
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Display name of the simulated participant
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Session creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Subscribe a listener to one specific packet kind.
    ///
    /// Every delivered packet of that kind reaches the listener, whichever
    /// actor it addresses; listeners filter on the embedded actor id.
    pub fn register_specific_packet_listener(
        &self,
        kind: PacketKind,
        listener: Arc<dyn PacketListener>,
    ) {
        let mut listeners = self.listeners.write().unwrap();
        listeners.entry(kind).or_default().push(listener);
    }

    /// Deliver a packet to the matching listeners immediately.
    ///
    /// Must be called on the simulation thread; use
    /// [`enqueue_clientbound`](Self::enqueue_clientbound) from anywhere else.
    pub fn handle_clientbound(&self, packet: &GamePacket) {
        // Clone the matching listeners out so one of them can register
        // further listeners without deadlocking on the registry lock.
        let matched: Vec<Arc<dyn PacketListener>> = {
            let listeners = self.listeners.read().unwrap();
            listeners.get(&packet.kind()).cloned().unwrap_or_default()
        };

        for listener in matched {
            listener.on_packet(packet, self);
        }
    }

    /// Queue a clientbound packet from outside the simulation thread.
    pub fn enqueue_clientbound(&self, packet: GamePacket) {
        let mut inbound = self.inbound.lock().unwrap();
        inbound.push_back(packet);
    }

    /// Drain queued packets and deliver them in arrival order.
    ///
    /// Called on the simulation thread before the owning player ticks.
    /// Returns the number of packets delivered.
    pub fn pump(&self) -> usize {
        let mut delivered = 0;
        loop {
            // Pop one packet per lock acquisition so a listener can enqueue
            // follow-up packets without deadlocking on the queue lock.
            let packet = {
                let mut inbound = self.inbound.lock().unwrap();
                inbound.pop_front()
            };
            let Some(packet) = packet else {
                return delivered;
            };
            self.handle_clientbound(&packet);
            delivered += 1;
        }
    }

    /// Number of packets waiting for the next pump
    pub fn queued_len(&self) -> usize {
        self.inbound.lock().unwrap().len()
    }
}

impl std::fmt::Debug for FakePlayerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakePlayerSession")
            .field("session_id", &self.session_id)
            .field("display_name", &self.display_name)
            .field("created_at", &self.created_at)
            .field("queued", &self.queued_len())
            .finish()
    }
}
