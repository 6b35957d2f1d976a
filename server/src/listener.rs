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

//! Packet listener contract for fake player sessions

use crate::session::FakePlayerSession;
use mimic_common::GamePacket;

/// Observer for packets delivered to a fake player's session.
///
/// Listeners are registered per packet kind via
/// [`FakePlayerSession::register_specific_packet_listener`] and receive
/// every delivered packet of that kind, for any actor — filtering on the
/// packet's embedded actor id is the listener's job.
pub trait PacketListener: Send + Sync {
    /// Called on the simulation thread for each delivered packet
    fn on_packet(&self, packet: &GamePacket, session: &FakePlayerSession);
}

/// Adapter turning a closure into a [`PacketListener`].
pub struct ClosurePacketListener {
    handler: Box<dyn Fn(&GamePacket, &FakePlayerSession) + Send + Sync>,
}

impl ClosurePacketListener {
    /// Wrap a closure as a packet listener
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&GamePacket, &FakePlayerSession) + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }
}

impl PacketListener for ClosurePacketListener {
    fn on_packet(&self, packet: &GamePacket, session: &FakePlayerSession) {
        (self.handler)(packet, session);
    }
}
