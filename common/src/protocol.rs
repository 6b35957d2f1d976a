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

//! Engine-boundary packet types
//!
//! The wire format of these messages is owned by the network layer; the
//! engine only ever sees the decoded fields below. `PacketKind` is the
//! data-free discriminant enum used to register listeners for a specific
//! packet type.

use crate::actor::ActorRuntimeId;
use crate::math::Location;
use enum_kinds::EnumKind;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Authoritative velocity correction for one entity.
///
/// The host broadcasts this whenever externally triggered physics (an
/// explosion, a knockback hit) changes an entity's motion. A real client
/// applies it locally; the engine applies it to the simulated player's
/// motion state instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetActorMotionPacket {
    /// Entity the correction addresses
    pub actor_runtime_id: ActorRuntimeId,
    /// Replacement motion vector
    pub motion: DVec3,
}

/// Movement broadcast for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveActorAbsolutePacket {
    /// Entity that moved
    pub actor_runtime_id: ActorRuntimeId,
    /// New pose of the entity
    pub location: Location,
    /// Whether the host resolved the entity onto the ground
    pub on_ground: bool,
}

/// Decoded clientbound packets the engine can observe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, EnumKind)]
#[enum_kind(PacketKind, derive(Hash))]
pub enum GamePacket {
    SetActorMotion(SetActorMotionPacket),
    MoveActorAbsolute(MoveActorAbsolutePacket),
}

impl GamePacket {
    /// The entity this packet addresses
    pub fn actor_runtime_id(&self) -> ActorRuntimeId {
        match self {
            GamePacket::SetActorMotion(packet) => packet.actor_runtime_id,
            GamePacket::MoveActorAbsolute(packet) => packet.actor_runtime_id,
        }
    }

    /// The data-free discriminant used for listener registration
    pub fn kind(&self) -> PacketKind {
        PacketKind::from(self)
    }
}
