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

//! Mimic Common Types
//!
//! This crate defines the types shared between the Mimic engine and the
//! surrounding network layer:
//! - Actor identity (`ActorRuntimeId`)
//! - Spatial types (`Location`)
//! - Decoded engine-boundary packets (`GamePacket`, `PacketKind`)

pub mod actor;
pub mod math;
pub mod protocol;

// Re-export commonly used types
pub use actor::ActorRuntimeId;
pub use math::Location;
pub use protocol::{GamePacket, PacketKind};
