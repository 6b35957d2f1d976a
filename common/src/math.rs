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

//! Spatial types shared between the engine and the protocol boundary

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position and view direction of an entity in the world.
///
/// The host environment stores one of these per entity. The engine captures
/// it before a collision move, restores it afterwards, and hands the
/// post-collision value to the host's movement notification entry point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// World-space position
    pub position: DVec3,
    /// Horizontal view angle in degrees
    pub yaw: f32,
    /// Vertical view angle in degrees
    pub pitch: f32,
}

impl Location {
    /// Create a location with an explicit view direction
    pub fn new(position: DVec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Create a location looking straight ahead
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// The same pose translated by `delta`
    pub fn offset(&self, delta: DVec3) -> Self {
        Self {
            position: self.position + delta,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }
}
