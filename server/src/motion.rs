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

//! Engine-owned motion state
//!
//! The controller keeps its own notion of the simulated player's velocity,
//! distinct from the host entity's motion field. Three writers touch it:
//! the per-tick host synchronization, behaviours running during the tick,
//! and the actor-motion packet listener applying authoritative corrections.

use glam::DVec3;
use std::sync::{Arc, RwLock};

/// Magnitude at or below which a motion axis is treated as numerically zero
/// for movement-commit purposes.
pub const MOTION_THRESHOLD: f64 = 1.0e-4;

/// Shared handle to a fake player's motion vector.
///
/// Cloning shares the underlying vector; the controller holds one handle and
/// the actor-motion listener holds another. All mutation must happen from
/// the simulation thread's perspective — cross-thread packet delivery is
/// serialized onto it by [`crate::session::FakePlayerSession::pump`].
#[derive(Debug, Clone, Default)]
pub struct MotionState {
    inner: Arc<RwLock<DVec3>>,
}

impl MotionState {
    /// Create a zeroed motion state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current motion vector
    pub fn get(&self) -> DVec3 {
        *self.inner.read().unwrap()
    }

    /// Replace the motion vector
    pub fn set(&self, motion: DVec3) {
        *self.inner.write().unwrap() = motion;
    }

    /// Zero every axis whose magnitude is at or below [`MOTION_THRESHOLD`],
    /// store the result, and return it.
    ///
    /// Run before the movement-commit decision each tick so floating-point
    /// noise is never treated as real movement.
    pub fn clamp_to_threshold(&self) -> DVec3 {
        let mut motion = self.get();
        if motion.x.abs() <= MOTION_THRESHOLD {
            motion.x = 0.0;
        }
        if motion.y.abs() <= MOTION_THRESHOLD {
            motion.y = 0.0;
        }
        if motion.z.abs() <= MOTION_THRESHOLD {
            motion.z = 0.0;
        }
        self.set(motion);
        motion
    }
}
