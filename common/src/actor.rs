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

//! Actor identity types

use serde::{Deserialize, Serialize};

/// Runtime identity of an entity inside the host environment.
///
/// This is NOT a persistent identifier. The host assigns it when the entity
/// enters the world and may reuse it after a restart. Network packets address
/// entities by this id, which is why the engine filters packet listeners
/// against it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ActorRuntimeId(pub u64);

impl ActorRuntimeId {
    /// Raw numeric id as the host environment reports it
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ActorRuntimeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActorRuntimeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
