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

//! String-keyed metadata storage for fake players
//!
//! Behaviours use this to persist cross-tick state through the controller
//! without the engine knowing behaviour-specific shapes. Plain mapping
//! semantics: last write wins, no TTL, cleared entirely on destroy.

use serde_json::Value;
use std::collections::HashMap;

/// String-keyed mapping of open-shaped values.
#[derive(Debug, Default)]
pub struct MetadataStore {
    values: HashMap<String, Value>,
}

impl MetadataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a value by key, falling back to `default` on a miss
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.values.get(key).unwrap_or(default)
    }

    /// Store a value, replacing any previous value for the key
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Remove a key, returning its value if present
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
