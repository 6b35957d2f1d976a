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

//! Behaviour contract and the ordered behaviour collection
//!
//! Behaviours are the pluggable per-tick strategies (wandering, following,
//! attacking) that co-drive a fake player's motion. The engine only knows
//! the contract below; behaviour state is opaque.

use crate::player::FakePlayer;
use std::collections::HashMap;

/// Per-tick logic attached to one fake player.
///
/// Hook order is `on_attach` → `tick`* → `on_detach`, driven entirely by
/// [`FakePlayer::add_behaviour`] and [`FakePlayer::remove_behaviour`]
/// (player destruction detaches everything in attachment order). `tick`
/// runs after the host physics step and before the post-behaviour motion
/// resync, and may mutate the player's motion, metadata, and behaviour
/// collection — including detaching itself.
///
/// A behaviour that cannot make progress on a tick should no-op rather
/// than panic. A panic is contained and logged, but costs the behaviour
/// the rest of that tick.
pub trait Behaviour: Send {
    /// Invoked exactly once, synchronously, when the behaviour is attached
    fn on_attach(&mut self, _player: &mut FakePlayer) {}

    /// Invoked exactly once when the behaviour is detached or the owning
    /// player is destroyed. The player remains usable for the duration of
    /// this call only.
    fn on_detach(&mut self, _player: &mut FakePlayer) {}

    /// Invoked once per simulation tick while attached
    fn tick(&mut self, player: &mut FakePlayer);
}

/// Stable identifier issued when a behaviour is attached.
///
/// Handles are never reused for the lifetime of the owning player, so a
/// stale handle simply misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviourHandle(u64);

impl std::fmt::Display for BehaviourHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena slot states.
///
/// A slot goes on loan while its behaviour is inside one of its own hook
/// calls; removal during the loan leaves a tombstone so the loan frame can
/// finish the detach when the hook returns.
enum Slot {
    /// Attached and at rest
    Occupied(Box<dyn Behaviour>),
    /// On loan to a hook call frame
    Borrowed,
    /// Removed while on loan; detach completes when the loan returns
    BorrowedRemoving,
}

/// Outcome of starting a removal.
pub(crate) enum RemoveOutcome {
    /// The behaviour was at rest and is handed back for an immediate detach
    Detached(Box<dyn Behaviour>),
    /// The behaviour is inside one of its own hooks; the loan frame
    /// completes the detach
    Deferred,
    /// No such behaviour attached
    Absent,
}

/// Ordered, handle-keyed collection of attached behaviours.
///
/// Attachment order is tracked separately from the arena so iteration order
/// is exactly insertion order, with structural changes visible immediately.
#[derive(Default)]
pub(crate) struct BehaviourSet {
    slots: HashMap<u64, Slot>,
    order: Vec<BehaviourHandle>,
    next_handle: u64,
}

impl BehaviourSet {
    /// Attach a behaviour at the end of the order, issuing its handle
    pub fn insert(&mut self, behaviour: Box<dyn Behaviour>) -> BehaviourHandle {
        let handle = BehaviourHandle(self.next_handle);
        self.next_handle += 1;
        self.slots.insert(handle.0, Slot::Occupied(behaviour));
        self.order.push(handle);
        handle
    }

    /// Whether the handle refers to an attached behaviour
    pub fn contains(&self, handle: BehaviourHandle) -> bool {
        matches!(
            self.slots.get(&handle.0),
            Some(Slot::Occupied(_)) | Some(Slot::Borrowed)
        )
    }

    /// Attachment order at this instant
    pub fn order_snapshot(&self) -> Vec<BehaviourHandle> {
        self.order.clone()
    }

    /// Number of attached behaviours
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no behaviours are attached
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Take a behaviour out for a hook call, leaving its slot on loan.
    ///
    /// Returns `None` if the handle is absent or the behaviour is already
    /// on loan.
    pub fn take(&mut self, handle: BehaviourHandle) -> Option<Box<dyn Behaviour>> {
        let slot = self.slots.get_mut(&handle.0)?;
        match std::mem::replace(slot, Slot::Borrowed) {
            Slot::Occupied(behaviour) => Some(behaviour),
            other => {
                // Not at rest; put the original state back.
                *slot = other;
                None
            }
        }
    }

    /// Return a behaviour after a hook call.
    ///
    /// Yields the behaviour back to the caller when it was removed during
    /// the loan — the caller owes it a detach.
    pub fn restore(
        &mut self,
        handle: BehaviourHandle,
        behaviour: Box<dyn Behaviour>,
    ) -> Option<Box<dyn Behaviour>> {
        if matches!(self.slots.get(&handle.0), Some(Slot::BorrowedRemoving)) {
            self.slots.remove(&handle.0);
            return Some(behaviour);
        }
        if let Some(slot) = self.slots.get_mut(&handle.0) {
            if matches!(slot, Slot::Borrowed) {
                *slot = Slot::Occupied(behaviour);
                return None;
            }
        }
        Some(behaviour)
    }

    /// Start removing a behaviour. Removal drops it from the attachment
    /// order immediately; the returned outcome says who finishes the
    /// detach.
    pub fn begin_remove(&mut self, handle: BehaviourHandle) -> RemoveOutcome {
        let Some(slot) = self.slots.get_mut(&handle.0) else {
            return RemoveOutcome::Absent;
        };
        match std::mem::replace(slot, Slot::BorrowedRemoving) {
            Slot::Occupied(behaviour) => {
                self.slots.remove(&handle.0);
                self.order.retain(|attached| *attached != handle);
                RemoveOutcome::Detached(behaviour)
            }
            Slot::Borrowed => {
                self.order.retain(|attached| *attached != handle);
                RemoveOutcome::Deferred
            }
            // Already being removed; keep the tombstone.
            Slot::BorrowedRemoving => RemoveOutcome::Deferred,
        }
    }
}
