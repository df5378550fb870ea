//! Lazily populated child caches.
//!
//! A [`CacheSlot`] holds at most one value, created on first access and kept
//! for as long as the slot lives. There is no eviction. Two scopes exist:
//!
//! - [`SlotScope::Instance`]: the slot is a field of its owning resolver, so
//!   every owner gets its own child.
//! - [`SlotScope::Type`]: the slot lives in a `static` reachable only through
//!   the owning resolver type, so every instance of that type shares one
//!   child for the rest of the process.
//!
//! Population is set-if-absent. If several threads race on an empty slot,
//! exactly one initializer's value is stored and all of them observe it.

use std::fmt;
use std::sync::OnceLock;

/// Who shares the value held by a [`CacheSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotScope {
    /// One value per owning resolver instance.
    Instance,
    /// One value per resolver type, for the process lifetime.
    Type,
}

impl fmt::Display for SlotScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance => f.write_str("instance"),
            Self::Type => f.write_str("type"),
        }
    }
}

/// A write-once cell for a lazily constructed child resolver.
pub struct CacheSlot<T> {
    name: &'static str,
    scope: SlotScope,
    cell: OnceLock<T>,
}

impl<T> CacheSlot<T> {
    /// An empty slot owned by a single resolver instance.
    pub const fn instance(name: &'static str) -> Self {
        Self {
            name,
            scope: SlotScope::Instance,
            cell: OnceLock::new(),
        }
    }

    /// An empty slot meant to live in a `static` shared by a resolver type.
    ///
    /// Once populated the value is never dropped or replaced.
    pub const fn shared(name: &'static str) -> Self {
        Self {
            name,
            scope: SlotScope::Type,
            cell: OnceLock::new(),
        }
    }

    /// Return the cached value, creating it with `init` on first access.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(|| {
            tracing::debug!(slot = self.name, scope = %self.scope, "populating cache slot");
            init()
        })
    }

    /// The cached value, if the slot has been populated.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the slot has been populated.
    pub fn is_populated(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The slot's diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Who shares this slot's value.
    pub fn scope(&self) -> SlotScope {
        self.scope
    }
}

impl<T: fmt::Debug> fmt::Debug for CacheSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheSlot")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("value", &self.cell.get())
            .finish()
    }
}
