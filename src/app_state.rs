//! Shared application state: the two stores every view reads.
//!
//! `AppState` bundles the identity and workspace stores. It is built
//! once at the composition root and handed to views by reference;
//! nothing in the crate holds module-level mutable state, so several
//! independent instances can coexist (tests rely on this).

use crate::identity::IdentityStore;
use crate::workspace::WorkspaceStore;

// ═══════════════════════════════════════════════════════════
// AppState — identity + workspace composition root
// ═══════════════════════════════════════════════════════════

/// Session state shared across pages.
///
/// Uses `RwLock` inside each store so concurrent readers never block
/// each other; writes happen on user-initiated callbacks only.
pub struct AppState {
    /// Who is signed in and their wallet.
    pub identity: IdentityStore,
    /// Reports, the active selection, chat transcript, free-question
    /// counter.
    pub workspace: WorkspaceStore,
}

impl AppState {
    /// Empty state: nobody signed in, no reports, fresh counter.
    pub fn new() -> Self {
        Self {
            identity: IdentityStore::new(),
            workspace: WorkspaceStore::new(),
        }
    }

    /// State seeded the way the demo boots: a verified doctor already
    /// signed in and two completed reports in the bank.
    pub fn demo() -> Self {
        Self {
            identity: IdentityStore::demo(),
            workspace: WorkspaceStore::demo(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from store operations.
///
/// Store mutators are total functions; the only failure they can
/// surface is a poisoned lock.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Internal lock error")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
