//! Identity store: who is signed in and their wallet balance.
//!
//! Login and signup fabricate a profile locally; the prototype has no
//! credential backend, so both always succeed and the password is
//! accepted unchecked. `RwLock` allows concurrent reads from every
//! view while writes (login/logout) take the lock briefly.

use std::sync::{RwLock, RwLockReadGuard};

use serde::{Deserialize, Serialize};

use crate::app_state::StateError;
use crate::models::enums::UserRole;
use crate::models::User;

/// Wallet balance granted on login.
const LOGIN_WALLET_BALANCE: f64 = 15.50;

/// Wallet balance granted on signup.
const SIGNUP_WALLET_BALANCE: f64 = 5.00;

// ═══════════════════════════════════════════════════════════
// Auth — the signed-in state
// ═══════════════════════════════════════════════════════════

/// Signed-in state. Consumers match on this instead of reaching
/// through a nullable user, so the anonymous case is always handled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Auth {
    Authenticated(User),
    Anonymous,
}

impl Auth {
    /// Borrow the signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

// ═══════════════════════════════════════════════════════════
// Profile changes
// ═══════════════════════════════════════════════════════════

/// Partial profile update from the account page. `None` fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

// ═══════════════════════════════════════════════════════════
// IdentityStore
// ═══════════════════════════════════════════════════════════

pub struct IdentityStore {
    auth: RwLock<Auth>,
}

impl IdentityStore {
    /// Create a store with nobody signed in.
    pub fn new() -> Self {
        Self {
            auth: RwLock::new(Auth::Anonymous),
        }
    }

    /// Store seeded the way the demo boots: a verified doctor already
    /// signed in.
    pub fn demo() -> Self {
        let doctor = User::new(
            "1",
            "Dr. Sarah Johnson",
            "sarah.johnson@example.com",
            UserRole::Doctor,
            LOGIN_WALLET_BALANCE,
            true,
        );
        Self {
            auth: RwLock::new(Auth::Authenticated(doctor)),
        }
    }

    // ── Read path ───────────────────────────────────────────

    /// Acquire a read lock on the auth state.
    pub fn read_auth(&self) -> Result<RwLockReadGuard<'_, Auth>, StateError> {
        self.auth.read().map_err(|_| StateError::LockPoisoned)
    }

    /// Owned copy of the signed-in user, `None` when anonymous.
    pub fn current_user(&self) -> Result<Option<User>, StateError> {
        let guard = self.auth.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(guard.user().cloned())
    }

    /// Wallet balance of the signed-in user, `None` when anonymous.
    pub fn wallet_balance(&self) -> Result<Option<f64>, StateError> {
        let guard = self.auth.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(guard.user().map(|user| user.wallet_balance))
    }

    /// Check whether someone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.auth
            .read()
            .map(|guard| guard.is_authenticated())
            .unwrap_or(false)
    }

    // ── Mutation (write path) ───────────────────────────────

    /// Sign in with a fabricated profile for the chosen role.
    ///
    /// Replaces any prior user. The balance is fixed at 15.50 and
    /// `verified` is true only for doctors.
    pub fn login(
        &self,
        email: &str,
        _password: &str,
        role: UserRole,
    ) -> Result<User, StateError> {
        let name = match role {
            UserRole::Doctor => "Dr. Sarah Johnson",
            UserRole::Patient => "John Smith",
        };
        let verified = role == UserRole::Doctor;
        let user = User::new("1", name, email, role, LOGIN_WALLET_BALANCE, verified);

        let mut guard = self.auth.write().map_err(|_| StateError::LockPoisoned)?;
        *guard = Auth::Authenticated(user.clone());
        drop(guard);

        tracing::info!(role = user.role.as_str(), "User logged in");
        Ok(user)
    }

    /// Create a fresh account profile and sign it in.
    ///
    /// Balance starts at 5.00 and `verified` is false regardless of
    /// role; doctors verify later through the account page.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        role: UserRole,
    ) -> Result<User, StateError> {
        let user = User::new("1", name, email, role, SIGNUP_WALLET_BALANCE, false);

        let mut guard = self.auth.write().map_err(|_| StateError::LockPoisoned)?;
        *guard = Auth::Authenticated(user.clone());
        drop(guard);

        tracing::info!(role = user.role.as_str(), "User signed up");
        Ok(user)
    }

    /// Clear the signed-in user. Idempotent.
    pub fn logout(&self) -> Result<(), StateError> {
        let mut guard = self.auth.write().map_err(|_| StateError::LockPoisoned)?;
        *guard = Auth::Anonymous;
        drop(guard);

        tracing::info!("User logged out");
        Ok(())
    }

    /// Add `delta` (positive or negative) to the wallet balance.
    ///
    /// Silent no-op when anonymous. The balance is not clamped at
    /// zero; callers that need a floor check it before debiting.
    pub fn update_wallet_balance(&self, delta: f64) -> Result<(), StateError> {
        let mut guard = self.auth.write().map_err(|_| StateError::LockPoisoned)?;
        if let Auth::Authenticated(user) = &mut *guard {
            user.wallet_balance += delta;
            tracing::debug!(delta, balance = user.wallet_balance, "Wallet balance updated");
        }
        Ok(())
    }

    /// Merge profile edits from the account page into the signed-in
    /// user. Silent no-op when anonymous.
    pub fn update_profile(&self, changes: ProfileChanges) -> Result<(), StateError> {
        let mut guard = self.auth.write().map_err(|_| StateError::LockPoisoned)?;
        if let Auth::Authenticated(user) = &mut *guard {
            if let Some(name) = changes.name {
                user.name = name;
            }
            if let Some(email) = changes.email {
                user.email = email;
            }
            tracing::debug!("Profile updated");
        }
        Ok(())
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
