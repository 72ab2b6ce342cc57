use serde::{Deserialize, Serialize};

use super::enums::UserRole;

/// Signed-in account. `verified` marks a reviewed doctor credential;
/// it is display-only, no flow gates on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub wallet_balance: f64,
    pub verified: bool,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        wallet_balance: f64,
        verified: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            wallet_balance,
            verified,
        }
    }
}
