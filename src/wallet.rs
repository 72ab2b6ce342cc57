//! Wallet pricing rules and top-ups.
//!
//! Prices are display-and-billing constants; the only money movement
//! the prototype performs is crediting the wallet balance through the
//! identity store. The transaction history shown on the wallet page
//! is fixed mock data, not store-owned state.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::app_state::StateError;
use crate::identity::IdentityStore;
use crate::models::enums::{TransactionKind, TransactionStatus, UserRole};
use crate::models::WalletTransaction;
use crate::workspace::INITIAL_FREE_QUESTIONS;

/// Price of one chat question after the free quota is spent.
pub const QUESTION_PRICE: f64 = 1.00;

/// Per-report analysis price for doctors.
pub const DOCTOR_REPORT_PRICE: f64 = 4.99;

/// Per-report analysis price for patients.
pub const PATIENT_REPORT_PRICE: f64 = 2.99;

/// Smallest accepted top-up.
pub const MIN_TOP_UP: f64 = 5.00;

/// One-click amounts offered by the top-up dialog.
pub const QUICK_TOP_UP_AMOUNTS: [f64; 4] = [5.00, 10.00, 25.00, 50.00];

/// Fixed top-up offered by the chat insufficient-balance dialog.
pub const CHAT_TOP_UP_AMOUNT: f64 = 10.00;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Top-up of ${amount:.2} is below the $5.00 minimum")]
    BelowMinimum { amount: f64 },

    #[error("No user is signed in")]
    NotSignedIn,

    #[error(transparent)]
    State(#[from] StateError),
}

/// Per-report analysis price for a role.
pub fn report_price(role: &UserRole) -> f64 {
    match role {
        UserRole::Doctor => DOCTOR_REPORT_PRICE,
        UserRole::Patient => PATIENT_REPORT_PRICE,
    }
}

/// What the pricing card displays for a role.
#[derive(Debug, Clone, Serialize)]
pub struct PricingInfo {
    pub report_price: f64,
    pub free_questions: u32,
    pub question_price: f64,
    pub pdf_export_free: bool,
}

pub fn pricing_for(role: &UserRole) -> PricingInfo {
    PricingInfo {
        report_price: report_price(role),
        free_questions: INITIAL_FREE_QUESTIONS,
        question_price: QUESTION_PRICE,
        pdf_export_free: true,
    }
}

/// Credit the wallet from the top-up dialog.
///
/// Enforces the minimum and requires a signed-in user. Returns the
/// new balance.
pub fn top_up(identity: &IdentityStore, amount: f64) -> Result<f64, WalletError> {
    if amount < MIN_TOP_UP {
        return Err(WalletError::BelowMinimum { amount });
    }
    if !identity.is_authenticated() {
        return Err(WalletError::NotSignedIn);
    }

    identity.update_wallet_balance(amount)?;
    let balance = identity.wallet_balance()?.unwrap_or(0.0);
    tracing::info!(amount, balance, "Wallet topped up");
    Ok(balance)
}

/// The five mock history entries the wallet page renders.
pub fn sample_transactions() -> Vec<WalletTransaction> {
    vec![
        WalletTransaction::new(
            "1",
            TransactionKind::Credit,
            20.00,
            "Wallet top-up via Credit Card",
            day(2024, 1, 15),
            TransactionStatus::Completed,
        ),
        WalletTransaction::new(
            "2",
            TransactionKind::Debit,
            2.99,
            "Lab Report Analysis - CBC",
            day(2024, 1, 15),
            TransactionStatus::Completed,
        ),
        WalletTransaction::new(
            "3",
            TransactionKind::Debit,
            1.00,
            "Follow-up Question",
            day(2024, 1, 15),
            TransactionStatus::Completed,
        ),
        WalletTransaction::new(
            "4",
            TransactionKind::Credit,
            10.00,
            "Wallet top-up via PayPal",
            day(2024, 1, 10),
            TransactionStatus::Completed,
        ),
        WalletTransaction::new(
            "5",
            TransactionKind::Debit,
            4.99,
            "Lab Report Analysis - Lipid Panel",
            day(2024, 1, 10),
            TransactionStatus::Completed,
        ),
    ]
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
