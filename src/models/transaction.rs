use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{TransactionKind, TransactionStatus};

/// One line of wallet history, as shown on the wallet page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub status: TransactionStatus,
}

impl WalletTransaction {
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            description: description.into(),
            date,
            status,
        }
    }

    /// Amount with the sign the history list displays: credits
    /// positive, debits negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }
}
