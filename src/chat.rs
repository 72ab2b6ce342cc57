//! Metered follow-up chat for the interpretation session.
//!
//! Builds on top of:
//! - `IdentityStore` (billing guard + wallet debit)
//! - `WorkspaceStore` (transcript + free-question counter)
//!
//! This module adds:
//! - The billing guard for sending a question
//! - The simulated assistant reply (fixed delay, canned content)
//! - Example questions for the empty transcript state

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_state::StateError;
use crate::identity::IdentityStore;
use crate::models::enums::{MessageSender, UserRole};
use crate::models::ChatMessage;
use crate::wallet::QUESTION_PRICE;
use crate::workspace::WorkspaceStore;

/// Delay before the simulated assistant reply lands.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

// ═══════════════════════════════════════════
// Billing
// ═══════════════════════════════════════════

/// How a sent question was paid for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionCharge {
    /// Consumed one free question; `remaining` is the count left
    /// after the decrement.
    FreeQuestion { remaining: u32 },
    /// Debited the wallet by the question price.
    WalletDebit { amount: f64 },
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Cannot send an empty message")]
    EmptyMessage,

    #[error("You need at least $1.00 to ask additional questions (current balance: ${balance:.2})")]
    InsufficientBalance { balance: f64 },

    #[error(transparent)]
    State(#[from] StateError),
}

/// Append a user question to the transcript and charge for it.
///
/// The billing check runs before anything is appended, so a blocked
/// question leaves the transcript untouched. The guard fires only
/// when the free quota is spent AND a signed-in user's balance is
/// under the question price; anonymous sessions are never blocked and
/// their debit is a store-level no-op.
pub fn send_question(
    identity: &IdentityStore,
    workspace: &WorkspaceStore,
    text: &str,
) -> Result<QuestionCharge, ChatError> {
    if text.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    let free = workspace.free_questions()?;
    if free == 0 {
        if let Some(balance) = identity.wallet_balance()? {
            if balance < QUESTION_PRICE {
                tracing::info!(balance, "Question blocked: insufficient balance");
                return Err(ChatError::InsufficientBalance { balance });
            }
        }
    }

    workspace.add_chat_message(text, MessageSender::User)?;

    let charge = if free > 0 {
        let remaining = workspace.decrement_free_questions()?;
        QuestionCharge::FreeQuestion { remaining }
    } else {
        identity.update_wallet_balance(-QUESTION_PRICE)?;
        QuestionCharge::WalletDebit {
            amount: QUESTION_PRICE,
        }
    };

    tracing::debug!(charge = ?charge, "Question charged");
    Ok(charge)
}

/// Wait out the reply delay, then append and return the canned
/// assistant response for the question. Pass `REPLY_DELAY` for the
/// widget's timing; tests inject something shorter.
pub async fn simulated_reply(
    identity: &IdentityStore,
    workspace: &WorkspaceStore,
    question: &str,
    delay: Duration,
) -> Result<ChatMessage, ChatError> {
    tokio::time::sleep(delay).await;

    let role = identity.current_user()?.map(|user| user.role);
    let response = canned_response(question, role.as_ref());
    Ok(workspace.add_chat_message(response, MessageSender::Assistant)?)
}

// ═══════════════════════════════════════════
// Canned content
// ═══════════════════════════════════════════

/// Select the canned response for a question by keyword, tailored to
/// the reader's role. Anonymous sessions read the patient version.
pub fn canned_response(question: &str, role: Option<&UserRole>) -> &'static str {
    let doctor = matches!(role, Some(UserRole::Doctor));
    let question = question.to_lowercase();

    if question.contains("hemoglobin") || question.contains("anemia") {
        if doctor {
            "The hemoglobin level of 12.5 g/dL is within normal range (12.0-15.5 g/dL) for this demographic. No evidence of anemia. Consider trending if patient reports fatigue or other symptoms."
        } else {
            "Your hemoglobin level is normal! This means your blood is carrying oxygen well throughout your body. Hemoglobin helps deliver oxygen from your lungs to the rest of your body."
        }
    } else if question.contains("white blood") || question.contains("infection") {
        if doctor {
            "WBC count of 8.5K/μL is within normal limits (4.0-11.0K/μL). No evidence of active infection or immunosuppression. Normal neutrophil-to-lymphocyte ratio would require differential analysis."
        } else {
            "Your white blood cell count is in the healthy range! These cells help fight infections, and your levels suggest your immune system is working normally."
        }
    } else if question.contains("platelet") || question.contains("bleeding") {
        if doctor {
            "Platelet count of 350K/μL is adequate for hemostasis (normal range 150-450K/μL). No bleeding risk indicated. Patient can proceed with routine procedures without coagulation concerns."
        } else {
            "Your platelet count looks great! Platelets help your blood clot when you get a cut or injury, and your levels are perfectly normal for this function."
        }
    } else if doctor {
        "Based on the CBC results, all parameters are within normal limits. The patient shows no evidence of hematologic abnormalities. Consider clinical correlation with presenting symptoms."
    } else {
        "Your overall blood test results are normal and healthy. If you have specific concerns about any symptoms, it's best to discuss them with your healthcare provider."
    }
}

/// The three prompts offered over an empty transcript.
pub fn example_questions() -> [&'static str; 3] {
    [
        "What does my hemoglobin level mean?",
        "Are my white blood cells normal?",
        "Should I be concerned about anything?",
    ]
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
