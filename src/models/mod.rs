pub mod enums;
pub mod message;
pub mod report;
pub mod transaction;
pub mod user;

pub use message::ChatMessage;
pub use report::Report;
pub use transaction::WalletTransaction;
pub use user::User;

/// Errors from model parsing and construction.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
