use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(UserRole {
    Patient => "Patient",
    Doctor => "Doctor",
});

str_enum!(ReportStatus {
    Processing => "processing",
    Completed => "completed",
    Failed => "failed",
});

str_enum!(MessageSender {
    User => "user",
    Assistant => "assistant",
});

str_enum!(LabStatus {
    Normal => "normal",
    High => "high",
    Low => "low",
});

str_enum!(TransactionKind {
    Credit => "credit",
    Debit => "debit",
});

str_enum!(TransactionStatus {
    Completed => "completed",
    Pending => "pending",
});

impl ReportStatus {
    /// Badge color token for this status. Every view renders from this
    /// one mapping instead of re-deriving its own.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Completed => "green",
            Self::Processing => "blue",
            Self::Failed => "red",
        }
    }

    /// Badge icon glyph for this status.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::Processing => "⏳",
            Self::Failed => "✗",
        }
    }
}

impl LabStatus {
    /// Badge color token: high flags red, low flags yellow.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Normal => "green",
            Self::High => "red",
            Self::Low => "yellow",
        }
    }
}
