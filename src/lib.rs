//! Session core of the MedLab AI lab-report interpretation prototype:
//! identity and workspace stores, upload validation, the simulated
//! processing pipeline, and the metered follow-up chat. Everything is
//! in-memory; an embedding shell owns the `AppState` it hands around.

pub mod account; // settings screen validations
pub mod app_state; // injected state container
pub mod chat; // metered follow-up chat
pub mod config;
pub mod identity; // auth session + wallet balance
pub mod interpretation; // role-tailored reading + PDF export stub
pub mod models;
pub mod pipeline; // simulated report processing
pub mod review; // lab value review table
pub mod upload; // report upload validation
pub mod wallet; // pricing + top-ups
pub mod workspace; // report bank, transcript, free questions

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding shell or example runner.
/// `RUST_LOG` overrides the built-in default filter. Call once.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}
