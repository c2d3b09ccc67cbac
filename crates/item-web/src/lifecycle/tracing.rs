//! # Observability & Tracing
//!
//! Structured logging setup for the whole process. The store actor logs
//! every operation with structured fields (`id`, `size`, `found`), the
//! handlers log render/redirect decisions, and `RUST_LOG` controls the
//! level:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads (drafts, patches)
//! ```

/// Initializes the tracing subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; the fields carry the context
        .compact()
        .init();
}
