//! WhyLang compiler driver.
//!
//! The binary in `main.rs` only parses arguments; everything it runs lives
//! here so integration tests can reach it.

use std::sync::Once;

pub mod commands;
pub mod problem;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set. `WHYC_LOG_TREE=1` swaps the flat
/// formatter for an indented span tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let tree = std::env::var("WHYC_LOG_TREE").is_ok_and(|v| v != "0");
        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let tree_layer = tree.then(|| {
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(flat_layer)
            .with(tree_layer)
            .init();
    });
}
