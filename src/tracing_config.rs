//! Tracing configuration for inspecting resolution runs.
//!
//! Supports three output formats controlled by `JSSCOPE_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, one level per
//!   scope the resolver enters
//! - `json`: One JSON object per span/event
//!
//! ## What a resolution trace contains
//!
//! - `resolve_program` span (debug): one per run, with the top-level
//!   statement count. A final `resolved program` event carries the run
//!   summary.
//! - `scope` span (debug): one per scope the main pass opens, with the scope
//!   id, kind and mark. `binding conflict` events are emitted inside it.
//! - `hoist` span (trace): one per function-level pre-pass, with the scope id
//!   and strictness.
//! - `declare` events (trace): name, declaration kind, resulting mark and
//!   scope id for every binding written.
//! - `lookup` events (trace): name, the mark found (`#0` when unresolved)
//!   and the scope the lookup started from.
//!
//! ## Quick start
//!
//! ```bash
//! # Scope push/pop and conflicts as an indented tree
//! JSSCOPE_LOG=debug JSSCOPE_LOG_FORMAT=tree cargo test -p jsscope-resolver
//!
//! # Every declare and lookup
//! JSSCOPE_LOG="jsscope_resolver=trace" JSSCOPE_LOG_FORMAT=json cargo bench
//! ```
//!
//! The subscriber is only initialised when `JSSCOPE_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead otherwise.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "JSSCOPE_LOG";
const LOG_FORMAT_VAR: &str = "JSSCOPE_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_VAR).unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `JSSCOPE_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_VAR) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `JSSCOPE_LOG` nor `RUST_LOG` is set. Output goes
/// to stderr. Calling it again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let has_own_log = std::env::var(LOG_VAR).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    // A subscriber installed earlier wins.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
