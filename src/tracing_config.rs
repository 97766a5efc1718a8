//! Tracing setup for hosts that want to see what the injector decides.
//!
//! Output format is chosen by `PFI_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented span tree via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! # Which shims were required, and why
//! PFI_LOG=pfi_inject=debug PFI_LOG_FORMAT=tree my-bundler build
//!
//! # Every classified site, including unresolved receivers
//! PFI_LOG=pfi_inject::collector=trace my-bundler build
//! ```
//!
//! Nothing is installed unless `PFI_LOG` or `RUST_LOG` is set.

use anyhow::{Result, anyhow};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "PFI_LOG";
const FORMAT_VAR: &str = "PFI_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Case-insensitive; unknown values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var(FORMAT_VAR).map_or(Self::Text, |value| Self::parse(&value))
    }
}

/// `PFI_LOG` wins over `RUST_LOG`; both use `RUST_LOG` directive syntax.
fn build_filter() -> Option<EnvFilter> {
    match std::env::var(LOG_VAR) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() => {
            Some(EnvFilter::from_default_env())
        }
        Err(_) => None,
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `Ok(false)` without installing anything when no log variable is
/// set, and an error when another global subscriber is already installed.
pub fn init_tracing() -> Result<bool> {
    let Some(filter) = build_filter() else {
        return Ok(false);
    };

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;
        }
    }

    Ok(true)
}
