//! Type-directed polyfill import injection for TypeScript syntax trees.
//!
//! Given a typed syntax tree and a registry of risky member names, the
//! injector works out which runtime shims the file needs from the types
//! that reach each member access, and prepends one side-effect import per
//! shim:
//!
//! ```text
//! polluting: { "includes": { "Array": "shim/array-includes", "String": "shim/string-includes" } }
//!
//! declare const tags: string | string[];      import "shim/string-includes";
//! tags.includes("x");                    =>   import "shim/array-includes";
//!                                             tags.includes("x");
//! ```
//!
//! The work is split across the workspace crates, re-exported here:
//! - [`syntax`]: arena syntax tree, builders and printer
//! - [`types`]: type model, the [`TypeOracle`] interface and an in-memory
//!   implementation
//! - [`inject`]: registry, classifier, collector, rewriter and the
//!   [`PolyfillInjector`] transform

pub use pfi_inject as inject;
pub use pfi_syntax as syntax;
pub use pfi_types as types;

pub use pfi_inject::{
    InjectedFile, InjectionOutcome, PluginOptions, PolyfillInjector, Requirements, ShimRegistry,
    SourceUnit, classify, collect, inject_polyfills, rewrite,
};
pub use pfi_syntax::{SyntaxTree, print_tree};
pub use pfi_types::{TypeOracle, TypeTable, TypedFile};

pub mod tracing_config;

#[cfg(test)]
#[path = "../tests/pipeline_tests.rs"]
mod pipeline_tests;
#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tracing_config_tests;
