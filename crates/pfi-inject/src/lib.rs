//! Type-directed polyfill injection.
//!
//! A pass over one file runs in two phases:
//! 1. [`collect`] walks the tree and, for each access to a member named in
//!    the [`ShimRegistry`], asks the [`classify`] step which capability
//!    categories the accessed value's type belongs to.
//! 2. [`rewrite`] prepends one side-effect import per required shim module
//!    that the file does not already import.
//!
//! [`PolyfillInjector`] runs both phases and reports an [`InjectionOutcome`].

pub mod classifier;
pub use classifier::{Category, classify, is_global_type};

pub mod collector;
pub use collector::{RequirementCollector, Requirements, collect};

mod jsonc;

pub mod registry;
pub use registry::{PluginOptions, ShimMap, ShimRegistry};

pub mod rewriter;
pub use rewriter::rewrite;

pub mod injector;
pub use injector::{
    InjectedFile, InjectionOutcome, PolyfillInjector, SourceUnit, inject_polyfills,
};

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;
#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod classifier_tests;
#[cfg(test)]
#[path = "../tests/collector_tests.rs"]
mod collector_tests;
#[cfg(test)]
#[path = "../tests/injector_tests.rs"]
mod injector_tests;
#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod registry_tests;
