//! The per-file transform and its parallel batch form.

use pfi_syntax::SyntaxTree;
use pfi_types::TypeOracle;
use rayon::prelude::*;
use std::borrow::Cow;
use tracing::debug;

use crate::collector::collect;
use crate::registry::{PluginOptions, ShimRegistry};
use crate::rewriter::rewrite;

/// What one pass did to one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InjectionOutcome {
    pub file_name: String,
    /// Injected modules, in the order they were prepended.
    pub injected: Vec<String>,
    pub sites_inspected: u32,
}

impl InjectionOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.injected.is_empty()
    }
}

/// A transformed file paired with its outcome.
#[derive(Clone, Debug)]
pub struct InjectedFile<'t> {
    pub tree: Cow<'t, SyntaxTree>,
    pub outcome: InjectionOutcome,
}

/// One file of a batch: its tree and the oracle typing it.
#[derive(Clone, Copy, Debug)]
pub struct SourceUnit<'t, O> {
    pub tree: &'t SyntaxTree,
    pub oracle: O,
}

/// Injects shim imports into files, one independent pass per file.
#[derive(Clone, Debug, Default)]
pub struct PolyfillInjector {
    registry: ShimRegistry,
}

impl PolyfillInjector {
    pub fn new(registry: ShimRegistry) -> Self {
        PolyfillInjector { registry }
    }

    pub fn from_options(options: PluginOptions) -> Self {
        Self::new(options.polluting)
    }

    pub fn registry(&self) -> &ShimRegistry {
        &self.registry
    }

    /// Return `tree` with the shim imports it needs prepended, or `tree`
    /// itself when it needs none.
    pub fn transform<'t>(
        &self,
        tree: &'t SyntaxTree,
        oracle: &dyn TypeOracle,
    ) -> Cow<'t, SyntaxTree> {
        self.transform_with_outcome(tree, oracle).tree
    }

    pub fn transform_with_outcome<'t>(
        &self,
        tree: &'t SyntaxTree,
        oracle: &dyn TypeOracle,
    ) -> InjectedFile<'t> {
        let requirements = collect(tree, oracle, &self.registry);
        let rewritten = rewrite(tree, &requirements.required);

        let outcome = InjectionOutcome {
            file_name: tree.file_name().to_string(),
            injected: requirements.required.into_iter().collect(),
            sites_inspected: requirements.sites_inspected,
        };
        debug!(
            file = %outcome.file_name,
            sites = outcome.sites_inspected,
            injected = outcome.injected.len(),
            "[inject] pass complete"
        );

        InjectedFile {
            tree: rewritten,
            outcome,
        }
    }

    /// Transform every unit in parallel. Results keep input order.
    pub fn inject_all<'t, O>(&self, units: &[SourceUnit<'t, O>]) -> Vec<InjectedFile<'t>>
    where
        O: TypeOracle + Sync,
    {
        units
            .par_iter()
            .map(|unit| self.transform_with_outcome(unit.tree, &unit.oracle))
            .collect()
    }
}

/// Single-call form of [`PolyfillInjector::transform`].
pub fn inject_polyfills<'t>(
    tree: &'t SyntaxTree,
    oracle: &dyn TypeOracle,
    registry: &ShimRegistry,
) -> Cow<'t, SyntaxTree> {
    let requirements = collect(tree, oracle, registry);
    rewrite(tree, &requirements.required)
}
