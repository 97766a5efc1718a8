//! Requirement collection.
//!
//! One pre-order walk over a file. Import declarations feed the set of
//! modules the file already loads; property accesses and object
//! destructuring of registered member names are classified and feed the
//! ordered set of shim modules to inject.

use indexmap::IndexSet;
use pfi_syntax::{
    AccessExprData, ImportDeclData, Node, NodeArena, NodeIndex, SyntaxTree, VariableDeclData,
};
use pfi_types::{TypeId, TypeOracle};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::classifier::classify;
use crate::registry::{ShimMap, ShimRegistry};

/// Remaining stack below which the walk switches to a fresh segment.
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each additional stack segment.
const STACK_GROWTH: usize = 1024 * 1024;

/// Result of collecting one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Requirements {
    /// Shim modules to inject, in first-use order.
    pub required: IndexSet<String>,
    /// Modules the file already imports.
    pub dependencies: FxHashSet<String>,
    /// Registered member sites the walk classified.
    pub sites_inspected: u32,
}

impl Requirements {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}

/// Collect the shim modules `tree` needs under `registry`.
pub fn collect(
    tree: &SyntaxTree,
    oracle: &dyn TypeOracle,
    registry: &ShimRegistry,
) -> Requirements {
    RequirementCollector::new(tree.arena(), oracle, registry).run(tree.root())
}

pub struct RequirementCollector<'a> {
    arena: &'a NodeArena,
    oracle: &'a dyn TypeOracle,
    registry: &'a ShimRegistry,
    required: IndexSet<String>,
    dependencies: FxHashSet<String>,
    sites_inspected: u32,
}

impl<'a> RequirementCollector<'a> {
    pub fn new(
        arena: &'a NodeArena,
        oracle: &'a dyn TypeOracle,
        registry: &'a ShimRegistry,
    ) -> Self {
        RequirementCollector {
            arena,
            oracle,
            registry,
            required: IndexSet::new(),
            dependencies: FxHashSet::default(),
            sites_inspected: 0,
        }
    }

    pub fn run(mut self, root: NodeIndex) -> Requirements {
        if !self.registry.is_empty() {
            self.visit(root);
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                root = root.0,
                sites = self.sites_inspected,
                dependencies = self.dependencies.len(),
                "[collect] required shims: {:?}",
                self.required
            );
        }

        Requirements {
            required: self.required,
            dependencies: self.dependencies,
            sites_inspected: self.sites_inspected,
        }
    }

    /// Visit a node, then its children in source order.
    fn visit(&mut self, idx: NodeIndex) {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || self.visit_node(idx));
    }

    fn visit_node(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node {
            Node::ImportDeclaration(import) => self.visit_import_declaration(import),
            Node::PropertyAccessExpression(access) => self.visit_property_access(access),
            Node::VariableDeclaration(decl) => self.visit_variable_declaration(decl),
            _ => {}
        }

        arena.for_each_child(idx, |child| self.visit(child));
    }

    fn visit_import_declaration(&mut self, import: &ImportDeclData) {
        let arena = self.arena;
        let Some(module) = arena.get_string_literal_text(import.module_specifier) else {
            return;
        };
        // Imports are hoisted: one that appears after a use still provides
        // the shim, so it must not be injected again.
        if self.required.shift_remove(module) {
            trace!(module, "[collect] shim already imported later in the file");
        }
        self.dependencies.insert(module.to_string());
    }

    fn visit_property_access(&mut self, access: &AccessExprData) {
        let arena = self.arena;
        let registry = self.registry;
        let Some(member) = arena.get_identifier_text(access.name_or_argument) else {
            return;
        };
        let Some(shims) = registry.get(member) else {
            return;
        };
        let ty = self.oracle.type_of(access.expression);
        self.require_shims(member, shims, ty);
    }

    /// `const { includes, at: first, ...rest } = value;`
    ///
    /// Each element names the member it reads by its property name, or by its
    /// bound identifier when there is none (rest elements included).
    fn visit_variable_declaration(&mut self, decl: &VariableDeclData) {
        let arena = self.arena;
        let registry = self.registry;
        let Some(Node::ObjectBindingPattern(pattern)) = arena.get(decl.name) else {
            return;
        };

        let ty = self.oracle.type_of(decl.initializer);
        for element in pattern.elements.iter() {
            let Some(Node::BindingElement(binding)) = arena.get(element) else {
                continue;
            };
            let member = if binding.property_name.is_some() {
                arena.get_identifier_text(binding.property_name)
            } else {
                arena.get_identifier_text(binding.name)
            };
            let Some(member) = member else {
                continue;
            };
            if let Some(shims) = registry.get(member) {
                self.require_shims(member, shims, ty);
            }
        }
    }

    fn require_shims(&mut self, member: &str, shims: &ShimMap, ty: Option<TypeId>) {
        self.sites_inspected += 1;
        let Some(ty) = ty else {
            trace!(member, "[collect] no type for site");
            return;
        };

        let categories: SmallVec<[&str; 4]> = shims.keys().map(String::as_str).collect();
        for category in classify(self.oracle, ty, &categories) {
            if let Some(module) = shims.get(category) {
                self.require(member, category, module);
            }
        }
    }

    fn require(&mut self, member: &str, category: &str, module: &str) {
        if self.dependencies.contains(module) || self.required.contains(module) {
            return;
        }
        debug!(member, category, module, "[collect] shim required");
        self.required.insert(module.to_string());
    }
}
