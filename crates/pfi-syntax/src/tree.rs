//! A parsed source file: its arena plus the root `SourceFile` node.

use crate::base::{NodeIndex, NodeList};
use crate::node_arena::NodeArena;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SyntaxTree {
    arena: NodeArena,
    root: NodeIndex,
}

impl SyntaxTree {
    pub fn new(arena: NodeArena, root: NodeIndex) -> Self {
        SyntaxTree { arena, root }
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn file_name(&self) -> &str {
        self.arena
            .get_source_file(self.root)
            .map_or("", |sf| sf.file_name.as_str())
    }

    /// Top-level statements, empty if the root is not a source file.
    pub fn statements(&self) -> &[NodeIndex] {
        self.arena
            .get_source_file(self.root)
            .map_or(&[], |sf| sf.statements.nodes.as_slice())
    }

    pub fn into_parts(self) -> (NodeArena, NodeIndex) {
        (self.arena, self.root)
    }

    /// Build a new tree whose statement list is `prefix` followed by the
    /// original statements.
    ///
    /// `build_prefix` allocates the new statements in a copy of the arena;
    /// existing nodes keep their indices, so node-keyed side tables built for
    /// this tree stay valid for the result.
    pub fn with_prepended_statements(
        &self,
        build_prefix: impl FnOnce(&mut NodeArena) -> Vec<NodeIndex>,
    ) -> SyntaxTree {
        let mut arena = self.arena.clone();
        let mut statements = build_prefix(&mut arena);
        statements.extend_from_slice(self.statements());
        arena.update_source_file(self.root, NodeList::from(statements));
        SyntaxTree {
            arena,
            root: self.root,
        }
    }
}
