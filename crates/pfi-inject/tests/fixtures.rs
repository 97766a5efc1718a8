//! Builders shared by the injector tests.

use crate::ShimRegistry;
use pfi_syntax::{NodeArena, NodeIndex, SyntaxTree, node_flags};
use pfi_types::{FileId, NodeTypes, SymbolFlags, SymbolId, TypeId, TypeTable};

/// Registry used by the bundler integration tests of the tool.
pub(crate) const SKY_CORE_REGISTRY: &str = r#"{
    "at": {
        "Array": "sky-core/polyfill/Array/prototype/at",
        "String": "sky-core/polyfill/String/prototype/at"
    },
    "includes": {
        "Array": "sky-core/polyfill/Array/prototype/includes",
        "String": "sky-core/polyfill/String/prototype/includes"
    },
    "name": { "Function": "sky-core/polyfill/Function/prototype/name" },
    "finally": { "Promise": "sky-core/polyfill/Promise/prototype/finally" },
    "toJSON": { "Date": "sky-core/polyfill/Date/prototype/toJSON" }
}"#;

pub(crate) fn sky_core_registry() -> ShimRegistry {
    ShimRegistry::from_json_str(SKY_CORE_REGISTRY).unwrap()
}

/// `{ includes: { Array: "A", String: "S" } }`
pub(crate) fn includes_registry() -> ShimRegistry {
    ShimRegistry::new()
        .with_shim("includes", "Array", "A")
        .with_shim("includes", "String", "S")
}

/// A program with a default library file declaring the usual globals and
/// one user file.
pub(crate) struct Program {
    pub table: TypeTable,
    pub lib_file: FileId,
    pub user_file: FileId,
    pub array: SymbolId,
    pub string_object: SymbolId,
    pub promise: SymbolId,
    pub date: SymbolId,
}

impl Program {
    pub(crate) fn new() -> Self {
        let mut table = TypeTable::new();
        let lib_file = table.add_file("lib.es2015.d.ts", true);
        let user_file = table.add_file("main.ts", false);
        let array = table.declare("Array", SymbolFlags::INTERFACE, lib_file);
        let string_object = table.declare("String", SymbolFlags::INTERFACE, lib_file);
        let promise = table.declare("Promise", SymbolFlags::INTERFACE, lib_file);
        let date = table.declare("Date", SymbolFlags::INTERFACE, lib_file);
        Program {
            table,
            lib_file,
            user_file,
            array,
            string_object,
            promise,
            date,
        }
    }

    pub(crate) fn array_of(&mut self, element: TypeId) -> TypeId {
        self.table.reference(self.array, &[element])
    }

    pub(crate) fn string_object(&mut self) -> TypeId {
        self.table.reference(self.string_object, &[])
    }

    pub(crate) fn promise_of(&mut self, value: TypeId) -> TypeId {
        self.table.reference(self.promise, &[value])
    }

    pub(crate) fn date(&mut self) -> TypeId {
        self.table.reference(self.date, &[])
    }

    /// A class declared in the user file with the given supertypes.
    pub(crate) fn class(&mut self, name: &str, bases: Vec<TypeId>) -> TypeId {
        let symbol = self.table.declare(name, SymbolFlags::CLASS, self.user_file);
        self.table.set_symbol_base_types(symbol, bases);
        self.table.reference(symbol, &[])
    }

    /// Type of a function declared in the user file.
    pub(crate) fn function(&mut self, name: &str, flags: SymbolFlags) -> TypeId {
        let symbol = self.table.declare(name, flags, self.user_file);
        self.table.reference(symbol, &[])
    }
}

/// Builds a source file statement by statement, recording expression types
/// as it goes.
pub(crate) struct FileBuilder {
    pub arena: NodeArena,
    pub statements: Vec<NodeIndex>,
    pub types: NodeTypes,
}

impl FileBuilder {
    pub(crate) fn new() -> Self {
        FileBuilder {
            arena: NodeArena::new(),
            statements: Vec::new(),
            types: NodeTypes::new(),
        }
    }

    /// Identifier expression, typed when `ty` is given.
    pub(crate) fn ident(&mut self, name: &str, ty: Option<TypeId>) -> NodeIndex {
        let idx = self.arena.add_identifier(name);
        if let Some(ty) = ty {
            self.types.set(idx, ty);
        }
        idx
    }

    pub(crate) fn import(&mut self, module: &str) -> NodeIndex {
        let stmt = self.arena.add_side_effect_import(module);
        self.statements.push(stmt);
        stmt
    }

    /// `receiver.member();` Returns the statement.
    pub(crate) fn call_member(
        &mut self,
        receiver: &str,
        ty: Option<TypeId>,
        member: &str,
    ) -> NodeIndex {
        let target = self.ident(receiver, ty);
        let access = self.arena.add_property_access(target, member);
        let call = self.arena.add_call(access, vec![]);
        let stmt = self.arena.add_expression_statement(call);
        self.statements.push(stmt);
        stmt
    }

    /// `const { <elements> } = init;` with `init` typed as `ty`.
    pub(crate) fn destructure(
        &mut self,
        elements: Vec<NodeIndex>,
        init: &str,
        ty: Option<TypeId>,
    ) -> NodeIndex {
        let pattern = self.arena.add_object_binding_pattern(elements);
        let initializer = self.ident(init, ty);
        let stmt = self
            .arena
            .add_variable_statement(node_flags::CONST, pattern, initializer);
        self.statements.push(stmt);
        stmt
    }

    pub(crate) fn push(&mut self, stmt: NodeIndex) {
        self.statements.push(stmt);
    }

    pub(crate) fn finish(mut self, file_name: &str) -> (SyntaxTree, NodeTypes) {
        let root = self.arena.add_source_file(file_name, self.statements);
        (SyntaxTree::new(self.arena, root), self.types)
    }
}

/// Module specifiers of the leading side-effect imports of `tree`.
pub(crate) fn leading_imports(tree: &SyntaxTree) -> Vec<String> {
    let arena = tree.arena();
    tree.statements()
        .iter()
        .map_while(|&stmt| match arena.get(stmt) {
            Some(pfi_syntax::Node::ImportDeclaration(import)) => arena
                .get_string_literal_text(import.module_specifier)
                .map(str::to_string),
            _ => None,
        })
        .collect()
}
