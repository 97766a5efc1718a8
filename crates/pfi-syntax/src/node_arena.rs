//! Node arena storage and node creation methods.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use serde::Serialize;

/// Arena-based storage for AST nodes.
/// Nodes are stored contiguously and referenced by index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the arena and return its index
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Replace a node at the given index.
    /// Returns the old node if successful.
    pub fn replace(&mut self, index: NodeIndex, new_node: Node) -> Option<Node> {
        self.get_mut(index)
            .map(|old| std::mem::replace(old, new_node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Leaf nodes
    // =========================================================================

    pub fn add_identifier(&mut self, text: impl Into<String>) -> NodeIndex {
        self.add(Node::Identifier(IdentifierData {
            escaped_text: text.into(),
        }))
    }

    pub fn add_string_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        self.add(Node::StringLiteral(LiteralData { text: text.into() }))
    }

    pub fn add_numeric_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        self.add(Node::NumericLiteral(LiteralData { text: text.into() }))
    }

    pub fn add_computed_property_name(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(Node::ComputedPropertyName(ComputedPropertyData { expression }))
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// `import "module";`
    pub fn add_side_effect_import(&mut self, module: impl Into<String>) -> NodeIndex {
        let module_specifier = self.add_string_literal(module);
        self.add(Node::ImportDeclaration(ImportDeclData {
            import_clause: NodeIndex::NONE,
            module_specifier,
        }))
    }

    /// `import { a, b as c } from "module";`
    ///
    /// Each specifier is `(imported, local)`; `local == None` imports under the same name.
    pub fn add_named_import(
        &mut self,
        specifiers: &[(&str, Option<&str>)],
        module: impl Into<String>,
    ) -> NodeIndex {
        let elements: NodeList = specifiers
            .iter()
            .map(|(imported, local)| {
                let (property_name, name) = match local {
                    Some(local) => (self.add_identifier(*imported), self.add_identifier(*local)),
                    None => (NodeIndex::NONE, self.add_identifier(*imported)),
                };
                self.add(Node::ImportSpecifier(SpecifierData {
                    property_name,
                    name,
                }))
            })
            .collect();
        let named_bindings = self.add(Node::NamedImports(NamedImportsData { elements }));
        let import_clause = self.add(Node::ImportClause(ImportClauseData {
            is_type_only: false,
            name: NodeIndex::NONE,
            named_bindings,
        }));
        let module_specifier = self.add_string_literal(module);
        self.add(Node::ImportDeclaration(ImportDeclData {
            import_clause,
            module_specifier,
        }))
    }

    /// `import * as name from "module";`
    pub fn add_namespace_import(
        &mut self,
        name: impl Into<String>,
        module: impl Into<String>,
    ) -> NodeIndex {
        let name = self.add_identifier(name);
        let named_bindings = self.add(Node::NamespaceImport(NamespaceImportData { name }));
        let import_clause = self.add(Node::ImportClause(ImportClauseData {
            is_type_only: false,
            name: NodeIndex::NONE,
            named_bindings,
        }));
        let module_specifier = self.add_string_literal(module);
        self.add(Node::ImportDeclaration(ImportDeclData {
            import_clause,
            module_specifier,
        }))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn add_source_file(
        &mut self,
        file_name: impl Into<String>,
        statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add(Node::SourceFile(SourceFileData {
            file_name: file_name.into(),
            statements: NodeList::from(statements),
        }))
    }

    /// `<flags> <name> = <initializer>;` with a single declarator.
    pub fn add_variable_statement(
        &mut self,
        flags: u16,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let declaration = self.add(Node::VariableDeclaration(VariableDeclData {
            name,
            initializer,
        }));
        let declaration_list = self.add(Node::VariableDeclarationList(VariableDeclListData {
            flags,
            declarations: NodeList::from(vec![declaration]),
        }));
        self.add(Node::VariableStatement(VariableStatementData {
            declaration_list,
        }))
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(Node::ExpressionStatement(ExprStatementData { expression }))
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::Block(BlockData {
            statements: NodeList::from(statements),
        }))
    }

    /// A statement kind without its own variant, e.g. `ForOfStatement`.
    pub fn add_other_statement(
        &mut self,
        kind: impl Into<String>,
        children: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add(Node::Other(OtherData {
            kind: kind.into(),
            is_statement: true,
            children: NodeList::from(children),
        }))
    }

    /// A non-statement kind without its own variant, e.g. `MethodDeclaration`
    /// or `TemplateExpression`.
    pub fn add_other(&mut self, kind: impl Into<String>, children: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::Other(OtherData {
            kind: kind.into(),
            is_statement: false,
            children: NodeList::from(children),
        }))
    }

    pub fn add_return(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(Node::ReturnStatement(ReturnData { expression }))
    }

    pub fn add_if(
        &mut self,
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    ) -> NodeIndex {
        self.add(Node::IfStatement(IfStatementData {
            expression,
            then_statement,
            else_statement,
        }))
    }

    pub fn add_function_declaration(
        &mut self,
        name: impl Into<String>,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        let name = self.add_identifier(name);
        self.add(Node::FunctionDeclaration(FunctionData {
            name,
            parameters: NodeList::from(parameters),
            body,
        }))
    }

    pub fn add_arrow_function(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.add(Node::ArrowFunction(FunctionData {
            name: NodeIndex::NONE,
            parameters: NodeList::from(parameters),
            body,
        }))
    }

    pub fn add_parameter(&mut self, name: NodeIndex) -> NodeIndex {
        self.add(Node::Parameter(ParameterData {
            dot_dot_dot_token: false,
            name,
            initializer: NodeIndex::NONE,
        }))
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    pub fn add_object_binding_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::ObjectBindingPattern(BindingPatternData {
            elements: NodeList::from(elements),
        }))
    }

    pub fn add_array_binding_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::ArrayBindingPattern(BindingPatternData {
            elements: NodeList::from(elements),
        }))
    }

    /// `{ name }` shorthand binding element.
    pub fn add_binding_element(&mut self, name: impl Into<String>) -> NodeIndex {
        let name = self.add_identifier(name);
        self.add(Node::BindingElement(BindingElementData {
            dot_dot_dot_token: false,
            property_name: NodeIndex::NONE,
            name,
            initializer: NodeIndex::NONE,
        }))
    }

    /// `{ property_name: name }` renaming binding element.
    pub fn add_renamed_binding_element(
        &mut self,
        property_name: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.add(Node::BindingElement(BindingElementData {
            dot_dot_dot_token: false,
            property_name,
            name,
            initializer: NodeIndex::NONE,
        }))
    }

    /// `{ ...name }`
    pub fn add_rest_binding_element(&mut self, name: impl Into<String>) -> NodeIndex {
        let name = self.add_identifier(name);
        self.add(Node::BindingElement(BindingElementData {
            dot_dot_dot_token: true,
            property_name: NodeIndex::NONE,
            name,
            initializer: NodeIndex::NONE,
        }))
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// `expression.name`
    pub fn add_property_access(
        &mut self,
        expression: NodeIndex,
        name: impl Into<String>,
    ) -> NodeIndex {
        let name = self.add_identifier(name);
        self.add(Node::PropertyAccessExpression(AccessExprData {
            expression,
            name_or_argument: name,
            question_dot_token: false,
        }))
    }

    /// `expression?.name`
    pub fn add_optional_property_access(
        &mut self,
        expression: NodeIndex,
        name: impl Into<String>,
    ) -> NodeIndex {
        let name = self.add_identifier(name);
        self.add(Node::PropertyAccessExpression(AccessExprData {
            expression,
            name_or_argument: name,
            question_dot_token: true,
        }))
    }

    /// `expression[argument]`
    pub fn add_element_access(&mut self, expression: NodeIndex, argument: NodeIndex) -> NodeIndex {
        self.add(Node::ElementAccessExpression(AccessExprData {
            expression,
            name_or_argument: argument,
            question_dot_token: false,
        }))
    }

    pub fn add_call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::CallExpression(CallExprData {
            expression,
            arguments: NodeList::from(arguments),
        }))
    }

    pub fn add_new(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::NewExpression(CallExprData {
            expression,
            arguments: NodeList::from(arguments),
        }))
    }

    pub fn add_parenthesized(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(Node::ParenthesizedExpression(ParenthesizedData { expression }))
    }

    pub fn add_binary(
        &mut self,
        left: NodeIndex,
        operator: impl Into<String>,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add(Node::BinaryExpression(BinaryExprData {
            left,
            operator: operator.into(),
            right,
        }))
    }

    pub fn add_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::ArrayLiteralExpression(ArrayLiteralData {
            elements: NodeList::from(elements),
        }))
    }

    pub fn add_object_literal(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        self.add(Node::ObjectLiteralExpression(ObjectLiteralData {
            properties: NodeList::from(properties),
        }))
    }

    pub fn add_property_assignment(
        &mut self,
        name: impl Into<String>,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let name = self.add_identifier(name);
        self.add(Node::PropertyAssignment(PropertyAssignmentData {
            name,
            initializer,
        }))
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Replace the statement list of a source file node.
    ///
    /// Returns `false` when `source_file` is not a `SourceFile`.
    pub fn update_source_file(&mut self, source_file: NodeIndex, statements: NodeList) -> bool {
        match self.get_mut(source_file) {
            Some(Node::SourceFile(data)) => {
                data.statements = statements;
                true
            }
            _ => false,
        }
    }
}
