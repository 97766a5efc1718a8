//! Node access helpers and child enumeration.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::node_arena::NodeArena;

impl NodeArena {
    /// Text of an `Identifier` node.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match self.get(index)? {
            Node::Identifier(ident) => Some(&ident.escaped_text),
            _ => None,
        }
    }

    /// Text of a string or numeric literal node.
    pub fn get_literal_text(&self, index: NodeIndex) -> Option<&str> {
        match self.get(index)? {
            Node::StringLiteral(lit) | Node::NumericLiteral(lit) => Some(&lit.text),
            _ => None,
        }
    }

    /// Text of a `StringLiteral` node only.
    pub fn get_string_literal_text(&self, index: NodeIndex) -> Option<&str> {
        match self.get(index)? {
            Node::StringLiteral(lit) => Some(&lit.text),
            _ => None,
        }
    }

    pub fn get_source_file(&self, index: NodeIndex) -> Option<&SourceFileData> {
        match self.get(index)? {
            Node::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    /// Visit the direct children of a node in source order.
    ///
    /// Absent optional children (`NodeIndex::NONE`) are skipped.
    pub fn for_each_child(&self, index: NodeIndex, mut f: impl FnMut(NodeIndex)) {
        let Some(node) = self.get(index) else {
            return;
        };

        let mut opt = |idx: NodeIndex| {
            if idx.is_some() {
                f(idx);
            }
        };

        match node {
            Node::SourceFile(sf) => visit_list(&sf.statements, &mut opt),
            Node::ComputedPropertyName(c) => opt(c.expression),
            Node::ImportDeclaration(decl) => {
                opt(decl.import_clause);
                opt(decl.module_specifier);
            }
            Node::ImportClause(clause) => {
                opt(clause.name);
                opt(clause.named_bindings);
            }
            Node::NamespaceImport(ns) => opt(ns.name),
            Node::NamedImports(named) => visit_list(&named.elements, &mut opt),
            Node::ImportSpecifier(spec) => {
                opt(spec.property_name);
                opt(spec.name);
            }
            Node::VariableStatement(stmt) => opt(stmt.declaration_list),
            Node::VariableDeclarationList(list) => visit_list(&list.declarations, &mut opt),
            Node::VariableDeclaration(decl) => {
                opt(decl.name);
                opt(decl.initializer);
            }
            Node::ExpressionStatement(stmt) => opt(stmt.expression),
            Node::Block(block) => visit_list(&block.statements, &mut opt),
            Node::ReturnStatement(stmt) => opt(stmt.expression),
            Node::IfStatement(stmt) => {
                opt(stmt.expression);
                opt(stmt.then_statement);
                opt(stmt.else_statement);
            }
            Node::FunctionDeclaration(func) | Node::ArrowFunction(func) => {
                opt(func.name);
                visit_list(&func.parameters, &mut opt);
                opt(func.body);
            }
            Node::ObjectBindingPattern(pattern) | Node::ArrayBindingPattern(pattern) => {
                visit_list(&pattern.elements, &mut opt);
            }
            Node::BindingElement(elem) => {
                opt(elem.property_name);
                opt(elem.name);
                opt(elem.initializer);
            }
            Node::Parameter(param) => {
                opt(param.name);
                opt(param.initializer);
            }
            Node::PropertyAccessExpression(access) | Node::ElementAccessExpression(access) => {
                opt(access.expression);
                opt(access.name_or_argument);
            }
            Node::CallExpression(call) | Node::NewExpression(call) => {
                opt(call.expression);
                visit_list(&call.arguments, &mut opt);
            }
            Node::ParenthesizedExpression(paren) => opt(paren.expression),
            Node::BinaryExpression(bin) => {
                opt(bin.left);
                opt(bin.right);
            }
            Node::ArrayLiteralExpression(arr) => visit_list(&arr.elements, &mut opt),
            Node::ObjectLiteralExpression(obj) => visit_list(&obj.properties, &mut opt),
            Node::PropertyAssignment(prop) => {
                opt(prop.name);
                opt(prop.initializer);
            }
            Node::Other(other) => visit_list(&other.children, &mut opt),
            Node::Identifier(_) | Node::StringLiteral(_) | Node::NumericLiteral(_) => {}
        }
    }

    /// Collect the direct children of a node in source order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        self.for_each_child(index, |child| children.push(child));
        children
    }
}

fn visit_list(list: &NodeList, f: &mut impl FnMut(NodeIndex)) {
    for idx in list.iter() {
        f(idx);
    }
}
