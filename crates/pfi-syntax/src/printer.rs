//! JavaScript printer for the arena tree.
//!
//! Produces one statement per line with four-space indentation. The output is
//! meant for checking transform results as text, not for source maps or
//! comment preservation. Kinds without a dedicated variant print as their kind
//! name followed by their children.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::node_arena::NodeArena;
use crate::tree::SyntaxTree;

pub struct Printer<'a> {
    arena: &'a NodeArena,
    output: String,
    indent: u32,
}

/// Print a whole tree.
pub fn print_tree(tree: &SyntaxTree) -> String {
    let mut printer = Printer::new(tree.arena());
    printer.emit_statement(tree.root());
    printer.finish()
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        Printer {
            arena,
            output: String::new(),
            indent: 0,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn emit_statement(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node {
            Node::SourceFile(sf) => {
                for stmt in sf.statements.iter() {
                    self.emit_statement(stmt);
                }
            }
            Node::ImportDeclaration(decl) => {
                self.write_indent();
                self.write("import ");
                if decl.import_clause.is_some() {
                    self.emit_node(decl.import_clause);
                    self.write(" from ");
                }
                self.emit_node(decl.module_specifier);
                self.write(";\n");
            }
            Node::VariableStatement(stmt) => {
                self.write_indent();
                self.emit_node(stmt.declaration_list);
                self.write(";\n");
            }
            Node::ExpressionStatement(stmt) => {
                self.write_indent();
                self.emit_node(stmt.expression);
                self.write(";\n");
            }
            Node::ReturnStatement(stmt) => {
                self.write_indent();
                self.write("return");
                if stmt.expression.is_some() {
                    self.write(" ");
                    self.emit_node(stmt.expression);
                }
                self.write(";\n");
            }
            Node::Block(_) => {
                self.write_indent();
                self.emit_block(idx);
                self.write("\n");
            }
            Node::IfStatement(stmt) => {
                self.write_indent();
                self.write("if (");
                self.emit_node(stmt.expression);
                self.write(") ");
                self.emit_block(stmt.then_statement);
                if stmt.else_statement.is_some() {
                    self.write(" else ");
                    self.emit_block(stmt.else_statement);
                }
                self.write("\n");
            }
            Node::FunctionDeclaration(func) => {
                self.write_indent();
                self.write("function ");
                self.emit_node(func.name);
                self.emit_parameters(&func.parameters);
                self.write(" ");
                self.emit_block(func.body);
                self.write("\n");
            }
            Node::Other(other) if other.is_statement => {
                self.write_indent();
                self.write(&other.kind);
                self.write(" {\n");
                self.indent += 1;
                for child in other.children.iter() {
                    self.emit_statement(child);
                }
                self.indent -= 1;
                self.write_indent();
                self.write("}\n");
            }
            _ => {
                self.write_indent();
                self.emit_node(idx);
                self.write(";\n");
            }
        }
    }

    /// Emit `{ ... }` for a block, or wrap a single statement in braces.
    fn emit_block(&mut self, idx: NodeIndex) {
        self.write("{\n");
        self.indent += 1;
        let arena = self.arena;
        match arena.get(idx) {
            Some(Node::Block(block)) => {
                for stmt in block.statements.iter() {
                    self.emit_statement(stmt);
                }
            }
            Some(_) => self.emit_statement(idx),
            None => {}
        }
        self.indent -= 1;
        self.write_indent();
        self.write("}");
    }

    // =========================================================================
    // Expressions and fragments
    // =========================================================================

    pub fn emit_node(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node {
            Node::Identifier(ident) => self.write(&ident.escaped_text),
            Node::StringLiteral(lit) => self.emit_string_literal(&lit.text),
            Node::NumericLiteral(lit) => self.write(&lit.text),
            Node::ComputedPropertyName(c) => {
                self.write("[");
                self.emit_node(c.expression);
                self.write("]");
            }
            Node::ImportClause(clause) => {
                if clause.is_type_only {
                    self.write("type ");
                }
                self.emit_node(clause.name);
                if clause.name.is_some() && clause.named_bindings.is_some() {
                    self.write(", ");
                }
                self.emit_node(clause.named_bindings);
            }
            Node::NamespaceImport(ns) => {
                self.write("* as ");
                self.emit_node(ns.name);
            }
            Node::NamedImports(named) => {
                self.write("{ ");
                self.emit_comma_list(&named.elements);
                self.write(" }");
            }
            Node::ImportSpecifier(spec) => {
                if spec.property_name.is_some() {
                    self.emit_node(spec.property_name);
                    self.write(" as ");
                }
                self.emit_node(spec.name);
            }
            Node::VariableDeclarationList(list) => {
                let keyword = if list.flags & node_flags::CONST != 0 {
                    "const "
                } else if list.flags & node_flags::LET != 0 {
                    "let "
                } else {
                    "var "
                };
                self.write(keyword);
                self.emit_comma_list(&list.declarations);
            }
            Node::VariableDeclaration(decl) => {
                self.emit_node(decl.name);
                if decl.initializer.is_some() {
                    self.write(" = ");
                    self.emit_node(decl.initializer);
                }
            }
            Node::ObjectBindingPattern(pattern) => {
                if pattern.elements.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.emit_comma_list(&pattern.elements);
                    self.write(" }");
                }
            }
            Node::ArrayBindingPattern(pattern) => {
                self.write("[");
                self.emit_comma_list(&pattern.elements);
                self.write("]");
            }
            Node::BindingElement(elem) => {
                if elem.dot_dot_dot_token {
                    self.write("...");
                }
                if elem.property_name.is_some() {
                    self.emit_node(elem.property_name);
                    self.write(": ");
                }
                self.emit_node(elem.name);
                if elem.initializer.is_some() {
                    self.write(" = ");
                    self.emit_node(elem.initializer);
                }
            }
            Node::Parameter(param) => {
                if param.dot_dot_dot_token {
                    self.write("...");
                }
                self.emit_node(param.name);
                if param.initializer.is_some() {
                    self.write(" = ");
                    self.emit_node(param.initializer);
                }
            }
            Node::PropertyAccessExpression(access) => {
                self.emit_node(access.expression);
                self.write(if access.question_dot_token { "?." } else { "." });
                self.emit_node(access.name_or_argument);
            }
            Node::ElementAccessExpression(access) => {
                self.emit_node(access.expression);
                if access.question_dot_token {
                    self.write("?.");
                }
                self.write("[");
                self.emit_node(access.name_or_argument);
                self.write("]");
            }
            Node::CallExpression(call) => {
                self.emit_node(call.expression);
                self.write("(");
                self.emit_comma_list(&call.arguments);
                self.write(")");
            }
            Node::NewExpression(call) => {
                self.write("new ");
                self.emit_node(call.expression);
                self.write("(");
                self.emit_comma_list(&call.arguments);
                self.write(")");
            }
            Node::ParenthesizedExpression(paren) => {
                self.write("(");
                self.emit_node(paren.expression);
                self.write(")");
            }
            Node::BinaryExpression(bin) => {
                self.emit_node(bin.left);
                self.write(" ");
                self.write(&bin.operator);
                self.write(" ");
                self.emit_node(bin.right);
            }
            Node::ArrowFunction(func) => {
                self.emit_parameters(&func.parameters);
                self.write(" => ");
                if matches!(self.arena.get(func.body), Some(Node::Block(_))) {
                    self.emit_block(func.body);
                } else {
                    self.emit_node(func.body);
                }
            }
            Node::ArrayLiteralExpression(arr) => {
                self.write("[");
                self.emit_comma_list(&arr.elements);
                self.write("]");
            }
            Node::ObjectLiteralExpression(obj) => {
                if obj.properties.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.emit_comma_list(&obj.properties);
                    self.write(" }");
                }
            }
            Node::PropertyAssignment(prop) => {
                self.emit_node(prop.name);
                self.write(": ");
                self.emit_node(prop.initializer);
            }
            Node::Other(other) if other.is_statement => self.emit_statement(idx),
            Node::Other(other) => {
                self.write(&other.kind);
                self.write("(");
                self.emit_comma_list(&other.children);
                self.write(")");
            }
            // Statement nodes reached through a fragment position.
            Node::SourceFile(_)
            | Node::ImportDeclaration(_)
            | Node::VariableStatement(_)
            | Node::ExpressionStatement(_)
            | Node::Block(_)
            | Node::ReturnStatement(_)
            | Node::IfStatement(_)
            | Node::FunctionDeclaration(_) => self.emit_statement(idx),
        }
    }

    fn emit_parameters(&mut self, parameters: &NodeList) {
        self.write("(");
        self.emit_comma_list(parameters);
        self.write(")");
    }

    fn emit_comma_list(&mut self, list: &NodeList) {
        for (i, idx) in list.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(idx);
        }
    }

    fn emit_string_literal(&mut self, text: &str) {
        match serde_json::to_string(text) {
            Ok(quoted) => self.write(&quoted),
            Err(_) => {
                self.write("\"");
                self.write(text);
                self.write("\"");
            }
        }
    }
}
