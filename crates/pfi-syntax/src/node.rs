//! Node definitions.
//!
//! The tree is a closed set of node variants stored in a [`NodeArena`](crate::NodeArena).
//! Children are referenced by [`NodeIndex`]; optional children use `NodeIndex::NONE`.
//! Only the syntax a polyfill analysis looks into is modelled with its own
//! variant. Everything else (classes, loops, `try`, templates and so on) is
//! handed over as [`Node::Other`], which keeps its children in source order
//! so sites nested inside it are still reached. Type annotations are erased
//! by the time a host hands the tree over.

use crate::base::{NodeIndex, NodeList};
use serde::Serialize;

/// Flags carried by variable declaration lists.
pub mod node_flags {
    pub const NONE: u16 = 0;
    pub const LET: u16 = 1;
    pub const CONST: u16 = 2;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Node {
    SourceFile(SourceFileData),
    Identifier(IdentifierData),
    StringLiteral(LiteralData),
    NumericLiteral(LiteralData),
    ComputedPropertyName(ComputedPropertyData),

    // Imports
    ImportDeclaration(ImportDeclData),
    ImportClause(ImportClauseData),
    NamespaceImport(NamespaceImportData),
    NamedImports(NamedImportsData),
    ImportSpecifier(SpecifierData),

    // Statements
    VariableStatement(VariableStatementData),
    VariableDeclarationList(VariableDeclListData),
    VariableDeclaration(VariableDeclData),
    ExpressionStatement(ExprStatementData),
    Block(BlockData),
    ReturnStatement(ReturnData),
    IfStatement(IfStatementData),
    FunctionDeclaration(FunctionData),

    // Binding patterns
    ObjectBindingPattern(BindingPatternData),
    ArrayBindingPattern(BindingPatternData),
    BindingElement(BindingElementData),
    Parameter(ParameterData),

    // Expressions
    PropertyAccessExpression(AccessExprData),
    ElementAccessExpression(AccessExprData),
    CallExpression(CallExprData),
    NewExpression(CallExprData),
    ParenthesizedExpression(ParenthesizedData),
    BinaryExpression(BinaryExprData),
    ArrowFunction(FunctionData),
    ArrayLiteralExpression(ArrayLiteralData),
    ObjectLiteralExpression(ObjectLiteralData),
    PropertyAssignment(PropertyAssignmentData),

    /// Any other syntax kind, walked through transparently.
    Other(OtherData),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComputedPropertyData {
    pub expression: NodeIndex,
}

/// `import <clause> from <module_specifier>;`
///
/// A side-effect import (`import "mod";`) has `import_clause == NONE`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImportDeclData {
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    /// Default import binding.
    pub name: NodeIndex,
    /// `NamespaceImport` or `NamedImports`.
    pub named_bindings: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamespaceImportData {
    pub name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedImportsData {
    pub elements: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpecifierData {
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableStatementData {
    pub declaration_list: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableDeclListData {
    pub flags: u16,
    pub declarations: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableDeclData {
    /// Identifier or binding pattern.
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// Shared by function declarations and arrow functions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// A `Block`, or an expression for concise arrow bodies.
    pub body: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

/// `...name`, `name = init`, `property_name: name`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParameterData {
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Property access uses `name_or_argument` for the member identifier; element
/// access uses it for the bracketed expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
    pub question_dot_token: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: String,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArrayLiteralData {
    pub elements: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectLiteralData {
    pub properties: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// A node kind without a dedicated variant, e.g. `ClassDeclaration` or
/// `ForOfStatement`. `kind` is the host's kind name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OtherData {
    pub kind: String,
    pub is_statement: bool,
    pub children: NodeList,
}

impl Node {
    /// Human readable variant name, used in trace output.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::SourceFile(_) => "SourceFile",
            Node::Identifier(_) => "Identifier",
            Node::StringLiteral(_) => "StringLiteral",
            Node::NumericLiteral(_) => "NumericLiteral",
            Node::ComputedPropertyName(_) => "ComputedPropertyName",
            Node::ImportDeclaration(_) => "ImportDeclaration",
            Node::ImportClause(_) => "ImportClause",
            Node::NamespaceImport(_) => "NamespaceImport",
            Node::NamedImports(_) => "NamedImports",
            Node::ImportSpecifier(_) => "ImportSpecifier",
            Node::VariableStatement(_) => "VariableStatement",
            Node::VariableDeclarationList(_) => "VariableDeclarationList",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::Block(_) => "Block",
            Node::ReturnStatement(_) => "ReturnStatement",
            Node::IfStatement(_) => "IfStatement",
            Node::FunctionDeclaration(_) => "FunctionDeclaration",
            Node::ObjectBindingPattern(_) => "ObjectBindingPattern",
            Node::ArrayBindingPattern(_) => "ArrayBindingPattern",
            Node::BindingElement(_) => "BindingElement",
            Node::Parameter(_) => "Parameter",
            Node::PropertyAccessExpression(_) => "PropertyAccessExpression",
            Node::ElementAccessExpression(_) => "ElementAccessExpression",
            Node::CallExpression(_) => "CallExpression",
            Node::NewExpression(_) => "NewExpression",
            Node::ParenthesizedExpression(_) => "ParenthesizedExpression",
            Node::BinaryExpression(_) => "BinaryExpression",
            Node::ArrowFunction(_) => "ArrowFunction",
            Node::ArrayLiteralExpression(_) => "ArrayLiteralExpression",
            Node::ObjectLiteralExpression(_) => "ObjectLiteralExpression",
            Node::PropertyAssignment(_) => "PropertyAssignment",
            Node::Other(other) => &other.kind,
        }
    }

    #[inline]
    pub fn is_statement(&self) -> bool {
        if let Node::Other(other) = self {
            return other.is_statement;
        }
        matches!(
            self,
            Node::ImportDeclaration(_)
                | Node::VariableStatement(_)
                | Node::ExpressionStatement(_)
                | Node::Block(_)
                | Node::ReturnStatement(_)
                | Node::IfStatement(_)
                | Node::FunctionDeclaration(_)
        )
    }
}
