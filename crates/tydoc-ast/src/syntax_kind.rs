//! Syntax-node categories the converter dispatches on.
//!
//! This is a fixed enum rather than an open set so the node dispatch in the
//! converter can be an exhaustive match.

use serde::{Deserialize, Serialize};

/// The kind of a syntax node.
///
/// Only the categories the documentation converter cares about are modeled;
/// a host front end maps its own richer AST onto these.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    SourceFile,

    // Declarations
    ModuleDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    FunctionDeclaration,
    MethodDeclaration,
    MethodSignature,
    Constructor,
    PropertyDeclaration,
    PropertySignature,
    GetAccessor,
    SetAccessor,
    EnumDeclaration,
    EnumMember,
    VariableStatement,
    VariableDeclaration,
    TypeAliasDeclaration,
    ExportAssignment,

    // Signature-bearing members
    CallSignature,
    ConstructSignature,
    IndexSignature,
    Parameter,
    TypeParameter,

    // Expressions the converter reclassifies
    ObjectLiteralExpression,
    PropertyAssignment,
    ArrowFunction,
    FunctionExpression,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    Decorator,

    // Type nodes
    TypeReference,
    ArrayType,
    TupleType,
    UnionType,
    IntersectionType,
    TypeOperator,
    TypeLiteral,
    StringLiteralType,

    // Keyword type nodes
    StringKeyword,
    NumberKeyword,
    BooleanKeyword,
    VoidKeyword,
    AnyKeyword,
    UnknownKeyword,
    NeverKeyword,
    UndefinedKeyword,
    NullKeyword,
    ObjectKeyword,
    SymbolKeyword,

    // Literals (initializers / default values)
    StringLiteral,
    NumericLiteral,
    TrueKeyword,
    FalseKeyword,

    /// Anything the host did not map onto one of the above.
    Unsupported,
}

impl SyntaxKind {
    /// Keyword type nodes map directly onto intrinsic types.
    pub fn intrinsic_name(self) -> Option<&'static str> {
        match self {
            SyntaxKind::StringKeyword => Some("string"),
            SyntaxKind::NumberKeyword => Some("number"),
            SyntaxKind::BooleanKeyword => Some("boolean"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::AnyKeyword => Some("any"),
            SyntaxKind::UnknownKeyword => Some("unknown"),
            SyntaxKind::NeverKeyword => Some("never"),
            SyntaxKind::UndefinedKeyword => Some("undefined"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ObjectKeyword => Some("object"),
            SyntaxKind::SymbolKeyword => Some("symbol"),
            _ => None,
        }
    }

    /// True for nodes that can carry their own doc comment.
    pub fn is_documentable(self) -> bool {
        !matches!(
            self,
            SyntaxKind::SourceFile
                | SyntaxKind::TypeReference
                | SyntaxKind::Unsupported
                | SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
        )
    }

    /// True for function-like nodes whose body makes them an implementation
    /// rather than an overload declaration.
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::Constructor
                | SyntaxKind::ArrowFunction
                | SyntaxKind::FunctionExpression
        )
    }
}
