//! Type conversion: annotation-first dispatch, alias handling, fallbacks,
//! and type-literal memoization.

mod common;

use common::{Fixture, find};
use tydoc_ast::{Node, ObjectFlags, SyntaxKind, TypeData, symbol_flags};
use tydoc_model::{ReferenceTarget, ReflectionKind, Type};

fn variable(fixture: &mut Fixture, file: tydoc_ast::NodeIndex, name: &str) -> tydoc_ast::NodeIndex {
    fixture
        .declare(
            file,
            Node::new(SyntaxKind::VariableDeclaration).with_name(name),
            symbol_flags::VARIABLE,
        )
        .0
}

#[test]
fn test_array_annotation_converts_to_array() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let element = fixture.keyword(SyntaxKind::StringKeyword);
    let array = fixture
        .program
        .arena
        .alloc(Node::new(SyntaxKind::ArrayType).with_type(element));
    fixture.declare(
        file,
        Node::new(SyntaxKind::VariableDeclaration)
            .with_name("names")
            .with_type(array),
        symbol_flags::VARIABLE,
    );

    let project = fixture.convert();

    let names = project.get(find(&project, &["names"])).expect("variable");
    match names.type_.as_ref().expect("variable type") {
        Type::Array { element_type } => {
            assert_eq!(**element_type, Type::intrinsic("string"));
        }
        other => panic!("expected array type, got {other:?}"),
    }
}

#[test]
fn test_resolved_array_reference_converts_to_array() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let node = variable(&mut fixture, file, "counts");

    let array_symbol = fixture.program.symbols.alloc("Array", 0);
    let number = fixture.program.types.intrinsic("number");
    let array_type = fixture.program.types.intern(
        TypeData::Object {
            symbol: Some(array_symbol),
            target: None,
            type_arguments: vec![number],
            object_flags: ObjectFlags::REFERENCE,
        },
        "number[]",
    );
    fixture.set_type(node, array_type);

    let project = fixture.convert();

    let counts = project.get(find(&project, &["counts"])).expect("variable");
    match counts.type_.as_ref().expect("variable type") {
        Type::Array { element_type } => {
            assert_eq!(**element_type, Type::intrinsic("number"));
        }
        other => panic!("expected array type, got {other:?}"),
    }
}

#[test]
fn test_alias_annotation_keeps_the_written_name() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");

    // The annotation says `Callback`; the checker resolved it to `Widget`.
    let widget_symbol = fixture.program.symbols.alloc_qualified(
        "Widget",
        "\"src/app.ts\".Widget",
        symbol_flags::CLASS,
    );
    let widget_type = fixture.program.types.intern(
        TypeData::Object {
            symbol: Some(widget_symbol),
            target: None,
            type_arguments: Vec::new(),
            object_flags: ObjectFlags::empty(),
        },
        "Widget",
    );
    let annotation = fixture.type_reference("Callback", None);
    fixture.set_type(annotation, widget_type);
    fixture.declare(
        file,
        Node::new(SyntaxKind::VariableDeclaration)
            .with_name("handler")
            .with_type(annotation),
        symbol_flags::VARIABLE,
    );

    let project = fixture.convert();

    let handler = project.get(find(&project, &["handler"])).expect("variable");
    match handler.type_.as_ref().expect("variable type") {
        Type::Reference { name, .. } => assert_eq!(name, "Callback"),
        other => panic!("expected reference type, got {other:?}"),
    }
}

#[test]
fn test_matching_annotation_resolves_to_the_declaration() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (_, widget_symbol) = fixture.declare(
        file,
        Node::new(SyntaxKind::ClassDeclaration).with_name("Widget"),
        symbol_flags::CLASS,
    );
    let annotation = fixture.type_reference("Widget", Some(widget_symbol));
    fixture.declare(
        file,
        Node::new(SyntaxKind::VariableDeclaration)
            .with_name("widget")
            .with_type(annotation),
        symbol_flags::VARIABLE,
    );

    let project = fixture.convert();

    let widget_id = find(&project, &["Widget"]);
    let variable = project.get(find(&project, &["widget"])).expect("variable");
    match variable.type_.as_ref().expect("variable type") {
        Type::Reference { target, .. } => {
            assert_eq!(*target, ReferenceTarget::Resolved { id: widget_id });
        }
        other => panic!("expected reference type, got {other:?}"),
    }
}

#[test]
fn test_untyped_variable_falls_back_to_any() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    variable(&mut fixture, file, "mystery");

    let project = fixture.convert();

    let mystery = project.get(find(&project, &["mystery"])).expect("variable");
    assert_eq!(mystery.type_, Some(Type::intrinsic("any")));
}

#[test]
fn test_union_of_string_literals() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let node = variable(&mut fixture, file, "direction");

    let up = fixture.program.types.string_literal("up");
    let down = fixture.program.types.string_literal("down");
    let union = fixture
        .program
        .types
        .intern(TypeData::Union(vec![up, down]), "\"up\" | \"down\"");
    fixture.set_type(node, union);

    let project = fixture.convert();

    let direction = project.get(find(&project, &["direction"])).expect("variable");
    match direction.type_.as_ref().expect("variable type") {
        Type::Union { types } => {
            assert_eq!(
                types,
                &vec![
                    Type::StringLiteral { value: "up".into() },
                    Type::StringLiteral { value: "down".into() },
                ]
            );
        }
        other => panic!("expected union type, got {other:?}"),
    }
}

#[test]
fn test_type_literals_are_memoized_per_symbol() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");

    // An anonymous `{ x: number }` used by two annotations.
    let number = fixture.keyword(SyntaxKind::NumberKeyword);
    let literal_node = Node::new(SyntaxKind::TypeLiteral);
    let (literal, literal_symbol) = fixture.program.alloc_symbolic(literal_node, symbol_flags::TYPE_LITERAL);
    let member = fixture
        .program
        .arena
        .alloc(
            Node::new(SyntaxKind::PropertySignature)
                .with_name("x")
                .with_type(number),
        );
    fixture.program.arena.add_child(literal, member);

    let anonymous = fixture.program.types.intern(
        TypeData::Object {
            symbol: Some(literal_symbol),
            target: None,
            type_arguments: Vec::new(),
            object_flags: ObjectFlags::ANONYMOUS,
        },
        "{ x: number }",
    );

    let first = variable(&mut fixture, file, "first");
    let second = variable(&mut fixture, file, "second");
    fixture.set_type(first, anonymous);
    fixture.set_type(second, anonymous);

    let project = fixture.convert();

    let declaration_of = |name: &str| {
        match project
            .get(find(&project, &[name]))
            .and_then(|r| r.type_.clone())
            .expect("variable type")
        {
            Type::Reflection { declaration } => declaration,
            other => panic!("expected reflection type, got {other:?}"),
        }
    };
    let first_declaration = declaration_of("first");
    assert_eq!(
        first_declaration,
        declaration_of("second"),
        "the same anonymous symbol yields one declaration"
    );

    let literal = project.get(first_declaration).expect("type literal");
    assert_eq!(literal.kind, ReflectionKind::TypeLiteral);
    assert_eq!(literal.children.len(), 1);
}
