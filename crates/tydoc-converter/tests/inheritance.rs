//! The inherit pass: member copying, overwrites, heritage records, cycles.

mod common;

use common::{Fixture, find};
use tydoc_ast::{HeritageToken, ModifierFlags, Node, NodeIndex, SymbolId, SyntaxKind, symbol_flags};
use tydoc_model::ReflectionKind;

fn class_with_method(fixture: &mut Fixture, file: NodeIndex, class_name: &str, method: &str) -> (NodeIndex, SymbolId) {
    let (class, symbol) = fixture.declare(
        file,
        Node::new(SyntaxKind::ClassDeclaration).with_name(class_name),
        symbol_flags::CLASS,
    );
    fixture.declare(
        class,
        Node::new(SyntaxKind::MethodDeclaration)
            .with_name(method)
            .with_flags(ModifierFlags::HAS_BODY),
        symbol_flags::METHOD,
    );
    (class, symbol)
}

#[test]
fn test_members_are_copied_with_inherited_from() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (_, base_symbol) = class_with_method(&mut fixture, file, "Base", "greet");
    let (child, _) = class_with_method(&mut fixture, file, "Child", "own");
    let base_ref = fixture.type_reference("Base", Some(base_symbol));
    fixture.heritage(child, HeritageToken::Extends, vec![base_ref]);

    let project = fixture.convert();

    let inherited = project
        .get(find(&project, &["Child", "greet"]))
        .expect("inherited method");
    assert!(inherited.inherited_from.is_some());

    let own = project.get(find(&project, &["Child", "own"])).expect("own method");
    assert!(own.inherited_from.is_none());

    // The base member is untouched.
    let base_greet = project
        .get(find(&project, &["Base", "greet"]))
        .expect("base method");
    assert!(base_greet.inherited_from.is_none());
    assert!(base_greet.overwrites.is_none());
}

#[test]
fn test_redeclared_member_becomes_overwrite() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (_, base_symbol) = class_with_method(&mut fixture, file, "Base", "greet");
    let (child, _) = class_with_method(&mut fixture, file, "Child", "greet");
    let base_ref = fixture.type_reference("Base", Some(base_symbol));
    fixture.heritage(child, HeritageToken::Extends, vec![base_ref]);

    let project = fixture.convert();

    let greet = project
        .get(find(&project, &["Child", "greet"]))
        .expect("overriding method");
    assert!(greet.overwrites.is_some());
    assert!(greet.inherited_from.is_none());
    assert_eq!(greet.signatures.len(), 1, "only the own signature survives");
}

#[test]
fn test_extended_types_recorded_and_back_linked() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (_, base_symbol) = class_with_method(&mut fixture, file, "Base", "greet");
    let (child, _) = class_with_method(&mut fixture, file, "Child", "own");
    let base_ref = fixture.type_reference("Base", Some(base_symbol));
    fixture.heritage(child, HeritageToken::Extends, vec![base_ref]);

    let project = fixture.convert();

    let base_id = find(&project, &["Base"]);
    let child_id = find(&project, &["Child"]);

    let child = project.get(child_id).expect("child class");
    assert_eq!(child.extended_types.len(), 1);
    assert_eq!(
        child.extended_types[0].resolved_target(),
        Some(base_id),
        "heritage reference resolves to the base reflection"
    );

    let base = project.get(base_id).expect("base class");
    assert_eq!(base.extended_by.len(), 1);
    assert_eq!(base.extended_by[0].resolved_target(), Some(child_id));
}

#[test]
fn test_interface_implementation_links_members() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (interface, interface_symbol) = fixture.declare(
        file,
        Node::new(SyntaxKind::InterfaceDeclaration).with_name("Drawable"),
        symbol_flags::INTERFACE,
    );
    fixture.declare(
        interface,
        Node::new(SyntaxKind::MethodSignature).with_name("draw"),
        symbol_flags::METHOD,
    );
    let (class, _) = class_with_method(&mut fixture, file, "Widget", "draw");
    let interface_ref = fixture.type_reference("Drawable", Some(interface_symbol));
    fixture.heritage(class, HeritageToken::Implements, vec![interface_ref]);

    let project = fixture.convert();

    let widget = project.get(find(&project, &["Widget"])).expect("class");
    assert_eq!(widget.implemented_types.len(), 1);

    let drawable = project.get(find(&project, &["Drawable"])).expect("interface");
    assert_eq!(drawable.implemented_by.len(), 1);

    let draw = project
        .get(find(&project, &["Widget", "draw"]))
        .expect("implementing method");
    let link = draw.implementation_of.as_ref().expect("implementation link");
    assert_eq!(
        link.resolved_target(),
        Some(find(&project, &["Drawable", "draw"]))
    );
}

#[test]
fn test_merged_base_declarations_all_contribute_members() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (first, base_symbol) = fixture.declare(
        file,
        Node::new(SyntaxKind::InterfaceDeclaration).with_name("Base"),
        symbol_flags::INTERFACE,
    );
    fixture.declare(
        first,
        Node::new(SyntaxKind::PropertySignature).with_name("x"),
        symbol_flags::PROPERTY,
    );
    // A second declaration merged onto the same symbol.
    let second = fixture.node(
        file,
        Node::new(SyntaxKind::InterfaceDeclaration)
            .with_name("Base")
            .with_symbol(base_symbol),
    );
    fixture.program.symbols.add_declaration(base_symbol, second);
    fixture.declare(
        second,
        Node::new(SyntaxKind::PropertySignature).with_name("y"),
        symbol_flags::PROPERTY,
    );

    let (child, _) = fixture.declare(
        file,
        Node::new(SyntaxKind::InterfaceDeclaration).with_name("Child"),
        symbol_flags::INTERFACE,
    );
    fixture.declare(
        child,
        Node::new(SyntaxKind::PropertySignature).with_name("own"),
        symbol_flags::PROPERTY,
    );
    let base_ref = fixture.type_reference("Base", Some(base_symbol));
    fixture.heritage(child, HeritageToken::Extends, vec![base_ref]);

    let project = fixture.convert();

    for member in ["own", "x", "y"] {
        assert!(
            project.find_reflection_by_name(&["Child", member]).is_some(),
            "Child.{member} should exist"
        );
    }
    assert!(
        project
            .get(find(&project, &["Child", "y"]))
            .expect("member from the second declaration")
            .inherited_from
            .is_some()
    );
    let child = project.get(find(&project, &["Child"])).expect("interface");
    assert_eq!(child.extended_types.len(), 1, "one record per base type");
}

#[test]
fn test_inheritance_cycle_terminates() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (a, a_symbol) = class_with_method(&mut fixture, file, "A", "one");
    let (b, b_symbol) = class_with_method(&mut fixture, file, "B", "two");
    let b_ref = fixture.type_reference("B", Some(b_symbol));
    let a_ref = fixture.type_reference("A", Some(a_symbol));
    fixture.heritage(a, HeritageToken::Extends, vec![b_ref]);
    fixture.heritage(b, HeritageToken::Extends, vec![a_ref]);

    let project = fixture.convert();

    assert!(project.find_reflection_by_name(&["A"]).is_some());
    assert!(project.find_reflection_by_name(&["B"]).is_some());
}

#[test]
fn test_interface_extension_inherits_members() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (base, base_symbol) = fixture.declare(
        file,
        Node::new(SyntaxKind::InterfaceDeclaration).with_name("Shape"),
        symbol_flags::INTERFACE,
    );
    fixture.declare(
        base,
        Node::new(SyntaxKind::PropertySignature).with_name("area"),
        symbol_flags::PROPERTY,
    );
    let (extended, _) = fixture.declare(
        file,
        Node::new(SyntaxKind::InterfaceDeclaration).with_name("Polygon"),
        symbol_flags::INTERFACE,
    );
    fixture.declare(
        extended,
        Node::new(SyntaxKind::PropertySignature).with_name("sides"),
        symbol_flags::PROPERTY,
    );
    let base_ref = fixture.type_reference("Shape", Some(base_symbol));
    fixture.heritage(extended, HeritageToken::Extends, vec![base_ref]);

    let project = fixture.convert();

    let polygon = project.get(find(&project, &["Polygon"])).expect("interface");
    assert_eq!(polygon.kind, ReflectionKind::Interface);
    assert_eq!(polygon.children.len(), 2, "own member plus inherited member");
    assert!(
        project
            .get(find(&project, &["Polygon", "area"]))
            .expect("inherited property")
            .inherited_from
            .is_some()
    );
}
