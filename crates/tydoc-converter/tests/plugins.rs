//! The resolution pass: comments, visibility modifiers, groups,
//! categories, sources and module renaming.

mod common;

use common::{Fixture, file_module, find, function_with_body};
use tydoc_ast::{ModifierFlags, Node, SyntaxKind, symbol_flags};
use tydoc_model::{Project, ReflectionKind};

#[test]
fn test_doc_comment_is_parsed_and_distributed() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (function, _) = fixture.declare(
        file,
        Node::new(SyntaxKind::FunctionDeclaration)
            .with_name("add")
            .with_flags(ModifierFlags::HAS_BODY)
            .with_doc(
                "/**\n * Adds two numbers.\n *\n * Stays exact for safe integers.\n * @param a  First operand.\n * @param b  Second operand.\n * @returns The sum.\n */",
            ),
        symbol_flags::FUNCTION,
    );
    for name in ["a", "b"] {
        let param = fixture
            .program
            .arena
            .alloc(Node::new(SyntaxKind::Parameter).with_name(name));
        fixture.program.arena.add_parameter(function, param);
    }

    let project = fixture.convert();

    let add = project.get(find(&project, &["add"])).expect("function");
    let comment = add.comment.as_ref().expect("comment");
    assert_eq!(comment.short_text.as_deref(), Some("Adds two numbers."));
    assert_eq!(comment.text.as_deref(), Some("Stays exact for safe integers."));
    assert_eq!(comment.returns.as_deref(), Some("The sum."));
    assert!(!comment.has_tag("param"), "param tags move to parameters");

    let signature = project
        .get(*add.signatures.first().expect("signature"))
        .expect("signature reflection");
    assert!(signature.comment.is_some());
    let first_param = project
        .get(*signature.parameters.first().expect("parameter"))
        .expect("parameter reflection");
    assert_eq!(
        first_param
            .comment
            .as_ref()
            .and_then(|c| c.short_text.as_deref()),
        Some("First operand.")
    );
}

#[test]
fn test_hidden_reflections_are_removed_with_their_subtree() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (class, _) = fixture.declare(
        file,
        Node::new(SyntaxKind::ClassDeclaration)
            .with_name("Internal")
            .with_doc("/** @hidden */"),
        symbol_flags::CLASS,
    );
    fixture.declare(
        class,
        Node::new(SyntaxKind::PropertyDeclaration).with_name("detail"),
        symbol_flags::PROPERTY,
    );
    fixture.declare(file, function_with_body("keep"), symbol_flags::FUNCTION);

    let project = fixture.convert();

    assert!(project.find_reflection_by_name(&["Internal"]).is_none());
    assert!(
        project
            .find_reflection_by_name(&["Internal", "detail"])
            .is_none()
    );
    assert!(project.find_reflection_by_name(&["keep"]).is_some());
}

#[test]
fn test_visibility_modifier_tags_set_flags() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    let (class, _) = fixture.declare(
        file,
        Node::new(SyntaxKind::ClassDeclaration).with_name("Widget"),
        symbol_flags::CLASS,
    );
    fixture.declare(
        class,
        Node::new(SyntaxKind::PropertyDeclaration)
            .with_name("cache")
            .with_doc("/** @private */"),
        symbol_flags::PROPERTY,
    );
    fixture.declare(
        class,
        Node::new(SyntaxKind::PropertyDeclaration)
            .with_name("changed")
            .with_doc("/**\n * Fires on change.\n * @event\n */"),
        symbol_flags::PROPERTY,
    );

    let project = fixture.convert();

    let cache = project
        .get(find(&project, &["Widget", "cache"]))
        .expect("property");
    assert!(cache.flags.is_private());

    let changed = project
        .get(find(&project, &["Widget", "changed"]))
        .expect("event");
    assert_eq!(changed.kind, ReflectionKind::Event);
}

#[test]
fn test_children_are_grouped_and_ordered_by_kind() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    fixture.declare(
        file,
        Node::new(SyntaxKind::VariableDeclaration).with_name("zeta"),
        symbol_flags::VARIABLE,
    );
    fixture.declare(file, function_with_body("run"), symbol_flags::FUNCTION);
    fixture.declare(
        file,
        Node::new(SyntaxKind::ClassDeclaration).with_name("Widget"),
        symbol_flags::CLASS,
    );

    let project = fixture.convert();

    let module = project.get(file_module(&project)).expect("file module");
    assert_eq!(module.groups.len(), 3);

    let kinds: Vec<ReflectionKind> = module
        .children
        .iter()
        .filter_map(|id| project.get(*id).map(|r| r.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ReflectionKind::Class,
            ReflectionKind::Variable,
            ReflectionKind::Function,
        ],
        "children sort by kind weight"
    );
    for group in &module.groups {
        assert!(!group.title.is_empty());
        assert!(!group.children.is_empty());
    }
}

#[test]
fn test_category_tags_build_categories() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    fixture.declare(
        file,
        Node::new(SyntaxKind::FunctionDeclaration)
            .with_name("open")
            .with_flags(ModifierFlags::HAS_BODY)
            .with_doc("/**\n * Opens.\n * @category Lifecycle\n */"),
        symbol_flags::FUNCTION,
    );
    fixture.declare(
        file,
        Node::new(SyntaxKind::FunctionDeclaration)
            .with_name("close")
            .with_flags(ModifierFlags::HAS_BODY)
            .with_doc("/**\n * Closes.\n * @category Lifecycle\n */"),
        symbol_flags::FUNCTION,
    );

    let project = fixture.convert();

    let module = project.get(file_module(&project)).expect("file module");
    assert_eq!(module.categories.len(), 1);
    assert_eq!(module.categories[0].title, "Lifecycle");
    assert_eq!(module.categories[0].children.len(), 2);
}

#[test]
fn test_file_modules_renamed_to_relative_paths() {
    let mut fixture = Fixture::new();
    let first = fixture.file("src/widgets/button.ts");
    let second = fixture.file("src/app.ts");
    fixture.declare(first, function_with_body("press"), symbol_flags::FUNCTION);
    fixture.declare(second, function_with_body("start"), symbol_flags::FUNCTION);

    let project = fixture.convert();

    let root = project.get(Project::ROOT).expect("root");
    let mut names: Vec<String> = root
        .children
        .iter()
        .filter_map(|id| project.get(*id).map(|r| r.name.clone()))
        .collect();
    names.sort();
    assert_eq!(names, vec!["\"app\"", "\"widgets/button\""]);
}

#[test]
fn test_sources_and_file_aggregates_are_recorded() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    fixture.declare(
        file,
        Node::new(SyntaxKind::FunctionDeclaration)
            .with_name("run")
            .with_flags(ModifierFlags::HAS_BODY)
            .with_line(12),
        symbol_flags::FUNCTION,
    );

    let project = fixture.convert();

    let run = project.get(find(&project, &["run"])).expect("function");
    let source = run.sources.first().expect("source reference");
    assert_eq!(source.file_name, "src/app.ts");
    assert_eq!(source.line, 12);

    let file = project
        .files
        .iter()
        .find(|f| f.file_name == "src/app.ts")
        .expect("file aggregate");
    assert!(file.reflections.contains(&run.id));
    assert!(project.directory.directories.contains_key("src"));
}

#[test]
fn test_external_files_can_be_excluded() {
    let mut fixture = Fixture::new();
    let file = fixture.file("src/app.ts");
    fixture.declare(file, function_with_body("mine"), symbol_flags::FUNCTION);
    let vendored = fixture
        .program
        .arena
        .alloc(Node::new(SyntaxKind::SourceFile).with_name("node_modules/dep/index.ts"));
    fixture.program.add_file(vendored, false);
    fixture.declare(vendored, function_with_body("theirs"), symbol_flags::FUNCTION);

    let project = fixture.convert_with(tydoc_converter::ConverterOptions {
        exclude_externals: true,
        ..tydoc_converter::ConverterOptions::default()
    });

    assert!(project.find_reflection_by_name(&["mine"]).is_some());
    assert!(project.find_reflection_by_name(&["theirs"]).is_none());
}
