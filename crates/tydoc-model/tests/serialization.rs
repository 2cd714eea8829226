//! JSON shape of the reflection graph.

use tydoc_model::{
    Comment, Project, ReferenceTarget, ReflectionFlags, ReflectionKind, Type,
};

fn sample_project() -> Project {
    let mut project = Project::new("docs");
    let module = project.create_reflection("\"app\"", ReflectionKind::Module, Some(Project::ROOT));
    let class = project.create_reflection("Widget", ReflectionKind::Class, Some(module));
    if let Some(r) = project.get_mut(class) {
        r.set_flag(ReflectionFlags::EXPORTED, true);
        r.comment = Some(Comment {
            short_text: Some("A widget.".to_string()),
            ..Comment::default()
        });
        r.type_ = Some(Type::intrinsic("string"));
    }
    if let Some(root) = project.get_mut(Project::ROOT) {
        root.children.push(module);
    }
    if let Some(m) = project.get_mut(module) {
        m.children.push(class);
    }
    project
}

#[test]
fn test_kinds_serialize_as_their_numeric_value() {
    let project = sample_project();
    let json = serde_json::to_value(&project).expect("serialize");
    let class = &json["reflections"]["2"];
    assert_eq!(class["kind"], 128);
    assert_eq!(class["name"], "Widget");
}

#[test]
fn test_types_serialize_with_tagged_representation() {
    let reference = Type::Reference {
        name: "Widget".to_string(),
        target: ReferenceTarget::Symbol { id: -1024 },
        type_arguments: vec![Type::intrinsic("string")],
    };
    let json = serde_json::to_value(&reference).expect("serialize");
    assert_eq!(json["type"], "reference");
    assert_eq!(json["name"], "Widget");
    assert_eq!(json["target"]["state"], "symbol");
    assert_eq!(json["typeArguments"][0]["type"], "intrinsic");
}

#[test]
fn test_round_trip_preserves_structure() {
    let project = sample_project();
    let json = serde_json::to_string(&project).expect("serialize");
    let restored: Project = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.name, project.name);
    assert_eq!(restored.len(), project.len());
    for id in project.reflection_ids() {
        let original = project.get(id).expect("original");
        let copy = restored.get(id).expect("restored");
        assert_eq!(copy.name, original.name);
        assert_eq!(copy.kind, original.kind);
        assert_eq!(copy.flags, original.flags);
        assert_eq!(copy.parent, original.parent);
        assert_eq!(copy.children, original.children);
        assert_eq!(copy.type_, original.type_);
    }
}
