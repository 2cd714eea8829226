//! Shared fixture builder: constructs small checked programs by hand, the
//! way a host front end would hand them to the converter.

use tydoc_ast::{
    HeritageToken, ModifierFlags, Node, NodeIndex, Program, SymbolId, SyntaxKind, TypeId,
};
use tydoc_converter::{Converter, ConverterOptions};
use tydoc_model::{Project, ReflectionId};

pub struct Fixture {
    pub program: Program,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Fixture {
        // Honors RUST_LOG when a test needs converter traces.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        Fixture {
            program: Program::new(),
        }
    }

    /// Allocate a source file and register it as requested input.
    pub fn file(&mut self, name: &str) -> NodeIndex {
        let file = self
            .program
            .arena
            .alloc(Node::new(SyntaxKind::SourceFile).with_name(name));
        self.program.add_file(file, true);
        file
    }

    /// Allocate a named, symbol-bound declaration under `parent`.
    pub fn declare(
        &mut self,
        parent: NodeIndex,
        node: Node,
        symbol_flags: u32,
    ) -> (NodeIndex, SymbolId) {
        let (idx, symbol) = self.program.alloc_symbolic(node, symbol_flags);
        self.program.arena.add_child(parent, idx);
        (idx, symbol)
    }

    /// Allocate an anonymous helper node under `parent`.
    pub fn node(&mut self, parent: NodeIndex, node: Node) -> NodeIndex {
        let idx = self.program.arena.alloc(node);
        self.program.arena.add_child(parent, idx);
        idx
    }

    /// A bodyless type annotation node of an intrinsic keyword kind.
    pub fn keyword(&mut self, kind: SyntaxKind) -> NodeIndex {
        self.program.arena.alloc(Node::new(kind))
    }

    /// A `TypeReference` annotation pointing at a declared symbol.
    pub fn type_reference(&mut self, name: &str, symbol: Option<SymbolId>) -> NodeIndex {
        let mut node = Node::new(SyntaxKind::TypeReference).with_name(name);
        if let Some(symbol) = symbol {
            node = node.with_symbol(symbol);
        }
        self.program.arena.alloc(node)
    }

    /// Attach an `extends`/`implements` clause to a class or interface.
    pub fn heritage(&mut self, declaration: NodeIndex, token: HeritageToken, types: Vec<NodeIndex>) {
        self.program.arena.add_heritage(declaration, token, types);
    }

    pub fn set_type(&mut self, node: NodeIndex, ty: TypeId) {
        self.program.set_type_at(node, ty);
    }

    pub fn convert(&mut self) -> Project {
        self.convert_with(ConverterOptions::default())
    }

    pub fn convert_with(&mut self, options: ConverterOptions) -> Project {
        Converter::new(options)
            .convert(&self.program)
            .expect("conversion succeeds")
    }
}

/// A function-like declaration node with a body.
#[allow(dead_code)]
pub fn function_with_body(name: &str) -> Node {
    Node::new(SyntaxKind::FunctionDeclaration)
        .with_name(name)
        .with_flags(ModifierFlags::HAS_BODY)
}

/// Look up a reflection by dotted path, failing the test when absent.
#[allow(dead_code)]
pub fn find(project: &Project, path: &[&str]) -> ReflectionId {
    project
        .find_reflection_by_name(path)
        .unwrap_or_else(|| panic!("expected reflection at {path:?}"))
}

/// The single file module under the project root.
#[allow(dead_code)]
pub fn file_module(project: &Project) -> ReflectionId {
    let root = project.get(Project::ROOT).expect("project root");
    *root.children.first().expect("a file module")
}
