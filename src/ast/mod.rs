/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Term` node enum and its constructors
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for sequencing and `const` bindings
/// - types: Definitions for type representations and type equality
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
