/// AST (Abstract Syntax Tree) module
/// Contains the PCF term and type representations handed to the type checker
///
/// Submodules:
/// - terms: The eleven term shapes and their one-line rendering
/// - types: The type shapes and structural equality
pub mod terms;
pub mod types;
