/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine and the variable store.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies the arithmetic operators with native floating-point semantics.
pub mod binary;
