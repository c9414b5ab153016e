//! Renderers consuming display rows

pub mod console;
pub mod json;

// Re-export for convenience
pub use console::ConsoleRenderer;
pub use json::JsonLinesRenderer;
