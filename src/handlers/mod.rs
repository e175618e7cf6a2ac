//! Event handlers for balance changes

pub mod composite;
pub mod console;

// Re-export for convenience
pub use composite::CompositeEventHandler;
pub use console::ConsoleEventHandler;
