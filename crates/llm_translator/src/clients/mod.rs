pub mod shapes;

// Re-export the main items for easier access
pub use shapes::*;
