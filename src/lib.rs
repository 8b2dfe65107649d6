pub mod assets;
pub mod font;
pub mod render;

// Curated re-exports
pub use assets::{placeholder_catalog, Background, IconSpec, ShapeKind};
pub use font::load_font;
pub use render::render;
