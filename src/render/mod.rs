pub mod renderer;

pub use renderer::{Renderer, head_glyph, segment_glyph};
