// Presentation: turns precomputed views into HTML, JSON or terminal text.

pub mod html;
pub mod json;
pub mod text;

pub use html::render_html;
pub use json::{render_json, render_view_json};
pub use text::render_text;
