//! Built-in renderers over the [`Sink`](crate::sink::Sink) interface.

pub mod html;
pub mod text;

pub use html::{render_html, HtmlRenderer};
pub use text::{render_text, TextRenderer};
