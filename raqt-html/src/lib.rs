//! # raqt-html
//!
//! Renders a survey session as an HTML page of plain `<form>` elements.
//! Each category posts back on its own, so the page works without scripts.
//!
//! ```rust
//! use raqt::{Renderer, Session, aqt};
//! use raqt_html::{HtmlOptions, HtmlRenderer};
//!
//! let renderer = HtmlRenderer::new(HtmlOptions::new().with_title("Quality check"));
//! let html = renderer.render(aqt(), &Session::new());
//! assert!(html.contains("<title>Quality check</title>"));
//! ```

mod generator;

pub use generator::{HtmlOptions, HtmlRenderer, escape_html, render_page};
