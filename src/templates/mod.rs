//! HTML templates for the notepad.
//!
//! Every page is one self-contained document: inline CSS, an inline SVG icon
//! sprite and the embedded editor script.
//!
//! ## Module Structure
//!
//! - `styles` - the stylesheet
//! - `components` - icon sprite, footer toolbar, modals, mobile top bar
//! - `editor_js` - browser-side editor script
//! - `page` - document template and its page variants

mod components;
mod editor_js;
mod page;
mod styles;

pub use editor_js::EDITOR_JS;
pub use page::{app_auth, edit, need_passwd, page_404, render_page, share, PageData};
pub use styles::STYLE;
