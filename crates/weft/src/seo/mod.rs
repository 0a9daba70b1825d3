//! Page metadata for search engines and link previews.
//!
//! [`HeadTags`] describes a page the way the site's pages declare it;
//! [`HeadTags::tags`] expands that into the concrete `<head>` elements and
//! [`render_head`] serializes them.

mod head;
mod render;

pub use head::{Alternate, HeadTag, HeadTags, OgType, SITE_NAME, absolute_url, language_alternates};
pub use render::render_head;
