mod language;
mod node;
mod resolved;

pub use language::{Language, UnknownLanguage};
pub use node::{LocaleNode, Shape};
pub use resolved::Resolved;
