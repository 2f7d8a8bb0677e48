pub mod binding;
pub mod document;
pub mod event;
pub mod page;

pub use binding::DomSuggestions;
pub use document::{Display, Document, ElementId};
pub use event::DomEvent;
pub use page::Page;
