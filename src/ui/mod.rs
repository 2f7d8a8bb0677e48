pub mod highlight;
pub mod html;
pub mod span;
pub mod style;
