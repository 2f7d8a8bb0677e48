pub mod base;
pub mod suggestion_box;
pub mod text_field;
pub mod traits;

pub use suggestion_box::{ClickTarget, SuggestionBox};
pub use text_field::TextField;
pub use traits::{DrawOutput, Drawable, InteractionResult, RenderContext, Visibility, WidgetAction};
