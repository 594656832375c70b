//! The element factories.
//!
//! Each factory creates an element with a fixed tag name and applies the arguments,
//! the same as `Element::new` does.

use crate::{arg::ElementArg, base_element::Element};

macro_rules! define_element {
    ($tag_name:ident) => {
        #[doc = concat!("Create a `<", stringify!($tag_name), ">` element with the arguments.")]
        #[inline]
        pub fn $tag_name<I>(args: I) -> Element
        where
            I: IntoIterator,
            I::Item: Into<ElementArg>,
        {
            Element::with_known_tag(stringify!($tag_name), args)
        }
    };
}

mod content_sectioning;
pub use content_sectioning::*;
mod text_content;
pub use text_content::*;
mod inline_text;
pub use inline_text::*;
mod forms;
pub use forms::*;
mod table_content;
pub use table_content::*;
mod multimedia;
pub use multimedia::*;
mod demarcating_edits;
pub use demarcating_edits::*;
