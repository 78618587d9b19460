//! Layout substrate for the PDF encoder: static font metrics and greedy
//! word-wrap over a fixed content width.

pub mod metrics;
pub mod wrap;

pub use metrics::{text_width_mm, FontStyle};
pub use wrap::wrap_to_width;
