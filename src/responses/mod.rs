pub mod html;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{fragment_response, html_response, no_swap_response, text_response};
