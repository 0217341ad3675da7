pub mod assets;
pub mod html;

use crate::errors::ServerError;
use astra::Response;

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

pub use assets::stylesheet_response;
pub use html::{html_response, html_status_response};
