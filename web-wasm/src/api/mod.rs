pub mod predict;

pub use predict::{api_url, image_form, js_error_message, predict};
