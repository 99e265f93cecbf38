pub mod api_utils;
pub mod confirm;
pub mod message;
