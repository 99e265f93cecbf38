pub mod request;
pub mod response;

pub use request::{OrderDetails, SelectionError, SubmitPayload};
pub use response::{DeleteRequest, DeleteResponse, SubmitResponse};
