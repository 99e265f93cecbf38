pub mod domain;
pub mod usecases;

pub use domain::sales_order::OrderRef;
pub use usecases::consolidate_orders::{
    DeleteRequest, DeleteResponse, OrderDetails, SelectionError, SubmitPayload, SubmitResponse,
};
