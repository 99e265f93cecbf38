//! Consolidation of open sales orders.
//!
//! An operator selects a subset of open orders belonging to one customer,
//! submits them as a single combined order and may then delete the
//! superseded source orders after an explicit confirmation.

pub mod api;
pub mod filter;
pub mod selection;
pub mod view;
pub mod workflow;
