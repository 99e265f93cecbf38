use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::sales_order::OrderRef;

/// Per-order detail carried into the consolidated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_no: String,
    #[serde(rename = "purchaseNo")]
    pub purchase_no: Option<String>,
}

/// Body of `POST /submit_selected_orders`: one customer number plus a map of
/// source order id to its details. Built fresh from the selection on every
/// submit attempt, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub customer_no: String,
    pub orders: BTreeMap<String, OrderDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("All selected orders must belong to the same customer! ({expected}).")]
    MixedCustomers { expected: String },
    #[error("No orders selected.")]
    EmptySelection,
}

impl SubmitPayload {
    /// Projects a selection into a submission payload. Every selected order
    /// must carry the customer number of the first selected order, otherwise
    /// the whole attempt is rejected before any network traffic.
    pub fn from_selection(selected: &[OrderRef]) -> Result<Self, SelectionError> {
        let first = selected.first().ok_or(SelectionError::EmptySelection)?;
        let customer_no = first.customer_no.clone();

        if selected.iter().any(|o| o.customer_no != customer_no) {
            return Err(SelectionError::MixedCustomers {
                expected: customer_no,
            });
        }

        let orders = selected
            .iter()
            .map(|o| {
                (
                    o.order_id.clone(),
                    OrderDetails {
                        order_no: o.order_no.clone(),
                        purchase_no: o.purchase_no.clone(),
                    },
                )
            })
            .collect();

        Ok(Self {
            customer_no,
            orders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, no: &str, customer: &str, po: Option<&str>) -> OrderRef {
        OrderRef::new(id, no, customer, po.map(String::from))
    }

    #[test]
    fn groups_selection_under_shared_customer() {
        let selected = [
            order("o1", "SO-1", "C100", Some("PO-1")),
            order("o2", "SO-2", "C100", None),
        ];

        let payload = SubmitPayload::from_selection(&selected).unwrap();
        assert_eq!(payload.customer_no, "C100");
        assert_eq!(payload.orders.len(), 2);
        assert_eq!(payload.orders["o1"].order_no, "SO-1");
        assert_eq!(payload.orders["o1"].purchase_no.as_deref(), Some("PO-1"));
        assert_eq!(payload.orders["o2"].purchase_no, None);
    }

    #[test]
    fn rejects_mixed_customers_naming_the_first() {
        let selected = [
            order("o1", "SO-1", "C1", None),
            order("o2", "SO-2", "C1", None),
            order("o3", "SO-3", "C2", None),
        ];

        let err = SubmitPayload::from_selection(&selected).unwrap_err();
        assert_eq!(
            err,
            SelectionError::MixedCustomers {
                expected: "C1".to_string()
            }
        );
        assert!(err.to_string().contains("C1"));
    }

    #[test]
    fn rejects_empty_selection() {
        assert_eq!(
            SubmitPayload::from_selection(&[]).unwrap_err(),
            SelectionError::EmptySelection
        );
    }

    #[test]
    fn serializes_to_wire_shape() {
        let payload = SubmitPayload::from_selection(&[order("o1", "SO-1", "C9", None)]).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["customerNo"], "C9");
        assert_eq!(json["orders"]["o1"]["orderNo"], "SO-1");
        assert!(json["orders"]["o1"]["purchaseNo"].is_null());
    }
}
