use serde::{Deserialize, Serialize};

/// Reference to one open sales order as exposed by the order-management
/// backend. The client only reads and relays these fields, it never derives
/// or recomputes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRef {
    /// Stable backend identifier, unique across the open-orders list.
    pub order_id: String,
    /// Human-readable order number.
    pub order_no: String,
    /// Customer the order belongs to. A consolidated submission must be
    /// uniform in this field.
    pub customer_no: String,
    /// Customer-provided purchase order reference, absent for customers
    /// that do not require one.
    #[serde(rename = "purchaseNo", default)]
    pub purchase_no: Option<String>,
}

impl OrderRef {
    pub fn new(
        order_id: impl Into<String>,
        order_no: impl Into<String>,
        customer_no: impl Into<String>,
        purchase_no: Option<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            order_no: order_no.into(),
            customer_no: customer_no.into(),
            purchase_no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let order = OrderRef::new("31337", "SO-1001", "C100", Some("PO-77".to_string()));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderId"], "31337");
        assert_eq!(json["orderNo"], "SO-1001");
        assert_eq!(json["customerNo"], "C100");
        assert_eq!(json["purchaseNo"], "PO-77");
    }

    #[test]
    fn deserializes_missing_purchase_no_as_none() {
        let order: OrderRef =
            serde_json::from_str(r#"{"orderId":"1","orderNo":"SO-1","customerNo":"C1"}"#).unwrap();
        assert_eq!(order.purchase_no, None);
    }
}
