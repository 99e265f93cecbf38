use contracts::OrderRef;

/// Ordered set of selected orders, unique by `order_id`. Single source of
/// truth for what a submission will contain; the selected-list view and the
/// submit-button state are projections of this value.
///
/// Lives inside an `RwSignal` on the page, created empty on every page load
/// and cleared on successful submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    orders: Vec<OrderRef>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order to the selection. A duplicate `order_id` leaves the
    /// store unchanged and returns `false`; callers log it and move on.
    pub fn add(&mut self, order: OrderRef) -> bool {
        if self.contains(&order.order_id) {
            return false;
        }
        self.orders.push(order);
        true
    }

    /// Removes the order with the given id. Removing an absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, order_id: &str) {
        self.orders.retain(|o| o.order_id != order_id);
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.orders.iter().any(|o| o.order_id == order_id)
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Selected orders in selection order.
    pub fn orders(&self) -> &[OrderRef] {
        &self.orders
    }
}
