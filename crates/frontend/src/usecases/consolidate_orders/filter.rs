use contracts::OrderRef;

use super::selection::SelectionStore;

/// Lowercases the raw filter input so the prefix match is case-insensitive.
pub fn normalize_prefix(raw: &str) -> String {
    raw.to_lowercase()
}

/// An available-list row is visible iff its customer number starts with the
/// normalized prefix and the order is not already selected. Pure function of
/// `(prefix, selection)`; the list view re-evaluates it on every keystroke
/// and after every selection mutation.
pub fn row_visible(order: &OrderRef, prefix: &str, selection: &SelectionStore) -> bool {
    order.customer_no.to_lowercase().starts_with(prefix) && !selection.contains(&order.order_id)
}

/// Snapshot of the rows visible right now, in list order. Select-all works
/// on this static snapshot rather than a live view, so the pass cannot
/// observe its own mutations.
pub fn visible_orders(
    orders: &[OrderRef],
    prefix: &str,
    selection: &SelectionStore,
) -> Vec<OrderRef> {
    orders
        .iter()
        .filter(|o| row_visible(o, prefix, selection))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, customer: &str) -> OrderRef {
        OrderRef::new(id, format!("SO-{id}"), customer, None)
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let selection = SelectionStore::new();
        let prefix = normalize_prefix("AB");

        assert!(row_visible(&order("o1", "abc"), &prefix, &selection));
        assert!(row_visible(&order("o2", "ABC"), &prefix, &selection));
        assert!(!row_visible(&order("o3", "XYZ"), &prefix, &selection));
    }

    #[test]
    fn selected_rows_are_hidden_regardless_of_prefix() {
        let mut selection = SelectionStore::new();
        selection.add(order("o1", "ABC"));

        assert!(!row_visible(&order("o1", "ABC"), "", &selection));
        assert!(!row_visible(&order("o1", "ABC"), "ab", &selection));
        assert!(row_visible(&order("o2", "ABC"), "ab", &selection));
    }

    #[test]
    fn empty_prefix_shows_all_unselected_rows() {
        let selection = SelectionStore::new();
        assert!(row_visible(&order("o1", "anything"), "", &selection));
    }

    #[test]
    fn select_all_snapshot_takes_exactly_the_visible_rows() {
        let mut selection = SelectionStore::new();
        selection.add(order("o2", "ABC"));
        let orders = [
            order("o1", "ABC"),
            order("o2", "ABC"), // already selected
            order("o3", "abd"),
            order("o4", "XYZ"), // filtered out
        ];

        let snapshot = visible_orders(&orders, &normalize_prefix("AB"), &selection);
        let ids: Vec<_> = snapshot.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, ["o1", "o3"]);
    }

    #[test]
    fn select_all_is_a_noop_once_everything_visible_is_selected() {
        let mut selection = SelectionStore::new();
        let orders = [order("o1", "AB1"), order("o2", "AB2"), order("o3", "ZZ1")];
        let prefix = normalize_prefix("ab");

        for o in visible_orders(&orders, &prefix, &selection) {
            assert!(selection.add(o));
        }
        assert_eq!(selection.len(), 2);

        // Same prefix, nothing left visible and unselected to add.
        assert!(visible_orders(&orders, &prefix, &selection).is_empty());
        let before = selection.clone();
        for o in visible_orders(&orders, &prefix, &selection) {
            selection.add(o);
        }
        assert_eq!(selection, before);
    }

    #[test]
    fn hidden_in_available_list_iff_selected() {
        let mut selection = SelectionStore::new();
        let rows = [order("o1", "C1"), order("o2", "C1"), order("o3", "C1")];

        selection.add(rows[1].clone());
        for row in &rows {
            assert_eq!(
                !row_visible(row, "", &selection),
                selection.contains(&row.order_id)
            );
        }

        selection.remove("o2");
        for row in &rows {
            assert!(row_visible(row, "", &selection));
        }
    }
}
