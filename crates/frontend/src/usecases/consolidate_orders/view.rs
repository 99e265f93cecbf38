use async_trait::async_trait;
use contracts::OrderRef;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::confirm::{ConfirmDeleteModal, ConfirmService};
use crate::shared::message::{MessageArea, MessageService};

use super::api::{self, HttpApi};
use super::filter::{normalize_prefix, row_visible, visible_orders};
use super::selection::SelectionStore;
use super::workflow::{run_submit_workflow, WorkflowUi};

/// Drops the orders submitted into the combined order from the available
/// list. Works on the snapshot taken at submit time, so selection changes
/// made while the request was in flight do not leave superseded rows behind.
fn remove_superseded(open_orders: &mut Vec<OrderRef>, submitted_ids: &[String]) {
    open_orders.retain(|o| !submitted_ids.iter().any(|id| id == &o.order_id));
}

/// Live page adapter for the submission workflow: alerts go through the
/// browser, outcome reports through [`MessageService`], confirmation through
/// [`ConfirmService`], and a successful submit clears the selection and
/// drops the superseded rows from the available list.
#[derive(Clone)]
struct LiveUi {
    messages: MessageService,
    gate: ConfirmService,
    selection: RwSignal<SelectionStore>,
    open_orders: RwSignal<Vec<OrderRef>>,
    /// Ids of the orders in the payload, snapshotted at submit time.
    submitted_ids: Vec<String>,
}

#[async_trait(?Send)]
impl WorkflowUi for LiveUi {
    fn alert(&self, text: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(text);
        }
    }

    fn report_info(&self, text: &str) {
        self.messages.info(text);
    }

    fn report_error(&self, text: &str) {
        self.messages.error(text);
    }

    async fn confirm_delete(&self, count: usize) -> bool {
        self.gate.confirm(count).await
    }

    fn on_submit_success(&self) {
        self.open_orders
            .update(|orders| remove_superseded(orders, &self.submitted_ids));
        self.selection.update(|sel| sel.clear());
    }
}

#[component]
pub fn ConsolidateOrdersView() -> impl IntoView {
    let messages =
        use_context::<MessageService>().expect("MessageService not provided in context");
    let gate = use_context::<ConfirmService>().expect("ConfirmService not provided in context");

    // Selection state is ephemeral: created empty on every page load.
    let selection = RwSignal::new(SelectionStore::new());
    let open_orders = RwSignal::new(Vec::<OrderRef>::new());
    let (prefix_input, set_prefix_input) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let load_orders = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_load_error.set(None);
            match api::fetch_open_orders().await {
                Ok(orders) => open_orders.set(orders),
                Err(err) => {
                    set_load_error.set(Some(format!("Failed to load open orders: {err}")))
                }
            }
            set_loading.set(false);
        });
    };
    load_orders();

    let add_order = move |order: OrderRef| {
        selection.update(|sel| {
            if !sel.add(order.clone()) {
                // Safety net against erroneous calls; no user-visible effect.
                log::warn!(
                    "Order {} (ID: {}) is already selected. Skipping addition.",
                    order.order_no,
                    order.order_id
                );
            }
        });
    };

    // Snapshot-then-apply: collect the rows visible right now, then add them,
    // instead of mutating the selection while walking a live view.
    let add_all_visible = move |_| {
        let prefix = normalize_prefix(&prefix_input.get_untracked());
        let visible = selection.with_untracked(|sel| {
            open_orders.with_untracked(|orders| visible_orders(orders, &prefix, sel))
        });
        selection.update(|sel| {
            for order in visible {
                sel.add(order);
            }
        });
    };

    let on_submit = move |_| {
        let selected = selection.with_untracked(|sel| sel.orders().to_vec());
        let submitted_ids = selected.iter().map(|o| o.order_id.clone()).collect();
        let ui = LiveUi {
            messages,
            gate,
            selection,
            open_orders,
            submitted_ids,
        };
        spawn_local(async move {
            run_submit_workflow(&HttpApi, &ui, &selected).await;
        });
    };

    view! {
        <div class="consolidate-orders" style="max-width: 900px; margin: 20px auto; padding: 0 20px;">
            <h2>"Open Sales Orders"</h2>

            <MessageArea />

            <div style="margin: 10px 0; display: flex; gap: 10px; align-items: center;">
                <input
                    type="text"
                    placeholder="Filter by customer number"
                    style="padding: 6px 10px; flex: 1;"
                    prop:value=move || prefix_input.get()
                    on:input=move |ev| set_prefix_input.set(event_target_value(&ev))
                />
                <button style="padding: 6px 12px;" on:click=add_all_visible>
                    "Select all visible"
                </button>
            </div>

            {move || {
                load_error.get().map(|err| {
                    view! {
                        <div style="padding: 10px; background: #fce4e4; border: 1px solid #f44336; color: #c62828; border-radius: 4px;">
                            {err}
                        </div>
                    }
                })
            }}

            {move || loading.get().then(|| view! { <p>"Loading open orders..."</p> })}

            <ul class="order-list" style="list-style: none; padding: 0;">
                {move || {
                    let prefix = normalize_prefix(&prefix_input.get());
                    selection.with(|sel| {
                        open_orders.with(|orders| {
                            orders
                                .iter()
                                .filter(|o| row_visible(o, &prefix, sel))
                                .map(|o| {
                                    let order = o.clone();
                                    view! {
                                        <li
                                            style="display: flex; gap: 15px; align-items: center; padding: 6px 0; border-bottom: 1px solid #eee;"
                                            data-order-id=o.order_id.clone()
                                        >
                                            <span class="order-data">
                                                <strong>"Order: "</strong>
                                                {o.order_no.clone()}
                                            </span>
                                            <span class="customer-data">
                                                <strong>"Customer: "</strong>
                                                {o.customer_no.clone()}
                                            </span>
                                            <button
                                                style="margin-left: auto; padding: 4px 10px;"
                                                on:click=move |_| add_order(order.clone())
                                            >
                                                "Select"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    })
                }}
            </ul>

            <h3>"Selected Orders"</h3>
            <ul class="selected-list" style="list-style: none; padding: 0;">
                {move || {
                    selection
                        .with(|sel| {
                            sel.orders()
                                .iter()
                                .map(|o| {
                                    let order_id = o.order_id.clone();
                                    view! {
                                        <li
                                            style="display: flex; gap: 15px; align-items: center; padding: 6px 0; border-bottom: 1px solid #eee;"
                                            data-order-id=o.order_id.clone()
                                        >
                                            <span class="order-data">
                                                <strong>"Order: "</strong>
                                                {o.order_no.clone()}
                                            </span>
                                            <span class="customer-data">
                                                <strong>"Customer: "</strong>
                                                {o.customer_no.clone()}
                                            </span>
                                            <button
                                                style="margin-left: auto; padding: 4px 10px;"
                                                on:click=move |_| {
                                                    selection.update(|sel| sel.remove(&order_id))
                                                }
                                            >
                                                "Deselect"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </ul>

            <button
                style="margin-top: 15px; padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 4px; font-size: 16px;"
                prop:disabled=move || selection.with(|sel| sel.is_empty())
                on:click=on_submit
            >
                "Submit Combined Order"
            </button>

            <ConfirmDeleteModal />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, customer: &str) -> OrderRef {
        OrderRef::new(id, format!("SO-{id}"), customer, None)
    }

    #[test]
    fn superseded_rows_are_removed_by_submit_time_snapshot() {
        let mut open_orders = vec![order("o1", "C1"), order("o2", "C1"), order("o3", "C1")];
        // o1 and o2 went into the combined order; o2 was deselected while
        // the request was in flight, so the live selection no longer names
        // it. The snapshot does, and both rows must go.
        let submitted_ids = vec!["o1".to_string(), "o2".to_string()];

        remove_superseded(&mut open_orders, &submitted_ids);

        let ids: Vec<_> = open_orders.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, ["o3"]);
    }

    #[test]
    fn unrelated_rows_survive_removal() {
        let mut open_orders = vec![order("o1", "C1")];
        remove_superseded(&mut open_orders, &["other".to_string()]);
        assert_eq!(open_orders.len(), 1);
    }
}
