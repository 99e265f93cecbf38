use leptos::prelude::*;

use crate::shared::confirm::ConfirmService;
use crate::shared::message::MessageService;
use crate::usecases::consolidate_orders::view::ConsolidateOrdersView;

#[component]
pub fn App() -> impl IntoView {
    // Provide the status reporter and the confirmation gate to the whole app
    // via context.
    provide_context(MessageService::new());
    provide_context(ConfirmService::new());

    view! {
        <ConsolidateOrdersView />
    }
}
