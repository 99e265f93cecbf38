use async_trait::async_trait;
use contracts::{DeleteRequest, OrderRef, SubmitPayload};

use super::api::ConsolidationApi;

/// Seam between the submission workflow and the page, so outcome routing can
/// be asserted in tests without a DOM.
#[async_trait(?Send)]
pub trait WorkflowUi {
    /// Blocking alert for local validation failures.
    fn alert(&self, text: &str);
    fn report_info(&self, text: &str);
    fn report_error(&self, text: &str);
    /// Suspends until the operator confirms or declines deletion of `count`
    /// source orders.
    async fn confirm_delete(&self, count: usize) -> bool;
    /// Invoked once after a successful submit; clears the selection and its
    /// display.
    fn on_submit_success(&self);
}

/// Drives one submission attempt end to end:
/// validate same-customer constraint, build the payload, submit, and on
/// success hand the superseded source orders to the deletion sub-workflow.
///
/// A failed submit leaves the selection untouched; nothing is retried
/// automatically.
pub async fn run_submit_workflow(
    api: &impl ConsolidationApi,
    ui: &impl WorkflowUi,
    selected: &[OrderRef],
) {
    let payload = match SubmitPayload::from_selection(selected) {
        Ok(payload) => payload,
        Err(err) => {
            // Local rejection: no network call is made.
            ui.alert(&err.to_string());
            return;
        }
    };

    ui.report_info("Submitting selected orders...");

    match api.submit(&payload).await {
        Ok(response) => {
            ui.report_info(&response.message);
            ui.on_submit_success();
            delete_source_orders(api, ui, response.to_delete).await;
        }
        Err(err) => {
            ui.report_error(&format!("Error submitting orders: {err}"));
        }
    }
}

/// Deletion sub-workflow. Runs strictly after a successful submit; a failure
/// here leaves the source orders intact next to the already-created combined
/// order, and that inconsistency is surfaced rather than retried.
async fn delete_source_orders(
    api: &impl ConsolidationApi,
    ui: &impl WorkflowUi,
    order_ids: Vec<String>,
) {
    if order_ids.is_empty() {
        return;
    }

    if !ui.confirm_delete(order_ids.len()).await {
        // Declining is a normal outcome, not an error.
        ui.report_info("Combined order submitted. Source orders NOT deleted.");
        return;
    }

    ui.report_info("Deleting source orders...");

    match api.delete_orders(&DeleteRequest { order_ids }).await {
        Ok(response) => ui.report_info(&response.message),
        Err(err) => ui.report_error(&format!("Error during deletion: {err}")),
    }
}
