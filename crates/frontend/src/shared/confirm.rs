use futures::channel::oneshot;
use leptos::prelude::*;

struct PendingConfirm {
    count: usize,
    responder: oneshot::Sender<bool>,
}

/// Modal yes/no gate used before destructive actions.
///
/// `confirm` suspends the caller until the user answers; the answer channel
/// is consumed on resolution, so repeated invocations cannot accumulate
/// stale handlers. There is no timeout and no programmatic cancel.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    pending: RwSignal<Option<PendingConfirm>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    /// Opens the modal naming `count` affected orders and waits for the
    /// user's answer. Resolves exactly once.
    pub async fn confirm(&self, count: usize) -> bool {
        let (responder, answer) = oneshot::channel();
        self.pending.set(Some(PendingConfirm { count, responder }));
        // A dropped responder (pending request replaced) counts as a decline.
        answer.await.unwrap_or(false)
    }

    /// Number of affected orders in the open request, `None` when the modal
    /// is hidden.
    pub fn pending_count(&self) -> Option<usize> {
        self.pending.with(|p| p.as_ref().map(|p| p.count))
    }

    fn resolve(&self, confirmed: bool) {
        self.pending.update(|slot| {
            if let Some(pending) = slot.take() {
                let _ = pending.responder.send(confirmed);
            }
        });
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the delete-confirmation modal whenever a confirmation request is
/// pending.
#[component]
pub fn ConfirmDeleteModal() -> impl IntoView {
    let gate = use_context::<ConfirmService>().expect("ConfirmService not provided in context");

    view! {
        {move || {
            gate.pending_count().map(|count| {
                view! {
                    <div
                        class="modal-overlay"
                        style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); \
                               display: flex; align-items: center; justify-content: center;"
                    >
                        <div
                            class="modal"
                            style="background: white; padding: 20px; border-radius: 8px; max-width: 400px;"
                        >
                            <h3 style="margin-top: 0;">"Delete source orders?"</h3>
                            <p>
                                "This will permanently delete "
                                <strong>{count}</strong>
                                " source order(s) that are now part of the combined order."
                            </p>
                            <div style="display: flex; gap: 10px; justify-content: flex-end;">
                                <button
                                    style="padding: 8px 16px;"
                                    on:click=move |_| gate.resolve(false)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    style="padding: 8px 16px; background: #dc3545; color: white; border: none; border-radius: 4px;"
                                    on:click=move |_| gate.resolve(true)
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
