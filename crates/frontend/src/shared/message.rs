use leptos::prelude::*;

/// Severity of a status message. Errors get the red treatment, everything
/// else the green one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Single-slot status display shared by the whole page. Each report replaces
/// the previous one; an empty slot renders nothing.
#[derive(Clone, Copy)]
pub struct MessageService {
    current: RwSignal<Option<StatusMessage>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.current.set(Some(StatusMessage {
            text: text.into(),
            severity: Severity::Info,
        }));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.current.set(Some(StatusMessage {
            text: text.into(),
            severity: Severity::Error,
        }));
    }

    pub fn clear(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> ReadSignal<Option<StatusMessage>> {
        self.current.read_only()
    }
}

impl Default for MessageService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the current status message, if any.
#[component]
pub fn MessageArea() -> impl IntoView {
    let messages = use_context::<MessageService>().expect("MessageService not provided in context");

    view! {
        {move || {
            messages.current().get().map(|msg| {
                let style = match msg.severity {
                    Severity::Error => {
                        "display: block; padding: 10px; margin: 10px 0; border-radius: 4px; \
                         background-color: #fce4e4; border: 1px solid #f44336; color: #c62828;"
                    }
                    Severity::Info => {
                        "display: block; padding: 10px; margin: 10px 0; border-radius: 4px; \
                         background-color: #e8f5e9; border: 1px solid #4caf50; color: #1b5e20;"
                    }
                };
                view! {
                    <div class="message-area" style=style>
                        {msg.text}
                    </div>
                }
            })
        }}
    }
}
