//! Transient status messages (one at a time, auto-dismissed)

use contracts::shared::config::NotificationConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub is_error: bool,
}

/// Shows the latest status message and hides it after the configured delay.
///
/// A newer message replaces the visible one; the timer of a replaced
/// message does not dismiss its successor.
#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<Toast>>,
    next_id: RwSignal<u64>,
    config: StoredValue<NotificationConfig>,
}

impl ToastService {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: RwSignal::new(1),
            config: StoredValue::new(config),
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn action_label(&self) -> String {
        self.config.with_value(|c| c.action_label.clone())
    }

    pub fn show(&self, text: impl Into<String>, is_error: bool) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let text = text.into();
        if is_error {
            log::warn!("{}", text);
        } else {
            log::info!("{}", text);
        }
        self.current.set(Some(Toast { id, text, is_error }));

        let current = self.current;
        let duration_ms = self.config.with_value(|c| c.duration_ms);
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            current.update(|toast| {
                if should_dismiss(toast.as_ref(), id) {
                    *toast = None;
                }
            });
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

/// A timer only dismisses the toast it was started for
fn should_dismiss(current: Option<&Toast>, id: u64) -> bool {
    current.is_some_and(|t| t.id == id)
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    move || {
        toast.current().map(|t| {
            let class = if t.is_error { "toast toast--error" } else { "toast" };
            view! {
                <div class=class role="status">
                    <span class="toast__text">{t.text}</span>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        size=ButtonSize::Small
                        on_click=move |_| toast.dismiss()
                    >
                        {toast.action_label()}
                    </Button>
                </div>
            }
        })
    }
}
