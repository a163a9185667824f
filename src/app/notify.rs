use std::time::Duration;

use leptos::prelude::*;

use super::locale::use_locale;
use crate::i18n::Msg;

const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: Msg,
}

/// Transient notifications. Only the latest one is shown; an older toast's
/// timer never clears a newer one.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn success(&self, message: Msg) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: Msg) {
        self.show(ToastKind::Error, message);
    }

    fn show(&self, kind: ToastKind, message: Msg) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some(Toast { id, kind, message }));

        let current = self.current;
        set_timeout(
            move || {
                current.update(|toast| {
                    if toast.is_some_and(|t| t.id == id) {
                        *toast = None;
                    }
                })
            },
            TOAST_DURATION,
        );
    }
}

pub fn provide_notifier() {
    provide_context(Notifier {
        current: RwSignal::new(None),
        next_id: StoredValue::new(0),
    });
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn ToastOutlet() -> impl IntoView {
    let notifier = use_notifier();
    let locale = use_locale();

    move || {
        notifier.current.get().map(|toast| {
            let color = match toast.kind {
                ToastKind::Success => "border-green text-green",
                ToastKind::Error => "border-red text-red",
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 px-4 py-2 rounded-md border bg-background shadow-lg {color}",
                    )
                >
                    {toast.message.tr(locale.get())}
                </div>
            }
        })
    }
}
