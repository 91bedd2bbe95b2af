//! Transient notifications in the top-right corner

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const DEFAULT_TOAST_MS: u32 = 3000;
/// The shipment calendar dismisses its toasts sooner
pub const CALENDAR_TOAST_MS: u32 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
}

/// Visible toasts in arrival order
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, text: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            text: text.into(),
            kind,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    lifetime_ms: u32,
}

impl ToastService {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            lifetime_ms,
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show_for(text, ToastKind::Success, self.lifetime_ms);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show_for(text, ToastKind::Error, self.lifetime_ms);
    }

    pub fn show_for(&self, text: impl Into<String>, kind: ToastKind, lifetime_ms: u32) {
        let id = self.queue.try_update(|q| q.push(text, kind));
        let Some(id) = id else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! { <div class=class>{toast.text}</div> }
                }
            />
        </div>
    }
}
