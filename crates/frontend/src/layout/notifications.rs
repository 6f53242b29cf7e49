use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Toasts dismiss themselves after this delay; a close button works earlier.
const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Danger,
}

impl NoticeTone {
    fn class(&self) -> &'static str {
        match self {
            NoticeTone::Success => "notice notice--success",
            NoticeTone::Danger => "notice notice--danger",
        }
    }
}

#[derive(Clone)]
struct Notice {
    id: u64,
    text: String,
    tone: NoticeTone,
}

/// Transient notification stack.
///
/// Every failed or completed user action reports here; a failure in one
/// interaction never escapes its handler, it only becomes a toast.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeTone::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeTone::Danger, text.into());
    }

    fn push(&self, tone: NoticeTone, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Notice { id, text, tone }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack. Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");

    view! {
        <div class="notices">
            <For
                each=move || svc.items.get()
                key=|notice| notice.id
                children=move |notice| {
                    view! {
                        <div class=notice.tone.class() role="alert">
                            <span>{notice.text.clone()}</span>
                            <button
                                class="notice__close"
                                on:click=move |_| svc.dismiss(notice.id)
                            >
                                {"\u{00d7}"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
