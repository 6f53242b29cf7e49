use crate::layout::context::AppContext;
use crate::layout::notifications::NotificationService;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services live in context; components look them up where needed.
    provide_context(AppContext::new());
    provide_context(NotificationService::new());
    provide_context(ModalStackService::new());

    view! {
        <Shell />
    }
}
