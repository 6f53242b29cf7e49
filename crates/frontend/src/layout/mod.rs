pub mod context;
pub mod notifications;

use crate::inventory::ui::list::PartsList;
use crate::inventory::ui::search::SearchBox;
use crate::reports::ui::ReportsPage;
use crate::shared::modal_stack::ModalHost;
use crate::transactions::ui::list::TransactionsList;
use crate::usecases::import_csv::view::ImportWidget;
use context::{use_app_context, Page};
use leptos::prelude::*;
use notifications::NotificationHost;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (title, nav, global search)   |
/// +------------------------------------------+
/// |             active page                  |
/// +------------------------------------------+
/// ```
///
/// Toast and modal hosts are mounted once at the root, below the content.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {move || match ctx.active_page.get() {
                    Page::Inventory => view! { <PartsList /> }.into_any(),
                    Page::Transactions => view! { <TransactionsList /> }.into_any(),
                    Page::ImportCsv => view! { <ImportWidget /> }.into_any(),
                    Page::Reports => view! { <ReportsPage /> }.into_any(),
                }}
            </main>
            <NotificationHost />
            <ModalHost />
        </div>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="top-header">
            <h1 class="top-header__title">"Stockroom"</h1>
            <nav class="top-header__nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if ctx.active_page.get() == page {
                                        "nav-button nav-button--active"
                                    } else {
                                        "nav-button"
                                    }
                                }
                                on:click=move |_| ctx.open(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <SearchBox />
        </header>
    }
}
