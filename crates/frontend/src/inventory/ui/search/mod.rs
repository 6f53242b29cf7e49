pub mod state;

use crate::inventory::api;
use crate::inventory::ui::details;
use crate::layout::context::use_app_context;
use crate::layout::notifications::NotificationService;
use crate::shared::modal_stack::ModalStackService;
use contracts::inventory::PartSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{step_down, step_up, truncate, DropdownState, SearchSequencer};
use wasm_bindgen::JsCast;

/// Quiet period before a keystroke burst becomes one request.
const SEARCH_DEBOUNCE_MS: i32 = 300;
/// Upper bound on rendered dropdown rows; the endpoint caps at the same value.
const MAX_RESULTS: usize = 10;

/// Global incremental search.
///
/// Debounced input feeds the server search endpoint and renders a ranked
/// dropdown; the settled text also filters the parts table. `/` and
/// Ctrl+K/Cmd+K focus the input from anywhere.
#[component]
pub fn SearchBox() -> impl IntoView {
    let app = use_app_context();
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let modals =
        use_context::<ModalStackService>().expect("ModalStackService not provided in context");

    let (input_value, set_input_value) = signal(String::new());
    let dropdown = RwSignal::new(DropdownState::Hidden);
    let active = RwSignal::new(None::<usize>);

    let debounce_timeout = StoredValue::new(None::<i32>);
    let sequencer = StoredValue::new(SearchSequencer::default());

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let close_dropdown = move || {
        dropdown.set(DropdownState::Hidden);
        active.set(None);
    };

    // Runs once per settled pause with the text as it was when the timer fired.
    let on_settled = move |text: String| {
        app.search_query.set(text.clone());

        let token = {
            let mut seq = sequencer.get_value();
            let token = seq.begin();
            sequencer.set_value(seq);
            token
        };

        spawn_local(async move {
            let outcome = api::search_parts(&text).await;

            let fresh = {
                let mut seq = sequencer.get_value();
                let fresh = seq.accept(token);
                sequencer.set_value(seq);
                fresh
            };
            if !fresh {
                // A newer request already rendered; this response is stale.
                return;
            }

            active.set(None);
            match outcome {
                Ok(hits) => dropdown.set(DropdownState::Results(hits)),
                Err(e) => {
                    log::error!("Search request failed: {}", e);
                    dropdown.set(DropdownState::Error(e));
                }
            }
        });
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        // Empty query: hide the dropdown, clear the table filter, no request.
        if new_value.trim().is_empty() {
            close_dropdown();
            app.search_query.set(String::new());
            return;
        }

        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_settled(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let open_hit = move |hit: PartSummary| {
        close_dropdown();
        details::open_component_details(hit.part_number, modals, notify, app);
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let current = dropdown.get_untracked();
        match ev.key().as_str() {
            "ArrowDown" => {
                if let DropdownState::Results(hits) = &current {
                    ev.prevent_default();
                    active.set(step_down(active.get_untracked(), hits.len().min(MAX_RESULTS)));
                }
            }
            "ArrowUp" => {
                if let DropdownState::Results(hits) = &current {
                    ev.prevent_default();
                    active.set(step_up(active.get_untracked(), hits.len().min(MAX_RESULTS)));
                }
            }
            "Enter" => {
                if let DropdownState::Results(hits) = &current {
                    if let Some(index) = active.get_untracked() {
                        if let Some(hit) = hits.get(index) {
                            ev.prevent_default();
                            open_hit(hit.clone());
                        }
                    }
                }
            }
            "Escape" => {
                if current != DropdownState::Hidden {
                    // Keep the key away from the modal host while the dropdown
                    // owns it.
                    ev.stop_propagation();
                    close_dropdown();
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.blur();
                    }
                }
            }
            _ => {}
        }
    };

    // `/` or Ctrl+K / Cmd+K focuses the search from anywhere on the page.
    Effect::new(move |_| {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |event: web_sys::KeyboardEvent| {
                let focus = if (event.ctrl_key() || event.meta_key()) && event.key() == "k" {
                    true
                } else {
                    event.key() == "/" && !targets_editable_element(&event)
                };
                if focus {
                    event.prevent_default();
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                }
            },
        ) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    // Outside click dismisses the dropdown.
    Effect::new(move |_| {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .map(|node| container.contains(Some(&node)))
                    .unwrap_or(false);
                if !inside {
                    close_dropdown();
                }
            }) as Box<dyn FnMut(_)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <div class="search" node_ref=container_ref>
            <input
                type="text"
                class="search__input"
                placeholder="Search components... ( / )"
                node_ref=input_ref
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
                on:keydown=handle_keydown
            />
            {move || match dropdown.get() {
                DropdownState::Hidden => view! { <></> }.into_any(),
                DropdownState::Error(message) => {
                    view! {
                        <div class="search-results">
                            <div class="search-result search-result--error">{message}</div>
                        </div>
                    }
                        .into_any()
                }
                DropdownState::Results(hits) if hits.is_empty() => {
                    view! {
                        <div class="search-results">
                            <div class="search-result search-result--empty">
                                "No matching components found"
                            </div>
                        </div>
                    }
                        .into_any()
                }
                DropdownState::Results(hits) => {
                    let rows = hits
                        .into_iter()
                        .take(MAX_RESULTS)
                        .enumerate()
                        .map(|(index, hit)| {
                            let summary = truncate(&hit.description, 100);
                            let part_number = hit.part_number.clone();
                            view! {
                                <div
                                    class=move || {
                                        if active.get() == Some(index) {
                                            "search-result search-result--active"
                                        } else {
                                            "search-result"
                                        }
                                    }
                                    on:click=move |_| open_hit(hit.clone())
                                >
                                    <div class="search-result__part">{part_number}</div>
                                    <small class="search-result__summary">{summary}</small>
                                </div>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="search-results">
                            {rows}
                            <div class="search-results__hints">
                                <kbd>"↑"</kbd>
                                <kbd>"↓"</kbd>
                                " to navigate   "
                                <kbd>"Enter"</kbd>
                                " to select   "
                                <kbd>"Esc"</kbd>
                                " to dismiss"
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// True when the key event originates from a field that owns its own input.
fn targets_editable_element(event: &web_sys::KeyboardEvent) -> bool {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return false;
    };
    matches!(target.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        || target.is_content_editable()
}
