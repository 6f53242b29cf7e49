use crate::inventory::api;
use crate::layout::context::AppContext;
use crate::layout::notifications::NotificationService;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use contracts::inventory::{parse_quantity, TransactionKind, UpdateRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The original quantities stay on screen until the server answers; the list
/// re-fetches after this pause instead of updating optimistically.
const REFRESH_DELAY_MS: u32 = 1000;

/// Opens the stock-adjustment dialog for one component.
///
/// The component id travels through this call; nothing about the selection is
/// kept in app-wide state.
pub fn open_quantity_dialog(
    component_id: i64,
    part_number: String,
    modals: ModalStackService,
    notify: NotificationService,
    app: AppContext,
) {
    modals.push(move |handle| {
        view! {
            <QuantityDialog
                component_id=component_id
                part_number=part_number.clone()
                handle=handle
                notify=notify
                app=app
            />
        }
        .into_any()
    });
}

#[component]
fn QuantityDialog(
    component_id: i64,
    part_number: String,
    handle: ModalHandle,
    notify: NotificationService,
    app: AppContext,
) -> impl IntoView {
    let (quantity_input, set_quantity_input) = signal(String::new());
    let (kind_input, set_kind_input) = signal(TransactionKind::In.as_str().to_string());
    let (notes_input, set_notes_input) = signal(String::new());
    let (error_msg, set_error_msg) = signal(None::<String>);
    let (is_saving, set_is_saving) = signal(false);

    let on_save = move |_| {
        // Client-side gate: nothing leaves the browser on bad input.
        let quantity = match parse_quantity(&quantity_input.get()) {
            Ok(q) => q,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };
        let kind =
            TransactionKind::from_str(&kind_input.get()).unwrap_or(TransactionKind::In);

        set_error_msg.set(None);
        set_is_saving.set(true);

        let request = UpdateRequest::new(component_id, quantity, kind, notes_input.get());
        spawn_local(async move {
            match api::post_update(&request).await {
                Ok(()) => {
                    handle.close();
                    notify.success("Inventory updated successfully");
                    // Reflect the new on-hand quantity after a fixed pause.
                    TimeoutFuture::new(REFRESH_DELAY_MS).await;
                    app.refresh_inventory();
                }
                Err(e) => {
                    // Dialog stays open, inputs preserved.
                    set_error_msg.set(Some(e));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="dialog dialog--quantity">
            <h3 class="dialog__title">{format!("Adjust Quantity — {}", part_number)}</h3>

            <label class="dialog__field">
                <span>"Transaction type"</span>
                <select
                    prop:value=move || kind_input.get()
                    on:change=move |ev| set_kind_input.set(event_target_value(&ev))
                >
                    {TransactionKind::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="dialog__field">
                <span>"Quantity"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=move || quantity_input.get()
                    on:input=move |ev| set_quantity_input.set(event_target_value(&ev))
                />
            </label>

            <label class="dialog__field">
                <span>"Notes"</span>
                <textarea
                    prop:value=move || notes_input.get()
                    on:input=move |ev| set_notes_input.set(event_target_value(&ev))
                ></textarea>
            </label>

            {move || {
                error_msg
                    .get()
                    .map(|e| view! { <div class="error">{e}</div> })
            }}

            <div class="dialog__actions">
                <button class="btn btn-secondary" on:click=move |_| handle.close()>
                    "Cancel"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || is_saving.get()
                    on:click=on_save
                >
                    {move || if is_saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
