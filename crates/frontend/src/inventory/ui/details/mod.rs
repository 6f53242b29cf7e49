use crate::inventory::api;
use crate::inventory::ui::quantity;
use crate::layout::context::AppContext;
use crate::layout::notifications::NotificationService;
use crate::shared::date_utils::format_date;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use contracts::inventory::ComponentPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fetches a component by part number and shows the detail dialog.
///
/// The dialog is pushed only on a successful fetch; any failure becomes an
/// error notification and nothing opens.
pub fn open_component_details(
    part_number: String,
    modals: ModalStackService,
    notify: NotificationService,
    app: AppContext,
) {
    spawn_local(async move {
        match api::fetch_component(&part_number).await {
            Ok(payload) => {
                modals.push(move |handle| {
                    view! {
                        <ComponentDetails
                            payload=payload.clone()
                            handle=handle
                            modals=modals
                            notify=notify
                            app=app
                        />
                    }
                    .into_any()
                });
            }
            Err(e) => notify.error(format!("Error fetching component details: {}", e)),
        }
    });
}

#[component]
fn ComponentDetails(
    payload: ComponentPayload,
    handle: ModalHandle,
    modals: ModalStackService,
    notify: NotificationService,
    app: AppContext,
) -> impl IntoView {
    let component = payload.component;
    let transactions = payload.transactions;

    let component_id = component.component_id;
    let part_number = component.supplier_part_number.clone();

    let transaction_rows = if transactions.is_empty() {
        view! {
            <tr>
                <td colspan="4" class="muted">"No transactions recorded"</td>
            </tr>
        }
        .into_any()
    } else {
        transactions
            .iter()
            .map(|t| {
                let badge_class = format!("badge badge--{}", t.transaction_type.badge_tone());
                view! {
                    <tr>
                        <td>{format_date(&t.transaction_date)}</td>
                        <td>
                            <span class=badge_class>{t.transaction_type.as_str()}</span>
                        </td>
                        <td class="numeric">{t.quantity}</td>
                        <td>{t.notes.clone().unwrap_or_default()}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="dialog dialog--details">
            <h3 class="dialog__title">{component.supplier_part_number.clone()}</h3>

            <dl class="detail-grid">
                <dt>"Description"</dt>
                <dd>{component.description.clone()}</dd>
                <dt>"Supplier"</dt>
                <dd>{component.supplier_name.clone()}</dd>
                <dt>"Quantity on hand"</dt>
                <dd>{component.current_quantity}</dd>
                <dt>"Location"</dt>
                <dd>{component.location_code.clone()}</dd>
                <dt>"Type"</dt>
                <dd>{component.owner.clone()}</dd>
            </dl>

            <h4 class="dialog__subtitle">"Transaction history"</h4>
            <div class="table-container table-container--dialog">
                <table>
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Type"</th>
                            <th>"Quantity"</th>
                            <th>"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>{transaction_rows}</tbody>
                </table>
            </div>

            <div class="dialog__actions">
                <button class="btn btn-secondary" on:click=move |_| handle.close()>
                    "Close"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        quantity::open_quantity_dialog(
                            component_id,
                            part_number.clone(),
                            modals,
                            notify,
                            app,
                        )
                    }
                >
                    "Adjust Quantity"
                </button>
            </div>
        </div>
    }
}
