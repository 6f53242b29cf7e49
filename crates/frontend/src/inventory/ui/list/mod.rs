pub mod state;

use crate::inventory::api;
use crate::inventory::ui::{details, quantity};
use crate::layout::context::use_app_context;
use crate::layout::notifications::NotificationService;
use crate::shared::list_utils::SortState;
use crate::shared::modal_stack::ModalStackService;
use contracts::inventory::PartSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Parts table: the landing page.
///
/// Rows come from the list endpoint once and are filtered/sorted client-side;
/// the global search text (settled in the header) hides non-matching rows and
/// ranks the rest.
#[component]
#[allow(non_snake_case)]
pub fn PartsList() -> impl IntoView {
    let ctx = use_app_context();
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let modals =
        use_context::<ModalStackService>().expect("ModalStackService not provided in context");

    let (rows, set_rows) = signal(Vec::<PartSummary>::new());
    let (error, set_error) = signal(None::<String>);
    let sort = RwSignal::new(SortState::new("part_number", true));

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_parts().await {
                Ok(parts) => {
                    set_rows.set(parts);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Initial load, plus re-fetch after stock adjustments and finished imports.
    Effect::new(move |_| {
        ctx.inventory_epoch.get();
        fetch();
    });

    let visible = move || {
        let order = sort.get();
        state::visible_rows(
            &rows.get(),
            &ctx.search_query.get(),
            order.field(),
            order.ascending(),
        )
    };

    let toggle_sort = move |field: &'static str| {
        move |_: leptos::ev::MouseEvent| sort.update(|order| order.click(field))
    };
    let header_label = move |label: &'static str, field: &'static str| {
        move || format!("{}{}", label, sort.get().indicator(field))
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Components"</h2>
                <div class="header-actions">
                    <span class="header-count">
                        {move || format!("{} components", visible().len())}
                    </span>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table id="parts-table">
                    <thead>
                        <tr>
                            <th class="cursor-pointer" on:click=toggle_sort("part_number")>
                                {header_label("Part Number", "part_number")}
                            </th>
                            <th class="cursor-pointer" on:click=toggle_sort("description")>
                                {header_label("Description", "description")}
                            </th>
                            <th class="cursor-pointer" on:click=toggle_sort("supplier")>
                                {header_label("Supplier", "supplier")}
                            </th>
                            <th class="cursor-pointer" on:click=toggle_sort("type")>
                                {header_label("Type", "type")}
                            </th>
                            <th class="cursor-pointer" on:click=toggle_sort("location")>
                                {header_label("Location", "location")}
                            </th>
                            <th class="cursor-pointer" on:click=toggle_sort("quantity")>
                                {header_label("Quantity", "quantity")}
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|row| {
                                    let detail_part = row.part_number.clone();
                                    let adjust_part = row.part_number.clone();
                                    let component_id = row.id;
                                    view! {
                                        <tr>
                                            <td>{row.part_number.clone()}</td>
                                            <td>{row.description.clone()}</td>
                                            <td>{row.supplier.clone()}</td>
                                            <td>{row.kind.clone()}</td>
                                            <td>{row.location.clone()}</td>
                                            <td class="numeric">{row.quantity}</td>
                                            <td class="actions">
                                                <button
                                                    class="btn btn-link"
                                                    on:click=move |_| {
                                                        details::open_component_details(
                                                            detail_part.clone(),
                                                            modals,
                                                            notify,
                                                            ctx,
                                                        )
                                                    }
                                                >
                                                    "Details"
                                                </button>
                                                <button
                                                    class="btn btn-link"
                                                    on:click=move |_| {
                                                        quantity::open_quantity_dialog(
                                                            component_id,
                                                            adjust_part.clone(),
                                                            modals,
                                                            notify,
                                                            ctx,
                                                        )
                                                    }
                                                >
                                                    "Adjust"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
