pub mod state;

use crate::layout::notifications::NotificationService;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::export_table;
use crate::shared::list_utils::{filter_list, sort_list, SortState};
use crate::transactions::api;
use contracts::transactions::TransactionRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Movement history, newest first.
#[component]
#[allow(non_snake_case)]
pub fn TransactionsList() -> impl IntoView {
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let (rows, set_rows) = signal(Vec::<TransactionRow>::new());
    let (error, set_error) = signal(None::<String>);
    let (filter_text, set_filter_text) = signal(String::new());
    // Newest first until the operator says otherwise.
    let sort = RwSignal::new(SortState::new("date", false));

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(transactions) => {
                    set_rows.set(transactions);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let visible = move || {
        let order = sort.get();
        let mut result = filter_list(rows.get(), &filter_text.get());
        sort_list(&mut result, order.field(), order.ascending());
        result
    };

    let toggle_sort = move |field: &'static str| {
        move |_: leptos::ev::MouseEvent| sort.update(|order| order.click(field))
    };
    let header_label = move |label: &'static str, field: &'static str| {
        move || format!("{}{}", label, sort.get().indicator(field))
    };

    let on_export = move |_| {
        if let Err(e) = export_table("transactions-table", "transactions") {
            notify.error(e);
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Transactions"</h2>
                <div class="header-actions">
                    <input
                        type="text"
                        class="filter-input"
                        placeholder="Filter transactions..."
                        prop:value=move || filter_text.get()
                        on:input=move |ev| set_filter_text.set(event_target_value(&ev))
                    />
                    <button class="btn btn-secondary" on:click=on_export>
                        "Export CSV"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table id="transactions-table">
                    <thead>
                        <tr>
                            <th class="cursor-pointer" on:click=toggle_sort("date")>
                                {header_label("Date", "date")}
                            </th>
                            <th class="cursor-pointer" on:click=toggle_sort("part_number")>
                                {header_label("Part Number", "part_number")}
                            </th>
                            <th>"Description"</th>
                            <th class="cursor-pointer" on:click=toggle_sort("type")>
                                {header_label("Type", "type")}
                            </th>
                            <th class="cursor-pointer" on:click=toggle_sort("quantity")>
                                {header_label("Quantity", "quantity")}
                            </th>
                            <th>"Before"</th>
                            <th>"After"</th>
                            <th class="cursor-pointer" on:click=toggle_sort("user")>
                                {header_label("User", "user")}
                            </th>
                            <th>"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|row| {
                                    let badge_class = format!(
                                        "badge badge--{}",
                                        row.transaction_type.badge_tone(),
                                    );
                                    view! {
                                        <tr>
                                            <td>{format_datetime(&row.transaction_date)}</td>
                                            <td>{row.part_number.clone()}</td>
                                            <td>{row.description.clone()}</td>
                                            <td>
                                                <span class=badge_class>
                                                    {row.transaction_type.as_str()}
                                                </span>
                                            </td>
                                            <td class="numeric">{row.quantity}</td>
                                            <td class="numeric">{row.previous_quantity}</td>
                                            <td class="numeric">{row.new_quantity}</td>
                                            <td>{row.user_id.clone()}</td>
                                            <td>{row.notes.clone().unwrap_or_default()}</td>
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
