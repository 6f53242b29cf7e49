pub mod charts;

use crate::layout::notifications::NotificationService;
use crate::reports::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{export_rows, export_table};
use charts::{DoughnutChart, LineChart};
use chrono::Utc;
use contracts::reports::{ChartPayload, DateRange, ReportSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Last used stock-movement range survives reloads.
const RANGE_STORAGE_KEY: &str = "reports_stock_movement_range";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn save_range(range: &DateRange) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(RANGE_STORAGE_KEY, &range.query_string());
    }
}

fn load_range() -> Option<DateRange> {
    let saved = storage()?.get_item(RANGE_STORAGE_KEY).ok().flatten()?;
    let (start, end) = saved
        .strip_prefix("start=")?
        .split_once("&end=")
        .map(|(s, e)| (s.to_string(), e.to_string()))?;
    DateRange::parse(&start, &end).ok()
}

/// Reports page: summary tiles, low-stock and recent-transaction tables, the
/// two charts, and CSV export of all of them.
#[component]
#[allow(non_snake_case)]
pub fn ReportsPage() -> impl IntoView {
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let initial_range =
        load_range().unwrap_or_else(|| DateRange::last_30_days(Utc::now().date_naive()));

    let (summary, set_summary) = signal(None::<ReportSummary>);
    let (category, set_category) = signal(None::<ChartPayload>);
    let (movement, set_movement) = signal(None::<ChartPayload>);
    let (error, set_error) = signal(None::<String>);
    let (range_error, set_range_error) = signal(None::<String>);
    let (start_input, set_start_input) =
        signal(initial_range.start.format("%Y-%m-%d").to_string());
    let (end_input, set_end_input) = signal(initial_range.end.format("%Y-%m-%d").to_string());

    let fetch_movement = move |range: DateRange| {
        spawn_local(async move {
            match api::fetch_stock_movement(&range).await {
                // A fresh payload mounts a fresh chart; nothing is mutated in place.
                Ok(payload) => set_movement.set(Some(payload)),
                Err(e) => notify.error(format!("Error fetching stock movement data: {}", e)),
            }
        });
    };

    // One-shot initial load.
    spawn_local(async move {
        match api::fetch_summary().await {
            Ok(payload) => set_summary.set(Some(payload)),
            Err(e) => set_error.set(Some(e)),
        }
    });
    spawn_local(async move {
        match api::fetch_category_value().await {
            Ok(payload) => set_category.set(Some(payload)),
            Err(e) => notify.error(format!("Error fetching category data: {}", e)),
        }
    });
    fetch_movement(initial_range);

    let on_update_range = move |_| match DateRange::parse(&start_input.get(), &end_input.get()) {
        Ok(range) => {
            set_range_error.set(None);
            save_range(&range);
            fetch_movement(range);
        }
        Err(e) => set_range_error.set(Some(e.to_string())),
    };

    let export_category = move |_| {
        let Some(payload) = category.get() else {
            return;
        };
        let values = payload
            .primary()
            .map(|d| d.data.clone())
            .unwrap_or_default();
        let rows: Vec<Vec<String>> = payload
            .labels
            .iter()
            .zip(values)
            .map(|(label, value)| vec![label.clone(), format!("{:.2}", value)])
            .collect();
        if let Err(e) = export_rows(&["Category", "Value"], &rows, "inventory-by-category.csv") {
            notify.error(e);
        }
    };

    let export_movement = move |_| {
        let Some(payload) = movement.get() else {
            return;
        };
        let values = payload
            .primary()
            .map(|d| d.data.clone())
            .unwrap_or_default();
        let rows: Vec<Vec<String>> = payload
            .labels
            .iter()
            .zip(values)
            .map(|(label, value)| vec![label.clone(), format!("{}", value)])
            .collect();
        if let Err(e) = export_rows(&["Date", "Net Change"], &rows, "stock-movement.csv") {
            notify.error(e);
        }
    };

    let export_low_stock = move |_| {
        if let Err(e) = export_table("low-stock-table", "low-stock") {
            notify.error(e);
        }
    };
    let export_recent = move |_| {
        if let Err(e) = export_table("recent-transactions-table", "transactions") {
            notify.error(e);
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Reports"</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                summary
                    .get()
                    .map(|s| {
                        view! {
                            <div class="tiles">
                                <div class="tile">
                                    <div class="tile__value">{s.total_items}</div>
                                    <div class="tile__label">"Components"</div>
                                </div>
                                <div class="tile">
                                    <div class="tile__value">
                                        {format!("${:.2}", s.total_value)}
                                    </div>
                                    <div class="tile__label">"Inventory value"</div>
                                </div>
                                <div class="tile">
                                    <div class="tile__value">{s.supplier_count}</div>
                                    <div class="tile__label">"Suppliers"</div>
                                </div>
                                <div class="tile">
                                    <div class="tile__value">{s.low_stock.len()}</div>
                                    <div class="tile__label">"Low stock"</div>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="report-charts">
                <div class="card">
                    <div class="card__header">
                        <h3>"Inventory Value by Category"</h3>
                        <button class="btn btn-secondary" on:click=export_category>
                            "Export CSV"
                        </button>
                    </div>
                    <div class="card__body">
                        {move || {
                            category
                                .get()
                                .map(|payload| {
                                    view! {
                                        <DoughnutChart
                                            payload=payload
                                            label="Inventory value by category"
                                        />
                                    }
                                })
                        }}
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3>"Stock Movement"</h3>
                        <button class="btn btn-secondary" on:click=export_movement>
                            "Export CSV"
                        </button>
                    </div>
                    <div class="card__body">
                        <div class="range-form">
                            <label>
                                <span>"Start"</span>
                                <input
                                    type="date"
                                    prop:value=move || start_input.get()
                                    on:input=move |ev| set_start_input.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                <span>"End"</span>
                                <input
                                    type="date"
                                    prop:value=move || end_input.get()
                                    on:input=move |ev| set_end_input.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn-primary" on:click=on_update_range>
                                "Update"
                            </button>
                        </div>
                        {move || {
                            range_error
                                .get()
                                .map(|e| view! { <div class="error">{e}</div> })
                        }}
                        {move || {
                            movement
                                .get()
                                .map(|payload| {
                                    view! {
                                        <LineChart
                                            payload=payload
                                            label="Net stock change per day"
                                        />
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>

            {move || {
                summary
                    .get()
                    .map(|s| {
                        view! {
                            <div class="report-tables">
                                <div class="card">
                                    <div class="card__header">
                                        <h3>"Low Stock"</h3>
                                        <button class="btn btn-secondary" on:click=export_low_stock>
                                            "Export CSV"
                                        </button>
                                    </div>
                                    <div class="table-container">
                                        <table id="low-stock-table">
                                            <thead>
                                                <tr>
                                                    <th>"Part Number"</th>
                                                    <th>"Description"</th>
                                                    <th>"Quantity"</th>
                                                    <th>"Minimum"</th>
                                                    <th>"Location"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {s
                                                    .low_stock
                                                    .iter()
                                                    .map(|row| {
                                                        view! {
                                                            <tr>
                                                                <td>{row.part_number.clone()}</td>
                                                                <td>{row.description.clone()}</td>
                                                                <td class="numeric">{row.current_quantity}</td>
                                                                <td class="numeric">{row.minimum_quantity}</td>
                                                                <td>{row.location.clone()}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
                                </div>

                                <div class="card">
                                    <div class="card__header">
                                        <h3>"Recent Transactions"</h3>
                                        <button class="btn btn-secondary" on:click=export_recent>
                                            "Export CSV"
                                        </button>
                                    </div>
                                    <div class="table-container">
                                        <table id="recent-transactions-table">
                                            <thead>
                                                <tr>
                                                    <th>"Date"</th>
                                                    <th>"Part Number"</th>
                                                    <th>"Type"</th>
                                                    <th>"Quantity"</th>
                                                    <th>"User"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {s
                                                    .recent_transactions
                                                    .iter()
                                                    .map(|row| {
                                                        let badge_class = format!(
                                                            "badge badge--{}",
                                                            row.transaction_type.badge_tone(),
                                                        );
                                                        view! {
                                                            <tr>
                                                                <td>{format_datetime(&row.transaction_date)}</td>
                                                                <td>{row.part_number.clone()}</td>
                                                                <td>
                                                                    <span class=badge_class>
                                                                        {row.transaction_type.as_str()}
                                                                    </span>
                                                                </td>
                                                                <td class="numeric">{row.quantity}</td>
                                                                <td>{row.user_id.clone()}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
