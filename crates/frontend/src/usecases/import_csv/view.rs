use super::api;
use crate::layout::context::{use_app_context, Page};
use crate::layout::notifications::NotificationService;
use contracts::import_csv::{ImportPhase, ImportStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

const POLL_INTERVAL_MS: u32 = 2000;
/// ~5 minutes at the poll interval; a stuck server does not get polled forever.
const MAX_POLL_TICKS: u32 = 150;
const NAVIGATE_DELAY_MS: u32 = 1500;

/// CSV import page: pick a file, upload, watch the progress bar to the end.
#[component]
#[allow(non_snake_case)]
pub fn ImportWidget() -> impl IntoView {
    let app = use_app_context();
    let notify =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let (is_uploading, set_is_uploading) = signal(false);
    let (is_polling, set_is_polling) = signal(false);
    let (progress, set_progress) = signal(None::<ImportStatus>);
    let (error_msg, set_error_msg) = signal(String::new());
    let (file_name, set_file_name) = signal(String::new());
    // web_sys::File is not Send+Sync, keep it thread-local.
    let selected_file = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|list| list.get(0));
        set_file_name.set(file.as_ref().map(|f| f.name()).unwrap_or_default());
        selected_file.set_value(file);
    };

    let on_import = move |_| {
        let Some(file) = selected_file.get_value() else {
            set_error_msg.set("No file selected".to_string());
            return;
        };

        set_error_msg.set(String::new());
        set_progress.set(None);
        set_is_uploading.set(true);

        spawn_local(async move {
            let form = match web_sys::FormData::new() {
                Ok(form) => form,
                Err(e) => {
                    set_error_msg.set(format!("Failed to build form data: {:?}", e));
                    set_is_uploading.set(false);
                    return;
                }
            };
            if let Err(e) = form.append_with_blob("file", &file) {
                set_error_msg.set(format!("Failed to attach file: {:?}", e));
                set_is_uploading.set(false);
                return;
            }

            match api::upload_csv(&form).await {
                Ok(ack) if !ack.success => {
                    set_error_msg.set(
                        ack.message
                            .unwrap_or_else(|| "Import was not accepted".to_string()),
                    );
                    set_is_uploading.set(false);
                }
                Ok(ack) => {
                    if let Some(message) = ack.message {
                        notify.success(message);
                    }
                    set_is_uploading.set(false);
                    set_is_polling.set(true);

                    let mut ticks = 0u32;
                    loop {
                        match api::fetch_status().await {
                            Ok(status) => {
                                let terminal = status.is_terminal();
                                let failed = status.status == ImportPhase::Error;
                                let message = status.message.clone();
                                set_progress.set(Some(status));

                                if terminal {
                                    set_is_polling.set(false);
                                    if failed {
                                        notify.error(message);
                                    } else {
                                        notify.success("Import completed");
                                    }
                                    TimeoutFuture::new(NAVIGATE_DELAY_MS).await;
                                    app.refresh_inventory();
                                    app.open(Page::Inventory);
                                    break;
                                }
                            }
                            Err(e) => {
                                // Transport failure ends the poll; the operator
                                // re-triggers the import if needed.
                                set_is_polling.set(false);
                                set_error_msg
                                    .set(format!("Error polling import status: {}", e));
                                break;
                            }
                        }

                        ticks += 1;
                        if ticks >= MAX_POLL_TICKS {
                            set_is_polling.set(false);
                            set_error_msg.set("Import status polling timed out".to_string());
                            break;
                        }
                        TimeoutFuture::new(POLL_INTERVAL_MS).await;
                    }
                }
                Err(e) => {
                    set_error_msg.set(format!("Error importing CSV: {}", e));
                    set_is_uploading.set(false);
                }
            }
        });
    };

    let import_disabled =
        Signal::derive(move || is_uploading.get() || is_polling.get());

    view! {
        <div class="content content--narrow">
            <div class="card">
                <div class="card__body">
                    <h2 class="section-title">"Import inventory from CSV"</h2>
                    <p class="muted">
                        "Expected columns: supplier, part number, description, quantity, location."
                    </p>

                    <label class="dialog__field">
                        <span>"CSV file"</span>
                        <input type="file" accept=".csv" on:change=on_file_change />
                    </label>
                    {move || {
                        let name = file_name.get();
                        (!name.is_empty())
                            .then(|| view! { <p class="muted">{format!("Selected: {}", name)}</p> })
                    }}

                    <button
                        class="btn btn-primary"
                        disabled=import_disabled
                        on:click=on_import
                    >
                        {move || {
                            if is_uploading.get() {
                                "Uploading..."
                            } else if is_polling.get() {
                                "Import running"
                            } else {
                                "Import"
                            }
                        }}
                    </button>

                    {move || {
                        let message = error_msg.get();
                        (!message.is_empty()).then(|| view! { <div class="error">{message}</div> })
                    }}

                    {move || {
                        progress
                            .get()
                            .map(|status| {
                                let percent = status.percent();
                                let bar_class = match status.status {
                                    ImportPhase::Running => "progress__bar",
                                    ImportPhase::Completed => "progress__bar progress__bar--success",
                                    ImportPhase::Error => "progress__bar progress__bar--danger",
                                };
                                view! {
                                    <div class="progress">
                                        <div
                                            class=bar_class
                                            style=format!("width: {}%;", percent)
                                        ></div>
                                    </div>
                                    <p class="muted">
                                        {format!(
                                            "{}% — {} ({}/{} rows)",
                                            percent,
                                            status.message,
                                            status.current_row,
                                            status.total_rows,
                                        )}
                                    </p>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
