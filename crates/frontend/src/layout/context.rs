use leptos::prelude::*;

/// Top-level screens reachable from the header nav.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Inventory,
    Transactions,
    ImportCsv,
    Reports,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Inventory,
        Page::Transactions,
        Page::ImportCsv,
        Page::Reports,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Inventory => "Inventory",
            Page::Transactions => "Transactions",
            Page::ImportCsv => "Import",
            Page::Reports => "Reports",
        }
    }
}

/// App-wide UI state shared through context.
///
/// The active component id is NOT here: dialogs receive it explicitly through
/// their open calls, so nothing outlives the interaction that needed it.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub active_page: RwSignal<Page>,
    /// Settled global search text; the parts table filters and ranks on it.
    pub search_query: RwSignal<String>,
    /// Bumped whenever the parts table must re-fetch (stock adjusted, import done).
    pub inventory_epoch: RwSignal<u64>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::default()),
            search_query: RwSignal::new(String::new()),
            inventory_epoch: RwSignal::new(0),
        }
    }

    pub fn open(&self, page: Page) {
        self.active_page.set(page);
    }

    pub fn refresh_inventory(&self) {
        self.inventory_epoch.update(|n| *n += 1);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not provided in context")
}
