//! Reactive binding of `contracts::shared::table_view::TableView`.
//!
//! One `TableState` per mounted list page. It owns the view (rows, filters,
//! per-row busy flags) and the page `Lifetime`; responses that arrive after
//! the page is closed, or after a newer load started, are dropped.

use std::future::Future;

use chrono::Local;
use contracts::domain::common::Record;
use contracts::shared::action::{ActionKind, ActionState, Lifetime};
use contracts::shared::error::ApiError;
use contracts::shared::table_view::{
    build_csv, export_filename, ActionStart, ExportColumn, ExportError, ExportScope, FilterSpec,
    FilterValue, LoadTicket, PageNav, PagePolicy, TableView,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::use_config;
use super::export::download_csv;
use super::toast::{use_toasts, Toasts};

pub struct TableState<R>
where
    R: Record + Send + Sync + 'static,
{
    pub view: RwSignal<TableView<R>>,
    pub exporting: RwSignal<bool>,
    pub page_size_options: StoredValue<Vec<usize>>,
    pub window_radius: usize,
    toasts: Toasts,
    lifetime: StoredValue<Lifetime>,
}

impl<R> Clone for TableState<R>
where
    R: Record + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for TableState<R> where R: Record + Send + Sync + 'static {}

/// Create the table state for a page. Must run inside the page component.
pub fn use_table_state<R>(specs: Vec<FilterSpec>, policy: PagePolicy) -> TableState<R>
where
    R: Record + Send + Sync + 'static,
{
    let config = use_config();
    let lifetime = Lifetime::new();
    let on_unmount = lifetime.clone();
    on_cleanup(move || on_unmount.cancel());

    TableState {
        view: RwSignal::new(TableView::new(specs, config.table.page_size, policy)),
        exporting: RwSignal::new(false),
        page_size_options: StoredValue::new(config.table.page_size_options),
        window_radius: config.table.page_window_radius,
        toasts: use_toasts(),
        lifetime: StoredValue::new(lifetime),
    }
}

impl<R> TableState<R>
where
    R: Record + Send + Sync + 'static,
{
    pub fn toasts(&self) -> Toasts {
        self.toasts
    }

    /// Start a list load. Only the most recent load may land its rows.
    pub fn load<Fut>(self, request: Fut)
    where
        Fut: Future<Output = Result<Vec<R>, ApiError>> + 'static,
    {
        self.load_then(request, |_, _| ());
    }

    /// Like `load`; `then` sees the landed rows with the load's ticket.
    pub fn load_then<Fut, F>(self, request: Fut, then: F)
    where
        Fut: Future<Output = Result<Vec<R>, ApiError>> + 'static,
        F: FnOnce(LoadTicket, &[R]) + 'static,
    {
        let Some(ticket) = self.view.try_update(|v| v.begin_load()) else {
            return;
        };
        let lifetime = self.lifetime.get_value();

        spawn_local(async move {
            let result = request.await;
            if !lifetime.is_active() {
                log::debug!("{}: page closed, response dropped", R::list_name());
                return;
            }
            match result {
                Ok(rows) => {
                    let count = rows.len();
                    let landed = self
                        .view
                        .try_update(|v| v.finish_load(ticket, rows))
                        .unwrap_or(false);
                    if landed {
                        log::info!("{}: loaded {} rows", R::list_name(), count);
                        self.view.with_untracked(|v| then(ticket, v.rows()));
                    } else {
                        log::debug!("{}: stale response dropped", R::list_name());
                    }
                }
                Err(err) => {
                    log::error!("Failed to load {}: {}", R::list_name(), err);
                    self.view.try_update(|v| v.fail_load(ticket));
                }
            }
        });
    }

    /// Second request for a landed load; `merge` runs over every row.
    ///
    /// Dropped when the page closed or a newer load started meanwhile.
    pub fn enrich<T, Fut, M>(self, ticket: LoadTicket, request: Fut, failure: &'static str, merge: M)
    where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        M: Fn(&mut R, &T) + 'static,
    {
        let lifetime = self.lifetime.get_value();
        spawn_local(async move {
            let result = request.await;
            if !lifetime.is_active() {
                return;
            }
            match result {
                Ok(data) => {
                    let patched = self
                        .view
                        .try_update(|v| v.patch_rows(ticket, |row| merge(row, &data)))
                        .unwrap_or(false);
                    if !patched {
                        log::debug!("{}: stale follow-up dropped", R::list_name());
                    }
                }
                Err(err) => {
                    log::error!("{}: follow-up failed: {}", R::list_name(), err);
                    self.toasts.api_error(&err, failure);
                }
            }
        });
    }

    pub fn set_filter(&self, name: &str, value: FilterValue) {
        self.view.maybe_update(|v| v.set_filter(name, value));
    }

    pub fn set_term(&self, name: &str, term: String) {
        self.set_filter(name, FilterValue::term(term));
    }

    pub fn clear_filters(&self) {
        self.view.maybe_update(|v| v.clear_filters());
    }

    pub fn navigate(&self, nav: PageNav) {
        self.view.update(|v| v.navigate(nav));
    }

    pub fn set_page_size(&self, size: usize) {
        self.view.update(|v| v.set_page_size(size));
    }

    /// Edit a client-side field of one row.
    pub fn edit(&self, key: &str, patch: impl FnOnce(&mut R)) {
        self.view.update(|v| {
            v.update_row(key, patch);
        });
    }

    /// Serial numbers and keys of the visible page, for keyed `<For>` rows.
    pub fn page_keys(&self) -> Vec<(usize, String)> {
        self.view.with(|v| {
            v.page_rows()
                .into_iter()
                .map(|(serial, row)| (serial, row.record_key()))
                .collect()
        })
    }

    /// Tracked read of one row; `None` once the row is gone.
    pub fn row<T>(&self, key: &str, read: impl FnOnce(&R) -> T) -> Option<T> {
        self.view.with(|v| v.find(key).map(read))
    }

    /// "12 of 40 records" for the page header.
    pub fn count_label(&self) -> Signal<Option<String>> {
        let view = self.view;
        Signal::derive(move || {
            view.with(|v| Some(format!("{} of {} records", v.filtered_len(), v.raw_len())))
        })
    }

    pub fn is_loading(&self) -> bool {
        self.view.with(|v| v.is_loading())
    }

    pub fn is_busy(&self, key: &str, kind: ActionKind) -> bool {
        self.view.with(|v| v.is_busy(key, kind))
    }

    /// Run one row action.
    ///
    /// `prepare` builds the request from the row's current values; an error
    /// from it is shown as a toast and nothing is sent. `apply` patches the
    /// row with the response and returns the success message, or an error
    /// to report after the patch.
    pub fn dispatch<T, Fut, P, A>(self, key: &str, kind: ActionKind, prepare: P, apply: A)
    where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        P: FnOnce(&R) -> Result<Fut, ApiError>,
        A: FnOnce(&mut R, T) -> Result<String, ApiError> + 'static,
    {
        let start = self
            .view
            .try_update(|v| v.begin_action(key, kind, prepare))
            .unwrap_or(ActionStart::RowMissing);
        let request = match start {
            ActionStart::Started(request) => request,
            ActionStart::Rejected(err) => {
                self.toasts.api_error(&err, kind.failure_message());
                return;
            }
            ActionStart::AlreadyRunning => {
                log::debug!("{:?} already running for {}", kind, key);
                return;
            }
            ActionStart::RowMissing => {
                log::warn!("{}: row {} not found", R::list_name(), key);
                return;
            }
        };

        let key = key.to_string();
        let lifetime = self.lifetime.get_value();
        spawn_local(async move {
            let result = request.await;
            if !lifetime.is_active() {
                return;
            }
            if let Err(err) = &result {
                log::warn!("{:?} failed for {}: {}", kind, key, err);
            }
            let state = self
                .view
                .try_update(|v| v.complete_action(&key, kind, result, apply))
                .unwrap_or_default();
            match state {
                ActionState::Succeeded(message) => {
                    log::info!("{:?} done for {}", kind, key);
                    self.toasts.success(message);
                }
                ActionState::Failed(message) => self.toasts.error(message),
                ActionState::Idle | ActionState::Pending => {
                    log::warn!("{}: row {} is gone, result dropped", R::list_name(), key)
                }
            }
        });
    }

    /// Build the CSV for `scope` and hand it to the browser.
    pub fn export(self, scope: ExportScope, columns: &[ExportColumn<R>]) {
        self.exporting.set(true);
        let today = Local::now().date_naive();
        let result = self
            .view
            .with_untracked(|v| {
                let rows = v.export_rows(scope);
                let csv = build_csv(&rows, columns)?;
                let summary = match scope {
                    ExportScope::Filtered => v.active_filter_summary(),
                    ExportScope::All => String::new(),
                };
                Ok::<_, ExportError>((csv, export_filename(R::dataset_name(), &summary, today)))
            })
            .and_then(|(csv, filename)| {
                download_csv(&csv, &filename).map_err(ExportError::Download)?;
                Ok(filename)
            });
        self.exporting.set(false);

        match result {
            Ok(filename) => {
                log::info!("Exported {}", filename);
                self.toasts.success(format!("Exported {}", filename));
            }
            Err(err) => {
                log::warn!("{} export failed: {}", R::list_name(), err);
                self.toasts.error(err.to_string());
            }
        }
    }
}
