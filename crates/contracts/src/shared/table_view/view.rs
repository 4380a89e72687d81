use std::collections::BTreeMap;

use super::busy::{ActionStart, BusyMap};
use super::export::ExportScope;
use super::filter::{FilterSpec, FilterValue};
use super::paginator::{PageNav, Paginator};
use crate::domain::common::Record;
use crate::shared::action::{ActionKind, ActionState};
use crate::shared::error::ApiError;

/// What happens to the current page when the filters change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePolicy {
    /// Jump back to page 1
    #[default]
    ResetToFirst,
    /// Stay on the current page, clamped to the new page count
    PreserveCurrent,
}

/// Token of one list load. Only the latest ticket may land its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Состояние табличного представления одного датасета
///
/// `rows` — исходный список (источник истины), `visible` — индексы строк,
/// прошедших все активные фильтры, в исходном порядке.
#[derive(Debug, Clone)]
pub struct TableView<R: Record> {
    rows: Vec<R>,
    visible: Vec<usize>,
    specs: Vec<FilterSpec>,
    filters: BTreeMap<&'static str, FilterValue>,
    paginator: Paginator,
    policy: PagePolicy,
    busy: BusyMap,
    generation: u64,
    loading: bool,
}

impl<R: Record> TableView<R> {
    pub fn new(specs: Vec<FilterSpec>, page_size: usize, policy: PagePolicy) -> Self {
        Self {
            rows: Vec::new(),
            visible: Vec::new(),
            specs,
            filters: BTreeMap::new(),
            paginator: Paginator::new(page_size),
            policy,
            busy: BusyMap::new(),
            generation: 0,
            loading: false,
        }
    }

    // ============================================================================
    // Загрузка
    // ============================================================================

    /// Start a load. Any ticket handed out before this one becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Land a successful load. Returns false (and changes nothing) for a stale ticket.
    pub fn finish_load(&mut self, ticket: LoadTicket, rows: Vec<R>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.replace_rows(rows);
        true
    }

    /// A failed load leaves the current rows untouched.
    pub fn fail_load(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Patch every row of a landed load, then re-run the filters.
    ///
    /// Ignored (returns false) once a newer load has started.
    pub fn patch_rows(&mut self, ticket: LoadTicket, mut patch: impl FnMut(&mut R)) -> bool {
        if !self.is_current(ticket) || self.loading {
            return false;
        }
        self.rows.iter_mut().for_each(|row| patch(row));
        self.refilter();
        true
    }

    /// Replace the raw list wholesale and re-run the filters.
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refilter();
    }

    // ============================================================================
    // Фильтры
    // ============================================================================

    pub fn specs(&self) -> &[FilterSpec] {
        &self.specs
    }

    /// Set one filter value. Returns true when the view changed.
    ///
    /// Setting the value already in place is a no-op (page untouched);
    /// unknown filter names are ignored.
    pub fn set_filter(&mut self, name: &str, value: FilterValue) -> bool {
        let Some(spec_name) = self.specs.iter().find(|s| s.name == name).map(|s| s.name) else {
            return false;
        };
        let changed = if !value.is_active() {
            self.filters.remove(spec_name).is_some()
        } else if self.filters.get(spec_name) == Some(&value) {
            false
        } else {
            self.filters.insert(spec_name, value);
            true
        };
        if changed {
            self.on_filters_changed();
        }
        changed
    }

    pub fn clear_filter(&mut self, name: &str) -> bool {
        let changed = self.filters.remove(name).is_some();
        if changed {
            self.on_filters_changed();
        }
        changed
    }

    pub fn clear_filters(&mut self) -> bool {
        if self.filters.is_empty() {
            return false;
        }
        self.filters.clear();
        self.on_filters_changed();
        true
    }

    pub fn filter_value(&self, name: &str) -> Option<&FilterValue> {
        self.filters.get(name)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Active filter values in declaration order, joined for file names.
    pub fn active_filter_summary(&self) -> String {
        self.specs
            .iter()
            .filter_map(|spec| self.filters.get(spec.name))
            .map(FilterValue::summary)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }

    fn on_filters_changed(&mut self) {
        if self.policy == PagePolicy::ResetToFirst {
            self.paginator.reset();
        }
        self.refilter();
    }

    fn refilter(&mut self) {
        let specs = &self.specs;
        let filters = &self.filters;
        self.visible = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                specs.iter().all(|spec| {
                    filters
                        .get(spec.name)
                        .map_or(true, |value| spec.matches(value, *row))
                })
            })
            .map(|(idx, _)| idx)
            .collect();
        self.paginator.set_total(self.visible.len());
    }

    // ============================================================================
    // Чтение
    // ============================================================================

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn raw_len(&self) -> usize {
        self.rows.len()
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn filtered_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.visible.iter().map(move |idx| &self.rows[*idx])
    }

    /// Rows of the current page with their 1-based serial number in the filtered view.
    pub fn page_rows(&self) -> Vec<(usize, &R)> {
        let range = self.paginator.range();
        let start = range.start;
        self.visible[range]
            .iter()
            .enumerate()
            .map(|(offset, idx)| (start + offset + 1, &self.rows[*idx]))
            .collect()
    }

    pub fn find(&self, key: &str) -> Option<&R> {
        self.rows.iter().find(|row| row.record_key() == key)
    }

    /// Distinct non-empty values of a field over the raw list, in raw order.
    pub fn distinct_values(&self, field: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .filter_map(|row| row.field_value(field))
            .filter(|v| !v.trim().is_empty())
            .filter(|v| seen.insert(v.clone()))
            .collect()
    }

    pub fn export_rows(&self, scope: ExportScope) -> Vec<&R> {
        match scope {
            ExportScope::Filtered => self.filtered_rows().collect(),
            ExportScope::All => self.rows.iter().collect(),
        }
    }

    // ============================================================================
    // Изменения
    // ============================================================================

    /// Patch one row of the current raw list in place. Filters are not re-run.
    pub fn update_row(&mut self, key: &str, patch: impl FnOnce(&mut R)) -> bool {
        match self.rows.iter_mut().find(|row| row.record_key() == key) {
            Some(row) => {
                patch(row);
                true
            }
            None => false,
        }
    }

    // ============================================================================
    // Действия над строками
    // ============================================================================

    pub fn is_busy(&self, key: &str, kind: ActionKind) -> bool {
        self.busy.is_busy(key, kind)
    }

    /// Start one row action.
    ///
    /// `prepare` builds the request from the row's current values. The pair
    /// `(key, kind)` is marked busy only when the request was built.
    pub fn begin_action<Req>(
        &mut self,
        key: &str,
        kind: ActionKind,
        prepare: impl FnOnce(&R) -> Result<Req, ApiError>,
    ) -> ActionStart<Req> {
        if self.busy.is_busy(key, kind) {
            return ActionStart::AlreadyRunning;
        }
        let Some(row) = self.find(key) else {
            return ActionStart::RowMissing;
        };
        match prepare(row) {
            Ok(request) => {
                self.busy.begin(key, kind);
                ActionStart::Started(request)
            }
            Err(err) => ActionStart::Rejected(err),
        }
    }

    /// Finish one row action and clear its busy flag.
    ///
    /// On success `apply` patches the row as it is now in the raw list and
    /// returns the success message. A failed request leaves the row as is.
    /// `Idle` means the row is gone and there is nothing to report.
    pub fn complete_action<T>(
        &mut self,
        key: &str,
        kind: ActionKind,
        result: Result<T, ApiError>,
        apply: impl FnOnce(&mut R, T) -> Result<String, ApiError>,
    ) -> ActionState<String> {
        self.busy.finish(key, kind);
        let mut state = ActionState::Pending;
        let outcome = match result {
            Ok(value) => {
                let mut outcome = None;
                self.update_row(key, |row| outcome = Some(apply(row, value)));
                outcome
            }
            Err(err) => Some(Err(err)),
        };
        match outcome {
            Some(outcome) => {
                state.finish(outcome.map_err(|err| err.user_message(kind.failure_message())))
            }
            None => state.reset(),
        }
        state
    }

    // ============================================================================
    // Пагинация
    // ============================================================================

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn navigate(&mut self, nav: PageNav) {
        self.paginator.navigate(nav);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.paginator.set_page_size(page_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::export::{build_csv, export_filename, ExportColumn};
    use chrono::NaiveDate;

    #[derive(Clone, Debug, PartialEq)]
    struct Enrolment {
        id: String,
        name: String,
        course: String,
        created_at: String,
        note: String,
    }

    impl Record for Enrolment {
        fn record_key(&self) -> String {
            self.id.clone()
        }
        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                "course" => Some(self.course.clone()),
                "created_at" => Some(self.created_at.clone()),
                _ => None,
            }
        }
        fn dataset_index() -> &'static str {
            "t001"
        }
        fn dataset_name() -> &'static str {
            "enrolments"
        }
        fn list_name() -> &'static str {
            "Enrolments"
        }
    }

    fn rows(n: usize) -> Vec<Enrolment> {
        (1..=n)
            .map(|i| Enrolment {
                id: i.to_string(),
                name: format!("Student {i}"),
                course: if i % 3 == 0 { "Data Science" } else { "Web Development" }.to_string(),
                created_at: format!("2025-01-{:02}T10:00:00Z", (i % 28) + 1),
                note: String::new(),
            })
            .collect()
    }

    fn specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::text("search", "Search", &["name"]),
            FilterSpec::exact("course", "Course", "course"),
            FilterSpec::date_range("created", "Created", "created_at"),
        ]
    }

    fn loaded(n: usize, policy: PagePolicy) -> TableView<Enrolment> {
        let mut view = TableView::new(specs(), 10, policy);
        let ticket = view.begin_load();
        assert!(view.finish_load(ticket, rows(n)));
        view
    }

    fn keys(view: &TableView<Enrolment>) -> Vec<String> {
        view.filtered_rows().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_pages_of_25_rows() {
        let mut view = loaded(25, PagePolicy::ResetToFirst);
        let first: Vec<usize> = view.page_rows().iter().map(|(n, _)| *n).collect();
        assert_eq!(first, (1..=10).collect::<Vec<_>>());

        view.navigate(PageNav::To(3));
        let third: Vec<&str> = view.page_rows().iter().map(|(_, r)| r.id.as_str()).collect();
        assert_eq!(third, vec!["21", "22", "23", "24", "25"]);
        assert!(!view.paginator().has_next());
    }

    #[test]
    fn test_filtered_is_subset_and_clear_restores() {
        let mut view = loaded(30, PagePolicy::ResetToFirst);
        let all = keys(&view);

        view.set_filter("course", FilterValue::term("Data Science"));
        view.set_filter("search", FilterValue::term("student 1"));
        for row in view.filtered_rows() {
            assert_eq!(row.course, "Data Science");
            assert!(row.name.to_lowercase().contains("student 1"));
            assert!(view.rows().contains(row));
        }
        assert_eq!(keys(&view), vec!["12", "15", "18"]);

        assert!(view.clear_filters());
        assert_eq!(keys(&view), all);
        assert!(!view.clear_filters());
    }

    #[test]
    fn test_no_matches_shows_one_empty_page() {
        let mut view = loaded(25, PagePolicy::ResetToFirst);
        view.set_filter("search", FilterValue::term("nobody"));
        assert_eq!(view.filtered_len(), 0);
        assert_eq!(view.paginator().display_total(), 1);
        assert_eq!(view.paginator().page(), 1);
        assert!(view.page_rows().is_empty());
    }

    #[test]
    fn test_same_filter_twice_is_idempotent() {
        let mut view = loaded(25, PagePolicy::ResetToFirst);
        assert!(view.set_filter("course", FilterValue::term("Web Development")));
        let once = keys(&view);
        view.navigate(PageNav::Next);

        assert!(!view.set_filter("course", FilterValue::term("Web Development")));
        assert_eq!(keys(&view), once);
        assert_eq!(view.paginator().page(), 2);

        assert!(!view.set_filter("unknown", FilterValue::term("x")));
        assert!(!view.set_filter("search", FilterValue::term("  ")));
    }

    #[test]
    fn test_page_policy_on_filter_change() {
        let mut reset = loaded(50, PagePolicy::ResetToFirst);
        reset.navigate(PageNav::To(3));
        reset.set_filter("course", FilterValue::term("Web Development"));
        assert_eq!(reset.paginator().page(), 1);

        let mut keep = loaded(50, PagePolicy::PreserveCurrent);
        keep.navigate(PageNav::To(3));
        keep.set_filter("course", FilterValue::term("Web Development"));
        assert_eq!(keep.paginator().page(), 3);

        // 16 Data Science rows -> 2 pages, clamp
        keep.set_filter("course", FilterValue::term("Data Science"));
        assert_eq!(keep.paginator().page(), 2);
    }

    #[test]
    fn test_date_range_filter_in_view() {
        let mut view = loaded(0, PagePolicy::ResetToFirst);
        let mut data = rows(2);
        data[0].created_at = "2025-01-31T23:59:59".into();
        data[1].created_at = "2025-02-01T00:00:01".into();
        view.replace_rows(data);

        view.set_filter("created", FilterValue::range_from_inputs("2025-01-01", "2025-01-31"));
        assert_eq!(keys(&view), vec!["1"]);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut view: TableView<Enrolment> = TableView::new(specs(), 10, PagePolicy::ResetToFirst);
        let first = view.begin_load();
        let second = view.begin_load();

        assert!(view.finish_load(second, rows(3)));
        assert!(!view.finish_load(first, rows(40)));
        assert_eq!(view.raw_len(), 3);
        assert!(!view.is_loading());

        let third = view.begin_load();
        assert!(view.is_loading());
        assert!(view.fail_load(third));
        assert_eq!(view.raw_len(), 3);
    }

    #[test]
    fn test_update_row_survives_filtering() {
        let mut view = loaded(9, PagePolicy::ResetToFirst);
        view.set_filter("course", FilterValue::term("Data Science"));
        assert!(view.update_row("6", |r| r.note = "called back".into()));
        assert!(!view.update_row("missing", |r| r.note = "x".into()));

        view.clear_filters();
        view.set_filter("course", FilterValue::term("Data Science"));
        let six = view.filtered_rows().find(|r| r.id == "6").unwrap();
        assert_eq!(six.note, "called back");
    }

    #[test]
    fn test_enrichment_patch_respects_ticket() {
        let mut view: TableView<Enrolment> = TableView::new(specs(), 10, PagePolicy::ResetToFirst);
        let first = view.begin_load();
        assert!(view.finish_load(first, rows(3)));
        assert!(view.patch_rows(first, |r| r.course = "Data Science".into()));
        view.set_filter("course", FilterValue::term("Data Science"));
        assert_eq!(view.filtered_len(), 3);

        let second = view.begin_load();
        // a follow-up of the first load must not touch the reload
        assert!(!view.patch_rows(first, |r| r.note = "late".into()));
        assert!(!view.patch_rows(second, |r| r.note = "early".into()));
        assert!(view.finish_load(second, rows(2)));
        assert!(view.rows().iter().all(|r| r.note.is_empty()));
    }

    fn note_request(row: &Enrolment) -> Result<String, ApiError> {
        if row.name.trim().is_empty() {
            return Err(ApiError::validation("Please enter a name"));
        }
        Ok(format!("note for {}", row.id))
    }

    #[test]
    fn test_rejected_action_never_becomes_busy() {
        let mut view = loaded(3, PagePolicy::ResetToFirst);
        view.update_row("2", |r| r.name = "  ".into());

        let start = view.begin_action("2", ActionKind::UpdateLead, note_request);
        assert_eq!(start, ActionStart::Rejected(ApiError::validation("Please enter a name")));
        assert!(!view.is_busy("2", ActionKind::UpdateLead));

        assert_eq!(
            view.begin_action("missing", ActionKind::UpdateLead, note_request),
            ActionStart::RowMissing
        );
        assert!(!view.is_busy("missing", ActionKind::UpdateLead));
    }

    #[test]
    fn test_failed_action_clears_busy_and_keeps_row() {
        let mut view = loaded(3, PagePolicy::ResetToFirst);
        let start = view.begin_action("1", ActionKind::UpdateLead, note_request);
        assert_eq!(start, ActionStart::Started("note for 1".to_string()));
        assert!(view.is_busy("1", ActionKind::UpdateLead));
        assert_eq!(
            view.begin_action("1", ActionKind::UpdateLead, note_request),
            ActionStart::AlreadyRunning
        );

        let before = view.find("1").cloned();
        let state = view.complete_action(
            "1",
            ActionKind::UpdateLead,
            Err::<String, _>(ApiError::Network("offline".into())),
            |row, note| {
                row.note = note;
                Ok("Lead updated".into())
            },
        );
        assert_eq!(
            state.error(),
            Some("Failed to update lead. No response from server, please try again.")
        );
        assert!(!view.is_busy("1", ActionKind::UpdateLead));
        assert_eq!(view.find("1").cloned(), before);
    }

    #[test]
    fn test_success_patches_rows_replaced_mid_flight() {
        let mut view = loaded(3, PagePolicy::ResetToFirst);
        let ActionStart::Started(request) = view.begin_action("2", ActionKind::UpdateLead, note_request) else {
            panic!("action did not start");
        };
        assert!(matches!(
            view.begin_action("3", ActionKind::UpdateLead, note_request),
            ActionStart::Started(_)
        ));

        // a reload lands while the request is in flight
        let mut fresh = rows(3);
        fresh[1].name = "Renamed".into();
        view.replace_rows(fresh);

        let state = view.complete_action("2", ActionKind::UpdateLead, Ok(request), |row, note| {
            row.note = note;
            Ok("Lead updated".into())
        });
        assert_eq!(state.value().map(String::as_str), Some("Lead updated"));
        let row = view.find("2").unwrap();
        assert_eq!(row.name, "Renamed");
        assert_eq!(row.note, "note for 2");

        // the other row is still in flight
        assert!(!view.is_busy("2", ActionKind::UpdateLead));
        assert!(view.is_busy("3", ActionKind::UpdateLead));
    }

    #[test]
    fn test_apply_error_is_reported_after_patch() {
        let mut view = loaded(2, PagePolicy::ResetToFirst);
        assert!(matches!(
            view.begin_action("1", ActionKind::GenerateCertificate, note_request),
            ActionStart::Started(_)
        ));
        let state = view.complete_action("1", ActionKind::GenerateCertificate, Ok("cert.pdf"), |row, url| {
            row.note = url.to_string();
            Err(ApiError::Business("Certificate already generated.".into()))
        });
        assert_eq!(state.error(), Some("Certificate already generated."));
        assert_eq!(view.find("1").unwrap().note, "cert.pdf");

        // row removed by a reload: nothing to report
        assert!(matches!(
            view.begin_action("2", ActionKind::GenerateCertificate, note_request),
            ActionStart::Started(_)
        ));
        view.replace_rows(rows(1));
        let state = view.complete_action("2", ActionKind::GenerateCertificate, Ok("x.pdf"), |row, url| {
            row.note = url.to_string();
            Ok("Certificate generated".into())
        });
        assert_eq!(state, ActionState::Idle);
        assert!(!view.is_busy("2", ActionKind::GenerateCertificate));
    }

    #[test]
    fn test_distinct_values_in_raw_order() {
        let view = loaded(6, PagePolicy::ResetToFirst);
        assert_eq!(view.distinct_values("course"), vec!["Web Development", "Data Science"]);
        assert!(view.distinct_values("unknown").is_empty());
    }

    #[test]
    fn test_filtered_export_under_course_filter() {
        let mut view = loaded(30, PagePolicy::PreserveCurrent);
        view.set_filter("course", FilterValue::term("Data Science"));

        let columns = [
            ExportColumn::<Enrolment> { header: "Name", value: |r| r.name.clone() },
            ExportColumn::<Enrolment> { header: "Course", value: |r| r.course.clone() },
        ];
        let data = view.export_rows(ExportScope::Filtered);
        let csv = build_csv(&data, &columns).unwrap();
        assert_eq!(csv.lines().count(), 1 + view.filtered_len());
        assert_eq!(view.export_rows(ExportScope::All).len(), 30);

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let name = export_filename(Enrolment::dataset_name(), &view.active_filter_summary(), date);
        assert_eq!(name, "enrolments_data-science_2025-03-01.csv");
    }
}
