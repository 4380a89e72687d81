use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{parse_amount, string_or_number};
use crate::domain::common::Record;
use crate::shared::date_utils::format_readable;
use crate::shared::table_view::{ExportColumn, FilterSpec};

/// Заказ (оплата курса)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub program_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub course_title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount_received: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub total_amount: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub payment_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub created_at: String,
}

/// Оттенок бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
}

impl Order {
    pub fn received(&self) -> f64 {
        parse_amount(&self.amount_received)
    }

    pub fn total(&self) -> f64 {
        parse_amount(&self.total_amount)
    }

    /// Outstanding amount, `total - received`
    pub fn pending_amount(&self) -> f64 {
        self.total() - self.received()
    }

    /// Course title, falling back to the program id
    pub fn course_label(&self) -> &str {
        if self.course_title.trim().is_empty() {
            &self.program_id
        } else {
            &self.course_title
        }
    }

    pub fn status_tone(&self) -> StatusTone {
        match self.status.to_lowercase().as_str() {
            "success" | "paid" => StatusTone::Success,
            "pending" => StatusTone::Warning,
            _ => StatusTone::Danger,
        }
    }
}

impl Record for Order {
    fn record_key(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value: &str = match field {
            "id" => &self.id,
            "name" => &self.name,
            "email" => &self.email,
            "program_id" => &self.program_id,
            "course_title" => self.course_label(),
            "amount_received" => &self.amount_received,
            "total_amount" => &self.total_amount,
            "payment_type" => &self.payment_type,
            "status" => &self.status,
            "created_at" => &self.created_at,
            _ => return None,
        };
        Some(value.to_string())
    }

    fn dataset_index() -> &'static str {
        "a003"
    }

    fn dataset_name() -> &'static str {
        "orders"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

pub fn filter_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::text("search", "Search by name or email", &["name", "email"]),
        FilterSpec::exact("course", "All Courses", "course_title"),
        FilterSpec::exact("payment_type", "All Payment Types", "payment_type"),
        FilterSpec::exact_ignore_case("status", "All Statuses", "status"),
        FilterSpec::date_range("created", "Created", "created_at"),
    ]
}

/// Колонки выгрузки заказов
pub fn export_columns() -> Vec<ExportColumn<Order>> {
    vec![
        ExportColumn { header: "Order ID", value: |o: &Order| o.id.clone() },
        ExportColumn { header: "Name", value: |o: &Order| o.name.clone() },
        ExportColumn { header: "Email", value: |o: &Order| o.email.clone() },
        ExportColumn { header: "Course", value: |o: &Order| o.course_label().to_string() },
        ExportColumn { header: "Amount Received", value: |o: &Order| format!("{:.2}", o.received()) },
        ExportColumn { header: "Total Amount", value: |o: &Order| format!("{:.2}", o.total()) },
        ExportColumn { header: "Pending Amount", value: |o: &Order| format!("{:.2}", o.pending_amount()) },
        ExportColumn { header: "Payment Type", value: |o: &Order| o.payment_type.clone() },
        ExportColumn { header: "Status", value: |o: &Order| o.status.clone() },
        ExportColumn { header: "Created At", value: |o: &Order| format_readable(&o.created_at) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{
        build_csv, export_filename, ExportScope, FilterValue, PageNav, PagePolicy, TableView,
    };
    use chrono::NaiveDate;

    fn order(i: usize, course: &str) -> Order {
        Order {
            id: i.to_string(),
            name: format!("Buyer {i}"),
            email: format!("buyer{i}@example.com"),
            program_id: "p1".into(),
            course_title: course.into(),
            amount_received: "1,000".into(),
            total_amount: "4,999.50".into(),
            payment_type: if i % 2 == 0 { "EMI" } else { "Full" }.into(),
            status: "success".into(),
            created_at: format!("2025-01-{:02}T09:30:00Z", (i % 28) + 1),
        }
    }

    #[test]
    fn test_pending_amount_and_fallbacks() {
        let mut o = order(1, "");
        assert_eq!(o.pending_amount(), 3999.5);
        assert_eq!(o.course_label(), "p1");
        assert_eq!(o.field_value("course_title").as_deref(), Some("p1"));

        o.status = "FAILED".into();
        assert_eq!(o.status_tone(), StatusTone::Danger);
        o.status = "Pending".into();
        assert_eq!(o.status_tone(), StatusTone::Warning);
    }

    #[test]
    fn test_decode_numeric_amounts() {
        let json = r#"{"id": 3, "email": "a@b.c", "program_id": 17, "amount_received": null, "total_amount": 2500, "payment_type": "Full", "status": "pending"}"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.program_id, "17");
        assert_eq!(o.received(), 0.0);
        assert_eq!(o.pending_amount(), 2500.0);
    }

    #[test]
    fn test_orders_keep_page_and_export_filtered() {
        let rows: Vec<Order> = (1..=25)
            .map(|i| order(i, if i <= 12 { "Data Science" } else { "Web Development" }))
            .collect();
        let mut view = TableView::new(filter_specs(), 10, PagePolicy::PreserveCurrent);
        let ticket = view.begin_load();
        view.finish_load(ticket, rows);

        view.navigate(PageNav::To(3));
        assert_eq!(view.page_rows().len(), 5);
        assert!(!view.paginator().has_next());

        // 13 web development orders -> 2 pages, page clamps from 3 to 2
        view.set_filter("course", FilterValue::term("Web Development"));
        assert_eq!(view.paginator().page(), 2);

        view.set_filter("course", FilterValue::term("Data Science"));
        let data = view.export_rows(ExportScope::Filtered);
        let csv = build_csv(&data, &export_columns()).unwrap();
        assert_eq!(csv.lines().count(), 1 + 12);
        assert!(csv.lines().nth(1).unwrap().contains(";3999.50;"));

        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let name = export_filename(Order::dataset_name(), &view.active_filter_summary(), date);
        assert_eq!(name, "orders_data-science_2025-02-01.csv");
    }
}
