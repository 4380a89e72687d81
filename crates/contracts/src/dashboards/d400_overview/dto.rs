use serde_json::Value;

/// Карточки обзорной панели
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewMetric {
    Users,
    Orders,
    Leads,
}

impl OverviewMetric {
    pub const ALL: [OverviewMetric; 3] = [OverviewMetric::Users, OverviewMetric::Orders, OverviewMetric::Leads];

    pub fn label(&self) -> &'static str {
        match self {
            OverviewMetric::Users => "Registered Users",
            OverviewMetric::Orders => "Orders",
            OverviewMetric::Leads => "Leads",
        }
    }

    /// List endpoint whose length is the metric
    pub fn endpoint(&self) -> &'static str {
        match self {
            OverviewMetric::Users => "/api/getAllUsers",
            OverviewMetric::Orders => "/api/orders",
            OverviewMetric::Leads => "/api/getAllEnquiry",
        }
    }
}

/// Number of records in a list payload: a bare array or `{ "data": [...] }`.
pub fn count_items(payload: &Value) -> usize {
    match payload {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.get("data").and_then(Value::as_array).map_or(0, Vec::len),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_items() {
        assert_eq!(count_items(&json!([{"id": 1}, {"id": 2}])), 2);
        assert_eq!(count_items(&json!({"data": [1, 2, 3]})), 3);
        assert_eq!(count_items(&json!({"message": "ok"})), 0);
        assert_eq!(count_items(&json!(null)), 0);
    }

    #[test]
    fn test_metrics_have_distinct_endpoints() {
        let endpoints: std::collections::HashSet<_> = OverviewMetric::ALL.iter().map(|m| m.endpoint()).collect();
        assert_eq!(endpoints.len(), 3);
    }
}
