use crate::shared::icons::icon;
use leptos::prelude::*;

/// Result of loading one metric card
#[derive(Clone, Debug, PartialEq)]
pub enum CardValue {
    Loading,
    Ready(usize),
    Failed,
}

/// Group digits by thousands: 12345 -> "12,345"
fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<CardValue>,
) -> impl IntoView {
    let status_class = move || match value.get() {
        CardValue::Failed => "stat-card stat-card--error",
        _ => "stat-card",
    };

    let formatted = move || match value.get() {
        CardValue::Loading => "...".to_string(),
        CardValue::Ready(n) => format_count(n),
        CardValue::Failed => "-".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || (value.get() == CardValue::Failed).then(|| view! {
                    <div class="stat-card__subtitle">"Could not load"</div>
                })}
            </div>
        </div>
    }
}
