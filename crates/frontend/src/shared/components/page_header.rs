use leptos::prelude::*;

/// PageHeader - title row of a tab page with an action slot on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Optional subtitle, e.g. "42 of 120 records"
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <span class="page__subtitle">{s}</span>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
