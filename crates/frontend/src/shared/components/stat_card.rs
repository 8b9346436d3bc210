use leptos::prelude::*;

fn format_thousands(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Single counter tile of the dashboard summary
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Counter value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<u32>>,
    /// Optional modifier, e.g. "success"
    #[prop(optional)]
    variant: Option<&'static str>,
) -> impl IntoView {
    let class = match variant {
        Some(variant) => format!("stat-card stat-card--{}", variant),
        None => "stat-card".to_string(),
    };

    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
