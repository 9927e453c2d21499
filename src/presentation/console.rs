use leptos::*;

use crate::domain::activity::{ActivityCategory, ActivityEntry};
use crate::domain::state::DashboardState;

fn entries(state: RwSignal<DashboardState>, category: Option<ActivityCategory>) -> Vec<ActivityEntry> {
    state.with(|s| match category {
        Some(category) => s.activity.filter_by_category(category).cloned().collect(),
        None => s.activity.iter().cloned().collect(),
    })
}

/// 🎯 Activity feed, newest first. With `category` set only that slice of
/// the ring buffer is shown; `rate` adds a live throughput line.
#[component]
pub fn ActivityConsole(
    state: RwSignal<DashboardState>,
    title: &'static str,
    #[prop(optional)] category: Option<ActivityCategory>,
    #[prop(optional)] rate: Option<Signal<String>>,
    #[prop(default = "No activity yet...")] empty_text: &'static str,
) -> impl IntoView {
    let accent = match category {
        Some(ActivityCategory::Cache) => "console cache",
        Some(ActivityCategory::Database) => "console database",
        _ => "console",
    };

    view! {
        <div class=accent>
            <div class="console-header">{title}</div>
            {rate.map(|rate| view! { <div class="console-rate">{move || rate.get()}</div> })}
            <div class="console-body">
                {move || {
                    let lines = entries(state, category);
                    if lines.is_empty() {
                        view! { <div class="console-empty">{empty_text}</div> }.into_view()
                    } else {
                        lines
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div class="log-line">
                                        <span class="log-time">"[" {entry.timestamp} "]"</span>
                                        {entry.icon.map(|icon| view! { <span class="log-icon">{icon}</span> })}
                                        <span class="log-msg">{entry.message}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}
