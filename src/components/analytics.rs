//! Analytics Modal Component
//!
//! Aggregated board metrics for the active project.

use chrono::Utc;
use leptos::prelude::*;

use crate::format::format_tracked;
use crate::stats::BoardStats;
use crate::store::{self, use_app_store};

#[component]
pub fn AnalyticsModal(on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let cards = store::active_cards(&store);
    let stats = Memo::new(move |_| {
        let now = Utc::now();
        BoardStats::compute(&cards.get(), now.date_naive(), now)
    });

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal analytics" on:click=|ev| ev.stop_propagation()>
                <div class="detail-header">
                    <h2>"Task Analytics"</h2>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                {move || match stats.get() {
                    None => view! {
                        <p class="analytics-empty">"No data available for analytics"</p>
                    }.into_any(),
                    Some(stats) => view! {
                        <div class="analytics-grid">
                            <div class="stat-tile">
                                <p class="stat-value">{stats.total}</p>
                                <p class="stat-label">"Total tasks"</p>
                            </div>
                            <div class="stat-tile">
                                <p class="stat-value">{stats.completed}</p>
                                <p class="stat-label">"Completed"</p>
                            </div>
                            <div class="stat-tile">
                                <p class="stat-value">{stats.in_progress}</p>
                                <p class="stat-label">"In progress"</p>
                            </div>
                            <div class="stat-tile">
                                <p class="stat-value">{stats.backlog}</p>
                                <p class="stat-label">"Backlog"</p>
                            </div>
                            <div class="stat-tile">
                                <p class="stat-value">{format!("{:.0}%", stats.completion_rate)}</p>
                                <p class="stat-label">"Completion rate"</p>
                            </div>
                            <div class="stat-tile">
                                <p class="stat-value">{format!("{:.1}d", stats.avg_cycle_days)}</p>
                                <p class="stat-label">"Avg cycle time"</p>
                            </div>
                            <div class="stat-tile">
                                <p class="stat-value">{stats.overdue}</p>
                                <p class="stat-label">"Overdue"</p>
                            </div>
                            <div class="stat-tile">
                                <p class="stat-value">{format_tracked(stats.total_tracked_seconds)}</p>
                                <p class="stat-label">"Time tracked"</p>
                            </div>
                        </div>

                        <div class="analytics-distributions">
                            <div class="distribution">
                                <p class="detail-section-title">"By priority"</p>
                                {stats.priority_counts.iter().map(|(priority, count)| view! {
                                    <div class="distribution-row">
                                        <span>{priority.label()}</span>
                                        <span>{*count}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                            <div class="distribution">
                                <p class="detail-section-title">"By type"</p>
                                {stats.type_counts.iter().map(|(card_type, count)| view! {
                                    <div class="distribution-row">
                                        <span>{card_type.clone()}</span>
                                        <span>{*count}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
