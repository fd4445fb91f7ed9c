//! Project Picker Component
//!
//! Dropdown listing the projects; switches the active board and toggles
//! favorites.

use leptos::prelude::*;

use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectPicker() -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);

    let current_name = move || {
        let active = store.active_project_id().get();
        store
            .projects()
            .get()
            .into_iter()
            .find(|project| project.id == active)
            .map(|project| project.name)
            .unwrap_or_else(|| "No project".to_string())
    };

    let current_color = move || {
        let active = store.active_project_id().get();
        store
            .projects()
            .get()
            .into_iter()
            .find(|project| project.id == active)
            .map(|project| project.cover_color)
            .unwrap_or_else(|| "#6b7280".to_string())
    };

    view! {
        <div class="project-picker">
            <button class="project-picker-btn" on:click=move |_| set_open.update(|v| *v = !*v)>
                <span
                    class="project-dot"
                    style=move || format!("background-color: {};", current_color())
                ></span>
                {current_name}
                <span class="project-caret">{move || if open.get() { "▲" } else { "▼" }}</span>
            </button>

            <Show when=move || open.get()>
                <div class="project-menu">
                    <For
                        each=move || store.projects().get()
                        key=|project| (project.id, project.favorite)
                        children=move |project| {
                            let id = project.id;
                            let is_active = move || store.active_project_id().get() == id;
                            view! {
                                <div class=move || {
                                    if is_active() { "project-row active" } else { "project-row" }
                                }>
                                    <button
                                        class="project-select-btn"
                                        on:click=move |_| {
                                            store::set_active_project(&store, id);
                                            set_open.set(false);
                                        }
                                    >
                                        <span
                                            class="project-dot"
                                            style=format!("background-color: {};", project.cover_color)
                                        ></span>
                                        <span class="project-name">{project.name.clone()}</span>
                                        <span class="project-description">{project.description.clone()}</span>
                                    </button>
                                    <button
                                        class=if project.favorite { "favorite-btn active" } else { "favorite-btn" }
                                        title="Favorite"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            store::toggle_favorite(&store, id);
                                        }
                                    >
                                        {if project.favorite { "★" } else { "☆" }}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
