//! Workspace Bar Component
//!
//! Tab bar for switching between workspaces. Records are mirrored to
//! browser local storage on every change; the built-in workspaces cannot
//! be deleted.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::WorkspaceRecord;
use crate::storage;
use crate::store::{self, use_app_store, AppStateStoreFields};

/// Persist the current workspace set and active id.
fn persist(store: &store::AppStore) {
    storage::save_workspaces(&store.workspaces().get_untracked());
    storage::save_active_workspace(&store.active_workspace_id().get_untracked());
}

#[component]
pub fn WorkspaceBar() -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    // Workspace id currently being renamed, if any
    let (renaming, set_renaming) = signal(None::<String>);
    let (rename_text, set_rename_text) = signal(String::new());

    // Restore persisted records once on mount
    Effect::new(move |_| {
        let saved = storage::load_workspaces();
        if let Some(active) = storage::load_active_workspace() {
            if saved.iter().any(|workspace| workspace.id == active) {
                store.active_workspace_id().set(active);
            }
        }
        store.workspaces().set(saved);
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }

        let id = store::next_id(&store, "workspace");
        store::add_workspace(
            &store,
            WorkspaceRecord {
                id,
                name: name.trim().to_string(),
                color: "#6b7280".to_string(),
            },
        );
        persist(&store);

        set_new_name.set(String::new());
        set_adding.set(false);
    };

    view! {
        <div class="workspace-tab-bar">
            <For
                each=move || store.workspaces().get()
                key=|workspace| (workspace.id.clone(), workspace.name.clone())
                children=move |workspace| {
                    let id = workspace.id.clone();
                    let select_id = workspace.id.clone();
                    let delete_id = workspace.id.clone();
                    let rename_id = workspace.id.clone();
                    let rename_check_id = workspace.id.clone();
                    let rename_name = workspace.name.clone();
                    let is_active = move || store.active_workspace_id().get() == id;
                    let tab_class = move || {
                        if is_active() { "workspace-tab active" } else { "workspace-tab" }
                    };
                    let is_renaming =
                        move || renaming.get().as_deref() == Some(rename_check_id.as_str());

                    view! {
                        <span class="workspace-tab-wrapper">
                            {move || if is_renaming() {
                                let submit_id = rename_id.clone();
                                view! {
                                    <form
                                        class="workspace-add-form"
                                        on:submit=move |ev: web_sys::SubmitEvent| {
                                            ev.prevent_default();
                                            let name = rename_text.get();
                                            if name.trim().is_empty() {
                                                return;
                                            }
                                            let binding = store.workspaces();
                                            let mut workspaces = binding.write();
                                            if let Some(entry) = workspaces
                                                .iter_mut()
                                                .find(|w| w.id == submit_id)
                                            {
                                                entry.name = name.trim().to_string();
                                            }
                                            drop(workspaces);
                                            persist(&store);
                                            set_renaming.set(None);
                                        }
                                    >
                                        <input
                                            type="text"
                                            prop:value=move || rename_text.get()
                                            on:input=move |ev| set_rename_text.set(event_target_value(&ev))
                                        />
                                        <button type="submit">"✓"</button>
                                        <button type="button" on:click=move |_| set_renaming.set(None)>
                                            "✗"
                                        </button>
                                    </form>
                                }.into_any()
                            } else {
                                let select_id = select_id.clone();
                                let start_rename_id = rename_id.clone();
                                let start_rename_name = rename_name.clone();
                                let color = workspace.color.clone();
                                let name = workspace.name.clone();
                                let tab_class = tab_class.clone();
                                view! {
                                    <button
                                        class=tab_class
                                        on:click=move |_| {
                                            store.active_workspace_id().set(select_id.clone());
                                            persist(&store);
                                        }
                                        on:dblclick=move |_| {
                                            set_rename_text.set(start_rename_name.clone());
                                            set_renaming.set(Some(start_rename_id.clone()));
                                        }
                                    >
                                        <span
                                            class="workspace-dot"
                                            style=format!("background-color: {};", color)
                                        ></span>
                                        {name.clone()}
                                    </button>
                                }.into_any()
                            }}
                            {(!storage::is_builtin(&workspace.id)).then(|| view! {
                                <DeleteConfirmButton
                                    button_class="workspace-delete-btn"
                                    on_confirm=Callback::new(move |_| {
                                        store::remove_workspace(&store, &delete_id);
                                        persist(&store);
                                    })
                                />
                            })}
                        </span>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="workspace-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Workspace name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="workspace-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
