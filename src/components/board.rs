//! Board Component
//!
//! The four fixed columns, titled per the active project.

use leptos::prelude::*;

use crate::components::Column;
use crate::models::ColumnKind;
use crate::store::{self, use_app_store};

#[component]
pub fn Board() -> impl IntoView {
    let store = use_app_store();
    let titles = store::active_column_titles(&store);

    view! {
        <div class="board">
            <Column
                kind=ColumnKind::Backlog
                title=Signal::derive(move || titles.get().backlog)
            />
            // New cards land in TODO unless added from their own column
            <Column
                kind=ColumnKind::Todo
                title=Signal::derive(move || titles.get().todo)
                is_default=true
            />
            <Column
                kind=ColumnKind::Doing
                title=Signal::derive(move || titles.get().doing)
            />
            <Column
                kind=ColumnKind::Done
                title=Signal::derive(move || titles.get().done)
            />
        </div>
    }
}
