#![allow(warnings)]
//! Craftboard Frontend Entry Point

mod app;
mod components;
mod context;
mod filter;
mod format;
mod markdown;
mod models;
mod reorder;
mod stats;
mod storage;
mod store;
mod timers;
mod transitions;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
