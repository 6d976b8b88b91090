#![allow(warnings)]
//! Opshub Frontend Entry Point

mod api;
mod app;
mod buckets;
mod cart;
mod components;
mod config;
mod context;
mod kanban;
mod models;
mod money;
mod onboarding;
mod pages;
mod role;
mod route;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
