#![allow(non_snake_case)]

use babysitter_match::client;
use dioxus_logger::tracing::{self, Level};

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    tracing::info!("Starting Babysitter Match client");

    dioxus::launch(client::App);
}
