use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::components::{CategoryBlock, ControlBar};
use crate::services::{
    AppSettings, FileCookieJar, RouletteController, SelectionStore, load_board,
};
use crate::style::APP_STYLE;

#[component]
#[allow(non_snake_case)]
pub fn App() -> Element {
    let settings = use_hook(AppSettings::load_or_default);
    let board = use_signal(|| Option::<RouletteController>::None);
    let stylesheet = use_signal(String::new);
    let load_error = use_signal(|| Option::<String>::None);

    let load_settings = settings.clone();
    use_hook(move || queue_board_load(load_settings, board, stylesheet, load_error));

    let period = settings.spin_period();
    let category_count = board
        .read()
        .as_ref()
        .map(|controller| controller.catalog().len());
    let generated_css = stylesheet.read().clone();
    let error_message = load_error.read().clone();

    rsx! {
        style { {APP_STYLE} }
        style { {generated_css} }
        div { class: "app",
            header {
                div { class: "branding",
                    div { class: "title", "Option Roulette" }
                    div { class: "subtitle", "Spin every option, keep what lands." }
                }
                ControlBar { board: board, settings: settings.clone() }
            }
            main { id: "categories-container",
                if let Some(message) = error_message {
                    div { class: "panel error",
                        p { "Could not load the roulette data: {message}" }
                    }
                } else if let Some(count) = category_count {
                    for index in 0..count {
                        CategoryBlock { key: "{index}", board: board, index: index, period: period }
                    }
                } else {
                    p { class: "helper", "Loading categories..." }
                }
            }
        }
    }
}

fn queue_board_load(
    settings: AppSettings,
    mut board: Signal<Option<RouletteController>>,
    mut stylesheet: Signal<String>,
    mut load_error: Signal<Option<String>>,
) -> Task {
    spawn(async move {
        match load_board(&settings.style_source(), &settings.categories_source()).await {
            Ok((style_config, catalog)) => {
                if catalog.is_empty() {
                    warn!("category document defines no categories");
                }
                info!(categories = catalog.len(), "loaded roulette data");
                let jar = FileCookieJar::new(settings.cookie_jar_path());
                stylesheet.set(style_config.stylesheet());
                board.set(Some(RouletteController::new(
                    catalog,
                    SelectionStore::new(jar),
                )));
            }
            Err(err) => {
                error!(%err, "failed to load roulette data");
                load_error.set(Some(err.to_string()));
            }
        }
    })
}
