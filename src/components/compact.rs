use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::tao::window::WindowBuilder;
use dioxus_desktop::{Config, window};
use tracing::{error, info};

use crate::models::{CompactCategory, compact_board};
use crate::services::{AppSettings, FileCookieJar, SelectionStore, load_board};
use crate::style::APP_STYLE;

#[derive(Clone, Debug, PartialEq)]
enum CompactState {
    Loading,
    Ready {
        stylesheet: String,
        rows: Vec<CompactCategory>,
    },
    Error(String),
}

#[derive(Props, Clone, PartialEq)]
pub struct CompactWindowProps {
    settings: AppSettings,
}

/// Opens the read-only board in its own window. The caller persists the
/// current selections first; the new window reads them back from the jar.
pub fn open_compact_window(settings: AppSettings) {
    let dom = VirtualDom::new_with_props(CompactWindow, CompactWindowProps { settings });
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Option Roulette - Compact")
            .with_inner_size(LogicalSize::new(760.0, 560.0))
            .with_resizable(true),
    );
    let _pending = window().new_window(dom, config);
    info!("opened compact view");
}

#[allow(non_snake_case)]
pub fn CompactWindow(props: CompactWindowProps) -> Element {
    let state = use_signal(|| CompactState::Loading);
    let settings = props.settings.clone();

    use_hook(move || {
        let mut state_signal = state;
        spawn(async move {
            let loaded = load_board(&settings.style_source(), &settings.categories_source()).await;
            match loaded {
                Ok((style_config, catalog)) => {
                    let store = SelectionStore::new(FileCookieJar::new(settings.cookie_jar_path()));
                    let rows = compact_board(&catalog, &store.load());
                    state_signal.set(CompactState::Ready {
                        stylesheet: style_config.stylesheet(),
                        rows,
                    });
                }
                Err(err) => {
                    error!(%err, "failed to load compact view");
                    state_signal.set(CompactState::Error(err.to_string()));
                }
            }
        })
    });

    let snapshot = state.read().clone();
    rsx! {
        style { {APP_STYLE} }
        {match snapshot {
            CompactState::Loading => rsx! {
                p { class: "helper", "Loading selections..." }
            },
            CompactState::Error(message) => rsx! {
                div { class: "panel error",
                    p { "Could not load the roulette data: {message}" }
                }
            },
            CompactState::Ready { stylesheet, rows } => rsx! {
                style { {stylesheet} }
                div { class: "app compact", id: "categories-container",
                    for category in rows.iter() {
                        h3 { "{category.name}" }
                        div { class: "option-container",
                            for option in category.options.iter() {
                                div { class: "option-column",
                                    div { class: "option-name", "{option.name}" }
                                    div { class: "option-choices",
                                        if let Some(value) = option.value.as_deref() {
                                            div { class: "selected", "data-value": "{value}", "{value}" }
                                        } else {
                                            div { class: "placeholder" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }}
    }
}
