use dioxus::prelude::*;

use crate::components::compact::open_compact_window;
use crate::services::{AppSettings, RouletteController, SpinButton, press_spin_button};

#[component]
#[allow(non_snake_case)]
pub fn ControlBar(board: Signal<Option<RouletteController>>, settings: AppSettings) -> Element {
    let period = settings.spin_period();
    let all_button = board
        .read()
        .as_ref()
        .map(|controller| controller.button_view(SpinButton::All))
        .filter(|view| view.visible);

    rsx! {
        div { class: "controls",
            if let Some(all_button) = all_button {
                button { id: "all-start-button",
                    onclick: move |_| press_spin_button(board, SpinButton::All, period),
                    "{all_button.label}"
                }
            }
            button { id: "compact-view-button", class: "secondary",
                onclick: move |_| {
                    let mut board = board;
                    if let Some(controller) = board.write().as_mut() {
                        controller.snapshot_for_compact();
                    }
                    open_compact_window(settings.clone());
                },
                "Compact view"
            }
        }
    }
}
