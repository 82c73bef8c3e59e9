use std::time::Duration;

use dioxus::prelude::*;

use crate::models::CategoryView;
use crate::services::{RouletteController, SpinButton, press_spin_button};

#[component]
#[allow(non_snake_case)]
pub fn CategoryBlock(
    board: Signal<Option<RouletteController>>,
    index: usize,
    period: Duration,
) -> Element {
    let view = board
        .read()
        .as_ref()
        .and_then(|controller| controller.category_view(index));
    let Some(CategoryView {
        name,
        style,
        button: spin_button,
        columns,
    }) = view
    else {
        return rsx! {};
    };

    rsx! {
        div { class: "category", style: "{style}",
            if spin_button.visible {
                button { class: "start-button",
                    onclick: move |_| press_spin_button(board, SpinButton::Category(index), period),
                    "{spin_button.label}"
                }
            }
            h3 { "{name}" }
            div { class: "option-container",
                for column in columns.iter() {
                    div { class: if column.spinning { "option-column spinning" } else { "option-column" },
                        div { class: "option-name", style: "{column.name_style}", "{column.name}" }
                        div { class: "option-choices",
                            for choice in column.choices.iter() {
                                div {
                                    class: choice.class(),
                                    style: "{choice.style}",
                                    "data-value": "{choice.value}",
                                    "{choice.value}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
