use super::catalog::{Category, OptionSet};
use super::reel::Reel;
use super::selection::Selections;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceView {
    pub value: String,
    pub selected: bool,
    /// Inline override for the choice's current state, empty when none.
    pub style: String,
}

impl ChoiceView {
    pub fn class(&self) -> &'static str {
        if self.selected {
            "selected"
        } else {
            "unselected-style"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnView {
    pub name: String,
    pub name_style: String,
    pub spinning: bool,
    pub choices: Vec<ChoiceView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub style: String,
    pub button: ButtonView,
    pub columns: Vec<ColumnView>,
}

/// Index of the first choice matching a persisted value.
pub fn initial_selection(
    selections: &Selections,
    category: &str,
    option: &OptionSet,
) -> Option<usize> {
    option
        .choices
        .iter()
        .position(|choice| selections.contains(category, &option.name, &choice.value))
}

pub fn build_category_view(category: &Category, reels: &[Reel], button: ButtonView) -> CategoryView {
    let columns = category
        .options
        .iter()
        .zip(reels)
        .map(|(option, reel)| ColumnView {
            name: option.name.clone(),
            name_style: option
                .style
                .as_ref()
                .map(|style| style.inline_css())
                .unwrap_or_default(),
            spinning: reel.is_spinning(),
            choices: option
                .choices
                .iter()
                .enumerate()
                .map(|(index, choice)| {
                    let selected = reel.selected() == Some(index);
                    ChoiceView {
                        value: choice.value.clone(),
                        selected,
                        style: choice
                            .style_for(selected)
                            .map(|style| style.inline_css())
                            .unwrap_or_default(),
                    }
                })
                .collect(),
        })
        .collect();

    CategoryView {
        name: category.name.clone(),
        style: category
            .color
            .as_ref()
            .map(|color| color.inline_css())
            .unwrap_or_default(),
        button,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{CellStyle, Choice};
    use pretty_assertions::assert_eq;

    fn dish() -> OptionSet {
        OptionSet {
            name: "Dish".into(),
            style: Some(CellStyle {
                border_width: Some("3px".into()),
                ..CellStyle::default()
            }),
            choices: vec![
                Choice::plain("Pizza"),
                Choice {
                    value: "Sushi".into(),
                    selected_style: Some(CellStyle {
                        cell_color: Some("red".into()),
                        ..CellStyle::default()
                    }),
                    unselected_style: Some(CellStyle {
                        cell_color: Some("pink".into()),
                        ..CellStyle::default()
                    }),
                },
                Choice::plain("Tacos"),
            ],
        }
    }

    #[test]
    fn initial_selection_uses_first_match() {
        let mut selections = Selections::new();
        assert_eq!(initial_selection(&selections, "Food", &dish()), None);

        selections.set("Food", "Dish", "Tacos");
        assert_eq!(initial_selection(&selections, "Food", &dish()), Some(2));

        selections.set("Food", "Dish", "Ramen");
        assert_eq!(initial_selection(&selections, "Food", &dish()), None);
    }

    #[test]
    fn view_marks_single_selected_choice_with_state_style() {
        let category = Category {
            name: "Food".into(),
            color: None,
            options: vec![dish()],
        };
        let reels = vec![Reel::new(3, Some(1))];
        let button = ButtonView {
            label: "Start roulette",
            visible: true,
        };
        let view = build_category_view(&category, &reels, button);

        let column = &view.columns[0];
        assert_eq!(column.name_style, "border-width: 3px;");
        assert_eq!(
            column.choices.iter().filter(|choice| choice.selected).count(),
            1
        );
        assert_eq!(column.choices[1].class(), "selected");
        assert_eq!(column.choices[1].style, "background-color: red;");
        assert_eq!(column.choices[0].class(), "unselected-style");
        assert_eq!(column.choices[0].style, "");
        assert_eq!(view.style, "");
    }

    #[test]
    fn unselected_override_applies_when_not_landed() {
        let category = Category {
            name: "Food".into(),
            color: None,
            options: vec![dish()],
        };
        let reels = vec![Reel::new(3, Some(0))];
        let view = build_category_view(
            &category,
            &reels,
            ButtonView {
                label: "Stop",
                visible: true,
            },
        );
        assert_eq!(view.columns[0].choices[1].style, "background-color: pink;");
    }
}
