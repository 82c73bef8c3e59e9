use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub color: String,
    pub size: String,
    pub family: String,
    pub weight: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionNameConfig {
    pub cell_color: String,
    pub border_color: String,
    pub font: FontConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoiceCellConfig {
    pub cell_color: String,
    pub font: FontConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub width: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoicesConfig {
    pub selected: ChoiceCellConfig,
    pub unselected: ChoiceCellConfig,
    pub border: BorderConfig,
}

/// Global look of the board, read from the style document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub option: OptionNameConfig,
    pub choices: ChoicesConfig,
}

impl StyleConfig {
    /// Builds the stylesheet carrying the global defaults. Inline overrides on
    /// individual elements take precedence over these rules.
    pub fn stylesheet(&self) -> String {
        let option = &self.option;
        let option_name = declarations(&[
            ("background-color", &option.cell_color),
            ("border-color", &option.border_color),
            ("font-size", &option.font.size),
            ("font-family", &option.font.family),
            ("font-weight", &option.font.weight),
        ]);
        let unselected = choice_declarations(&self.choices.unselected);
        let selected = choice_declarations(&self.choices.selected);

        let border = &self.choices.border;
        let choices_border = if border.width.is_empty() && border.color.is_empty() {
            String::new()
        } else {
            format!("border: {} solid {};", border.width, border.color)
        };

        format!(
            ".option-name {{ {option_name} }}\n\
             .option-choices {{ {choices_border} }}\n\
             .option-choices div {{ {unselected} }}\n\
             .option-choices div.selected {{ {selected} }}\n"
        )
    }
}

fn choice_declarations(cell: &ChoiceCellConfig) -> String {
    declarations(&[
        ("background-color", &cell.cell_color),
        ("color", &cell.font.color),
        ("font-size", &cell.font.size),
        ("font-family", &cell.font.family),
    ])
}

fn declarations(pairs: &[(&str, &String)]) -> String {
    pairs
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
