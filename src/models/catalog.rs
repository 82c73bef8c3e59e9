use serde::{Deserialize, Serialize};

/// Font overrides shared by option names and choice cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOverride {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
}

/// Per-element style override. Values are passed through as opaque CSS.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    #[serde(default)]
    pub cell_color: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub border_width: Option<String>,
    #[serde(default)]
    pub font: Option<FontOverride>,
}

impl CellStyle {
    /// Renders the set fields as an inline `style` attribute. Unset fields are
    /// left out so the stylesheet defaults still apply.
    pub fn inline_css(&self) -> String {
        let font = self.font.clone().unwrap_or_default();
        let declarations = [
            ("background-color", &self.cell_color),
            ("border-color", &self.border_color),
            ("border-width", &self.border_width),
            ("color", &font.color),
            ("font-size", &font.size),
            ("font-family", &font.family),
            ("font-weight", &font.weight),
        ];
        declarations
            .iter()
            .filter_map(|(property, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| format!("{property}: {v};"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColor {
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
}

impl CategoryColor {
    pub fn inline_css(&self) -> String {
        let mut css = Vec::new();
        if let Some(border) = self.border_color.as_deref() {
            css.push(format!("border-color: {border};"));
        }
        if let Some(background) = self.background_color.as_deref() {
            css.push(format!("background-color: {background};"));
        }
        css.join(" ")
    }
}

/// A choice as written in the category document: either a bare string or an
/// object carrying per-state style overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceDefinition {
    Simple(String),
    Styled {
        value: String,
        #[serde(default)]
        selected: Option<CellStyle>,
        #[serde(default)]
        unselected: Option<CellStyle>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub name: String,
    #[serde(default)]
    pub style: Option<CellStyle>,
    #[serde(default)]
    pub choices: Vec<ChoiceDefinition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(default)]
    pub color: Option<CategoryColor>,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

/// Normalised choice, independent of how it was written in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub selected_style: Option<CellStyle>,
    pub unselected_style: Option<CellStyle>,
}

impl Choice {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected_style: None,
            unselected_style: None,
        }
    }

    pub fn style_for(&self, selected: bool) -> Option<&CellStyle> {
        if selected {
            self.selected_style.as_ref()
        } else {
            self.unselected_style.as_ref()
        }
    }
}

impl From<ChoiceDefinition> for Choice {
    fn from(definition: ChoiceDefinition) -> Self {
        match definition {
            ChoiceDefinition::Simple(value) => Choice::plain(value),
            ChoiceDefinition::Styled {
                value,
                selected,
                unselected,
            } => Choice {
                value,
                selected_style: selected,
                unselected_style: unselected,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet {
    pub name: String,
    pub style: Option<CellStyle>,
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub color: Option<CategoryColor>,
    pub options: Vec<OptionSet>,
}

/// All categories in document order, resolved once after loading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn from_definitions(definitions: Vec<CategoryDefinition>) -> Self {
        let categories = definitions
            .into_iter()
            .map(|category| Category {
                name: category.name,
                color: category.color,
                options: category
                    .options
                    .into_iter()
                    .map(|option| OptionSet {
                        name: option.name,
                        style: option.style,
                        choices: option.choices.into_iter().map(Choice::from).collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
