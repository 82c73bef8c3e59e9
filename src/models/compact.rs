use super::catalog::Catalog;
use super::selection::Selections;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactOption {
    pub name: String,
    /// Persisted value, `None` renders an empty placeholder cell.
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactCategory {
    pub name: String,
    pub options: Vec<CompactOption>,
}

/// Read-only board: one cell per option holding only the last persisted value.
pub fn compact_board(catalog: &Catalog, selections: &Selections) -> Vec<CompactCategory> {
    catalog
        .categories
        .iter()
        .map(|category| CompactCategory {
            name: category.name.clone(),
            options: category
                .options
                .iter()
                .map(|option| CompactOption {
                    name: option.name.clone(),
                    value: selections
                        .values(&category.name, &option.name)
                        .filter(|values| !values.is_empty())
                        .map(|values| values.join(",")),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::CategoryDefinition;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        let definitions: Vec<CategoryDefinition> = serde_json::from_str(
            r#"[{ "name": "Food", "options": [
                { "name": "Dish", "choices": ["Pizza", "Sushi", "Tacos"] },
                { "name": "Drink", "choices": ["Tea", "Coffee"] }
            ] }]"#,
        )
        .unwrap();
        Catalog::from_definitions(definitions)
    }

    #[test]
    fn shows_saved_value_and_placeholder() {
        let mut selections = Selections::new();
        selections.set("Food", "Dish", "Sushi");

        let board = compact_board(&catalog(), &selections);
        assert_eq!(
            board,
            vec![CompactCategory {
                name: "Food".into(),
                options: vec![
                    CompactOption {
                        name: "Dish".into(),
                        value: Some("Sushi".into()),
                    },
                    CompactOption {
                        name: "Drink".into(),
                        value: None,
                    },
                ],
            }]
        );
    }

    #[test]
    fn ignores_selections_for_unknown_categories() {
        let mut selections = Selections::new();
        selections.set("Travel", "City", "Kyoto");
        let board = compact_board(&catalog(), &selections);
        assert!(board[0].options.iter().all(|option| option.value.is_none()));
    }
}
