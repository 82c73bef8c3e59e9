use rand::Rng;
use tracing::{error, info};

use crate::models::{
    ButtonView, Catalog, CategoryView, ColumnId, Reel, Selections, SpinHandle,
    build_category_view, initial_selection,
};
use crate::services::selection_store::SelectionStore;

pub const START_LABEL: &str = "Start roulette";
pub const START_ALL_LABEL: &str = "Start all";
pub const STOP_LABEL: &str = "Stop";

/// A button that drives spins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinButton {
    Category(usize),
    All,
}

impl SpinButton {
    fn start_label(self) -> &'static str {
        match self {
            SpinButton::Category(_) => START_LABEL,
            SpinButton::All => START_ALL_LABEL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinTransition {
    Started,
    Stopped,
    /// Another button is driving the board, the press had no effect.
    Ignored,
}

/// Application state of the interactive board: one reel per option column,
/// the button currently driving a spin and the persistence backend.
pub struct RouletteController {
    catalog: Catalog,
    reels: Vec<Vec<Reel>>,
    active: Option<SpinButton>,
    running_roulette_count: usize,
    store: SelectionStore,
}

impl RouletteController {
    pub fn new(catalog: Catalog, store: SelectionStore) -> Self {
        let saved = store.load();
        let reels = catalog
            .categories
            .iter()
            .map(|category| {
                category
                    .options
                    .iter()
                    .map(|option| {
                        Reel::new(
                            option.choices.len(),
                            initial_selection(&saved, &category.name, option),
                        )
                    })
                    .collect()
            })
            .collect();

        Self {
            catalog,
            reels,
            active: None,
            running_roulette_count: 0,
            store,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn running_roulette_count(&self) -> usize {
        self.running_roulette_count
    }

    pub fn active_button(&self) -> Option<SpinButton> {
        self.active
    }

    pub fn reel(&self, column: ColumnId) -> Option<&Reel> {
        self.reels
            .get(column.category)
            .and_then(|reels| reels.get(column.option))
    }

    pub fn selected_value(&self, column: ColumnId) -> Option<&str> {
        let index = self.reel(column)?.selected()?;
        self.catalog
            .categories
            .get(column.category)?
            .options
            .get(column.option)?
            .choices
            .get(index)
            .map(|choice| choice.value.as_str())
    }

    /// While a button drives a spin every other spin button is hidden.
    pub fn button_view(&self, button: SpinButton) -> ButtonView {
        let driving = self.active == Some(button);
        ButtonView {
            label: if driving {
                STOP_LABEL
            } else {
                button.start_label()
            },
            visible: self.active.is_none() || driving,
        }
    }

    pub fn category_view(&self, category: usize) -> Option<CategoryView> {
        let definition = self.catalog.categories.get(category)?;
        let reels = self.reels.get(category)?;
        Some(build_category_view(
            definition,
            reels,
            self.button_view(SpinButton::Category(category)),
        ))
    }

    /// Start/stop toggle. `spawn` creates the ticker for one column and
    /// returns its cancellation handle.
    pub fn press<F>(&mut self, button: SpinButton, spawn: F) -> SpinTransition
    where
        F: FnMut(ColumnId) -> Box<dyn SpinHandle>,
    {
        match self.active {
            Some(driving) if driving == button => {
                match button {
                    SpinButton::Category(index) => self.stop_category(index),
                    SpinButton::All => self.stop_all(),
                }
                self.active = None;
                SpinTransition::Stopped
            }
            Some(_) => SpinTransition::Ignored,
            None => {
                match button {
                    SpinButton::Category(index) => {
                        if index >= self.reels.len() {
                            return SpinTransition::Ignored;
                        }
                        self.start_category(index, spawn);
                    }
                    SpinButton::All => self.start_all(spawn),
                }
                self.active = Some(button);
                SpinTransition::Started
            }
        }
    }

    /// One animation frame for a column. Returns the highlighted value.
    pub fn tick<R: Rng>(&mut self, column: ColumnId, rng: &mut R) -> Option<&str> {
        self.reels
            .get_mut(column.category)
            .and_then(|reels| reels.get_mut(column.option))?
            .tick(rng)?;
        self.selected_value(column)
    }

    /// Current selection of every rendered column, persisted before the
    /// compact window opens.
    pub fn snapshot_for_compact(&mut self) -> Selections {
        let mut snapshot = Selections::new();
        for (category_index, category) in self.catalog.categories.iter().enumerate() {
            snapshot.touch_category(&category.name);
            for (option_index, option) in category.options.iter().enumerate() {
                let column = ColumnId::new(category_index, option_index);
                if let Some(value) = self.selected_value(column) {
                    snapshot.set(&category.name, &option.name, value);
                }
            }
        }

        match self.store.snapshot_all(&snapshot) {
            Ok(written) => written,
            Err(err) => {
                error!(%err, "failed to persist selection snapshot");
                snapshot
            }
        }
    }

    fn start_category<F>(&mut self, index: usize, mut spawn: F)
    where
        F: FnMut(ColumnId) -> Box<dyn SpinHandle>,
    {
        self.running_roulette_count += 1;
        if let Some(reels) = self.reels.get_mut(index) {
            for (option, reel) in reels.iter_mut().enumerate() {
                reel.start(spawn(ColumnId::new(index, option)));
            }
        }
    }

    fn stop_category(&mut self, index: usize) {
        self.running_roulette_count = self.running_roulette_count.saturating_sub(1);
        let columns = self.reels.get(index).map(Vec::len).unwrap_or(0);
        for option in 0..columns {
            self.stop_column(ColumnId::new(index, option));
        }
    }

    fn start_all<F>(&mut self, mut spawn: F)
    where
        F: FnMut(ColumnId) -> Box<dyn SpinHandle>,
    {
        self.running_roulette_count = self.catalog.len();
        for (category, reels) in self.reels.iter_mut().enumerate() {
            for (option, reel) in reels.iter_mut().enumerate() {
                reel.start(spawn(ColumnId::new(category, option)));
            }
        }
    }

    fn stop_all(&mut self) {
        self.running_roulette_count = 0;
        for category in 0..self.reels.len() {
            for option in 0..self.reels[category].len() {
                self.stop_column(ColumnId::new(category, option));
            }
        }
    }

    fn stop_column(&mut self, column: ColumnId) {
        let Some(reel) = self
            .reels
            .get_mut(column.category)
            .and_then(|reels| reels.get_mut(column.option))
        else {
            return;
        };
        if reel.stop().is_none() {
            return;
        }
        let Some(value) = self.selected_value(column).map(str::to_owned) else {
            return;
        };
        let category = &self.catalog.categories[column.category];
        let option = &category.options[column.option];
        info!(category = %category.name, option = %option.name, %value, "selected option");
        if let Err(err) = self.store.save(&category.name, &option.name, &value) {
            error!(%err, category = %category.name, option = %option.name, "failed to save selection");
        }
    }
}
