pub mod catalog;
pub mod compact;
pub mod reel;
pub mod selection;
pub mod style_config;
pub mod view;

pub use catalog::{
    Catalog, Category, CategoryColor, CategoryDefinition, CellStyle, Choice, ChoiceDefinition,
    FontOverride, OptionDefinition, OptionSet,
};
pub use compact::{CompactCategory, CompactOption, compact_board};
pub use reel::{ColumnId, Reel, ReelState, SpinHandle};
pub use selection::Selections;
pub use style_config::StyleConfig;
pub use view::{
    ButtonView, CategoryView, ChoiceView, ColumnView, build_category_view, initial_selection,
};
