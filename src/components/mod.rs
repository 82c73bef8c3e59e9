pub mod category;
pub mod compact;
pub mod controls;

pub use category::CategoryBlock;
pub use compact::{CompactWindow, open_compact_window};
pub use controls::ControlBar;
