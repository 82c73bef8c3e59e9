pub mod controller;
pub mod cookies;
pub mod loader;
pub mod logging;
pub mod selection_store;
pub mod settings;
pub mod ticker;

pub use controller::{RouletteController, SpinButton, SpinTransition};
pub use cookies::{Cookie, CookieError, CookieJar, FileCookieJar, MemoryCookieJar};
pub use loader::{LoadError, ResourceSource, load_board, load_catalog, load_style_config};
pub use logging::init_logging;
pub use selection_store::{COOKIE_NAME, SelectionStore};
pub use settings::AppSettings;
pub use ticker::{press_spin_button, spawn_reel_ticker};
