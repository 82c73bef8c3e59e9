use anyhow::Result;
use dioxus::LaunchBuilder;
use dioxus_desktop::Config;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::tao::window::WindowBuilder;
use mimalloc::MiMalloc;

pub mod app;
pub mod components;
pub mod models;
pub mod services;
pub mod style;

pub use app::App;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub fn launch_desktop() -> Result<()> {
    services::init_logging()?;
    tracing::info!("starting option roulette");
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title("Option Roulette")
                    .with_inner_size(LogicalSize::new(1180.0, 820.0))
                    .with_resizable(true),
            ),
        )
        .launch(App);
    Ok(())
}
