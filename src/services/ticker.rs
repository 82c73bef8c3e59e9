use std::time::Duration;

use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, trace};

use crate::models::{ColumnId, SpinHandle};
use crate::services::controller::{RouletteController, SpinButton};

impl SpinHandle for Task {
    fn cancel(self: Box<Self>) {
        Task::cancel(*self);
    }
}

/// Handles a click on a spin button: starts one ticker per column or stops
/// the board this button is driving.
pub fn press_spin_button(
    mut board: Signal<Option<RouletteController>>,
    button: SpinButton,
    period: Duration,
) {
    let ticker_board = board;
    let mut guard = board.write();
    let Some(controller) = guard.as_mut() else {
        return;
    };
    let transition = controller.press(button, |column| {
        Box::new(spawn_reel_ticker(ticker_board, column, period))
    });
    debug!(
        ?button,
        ?transition,
        running = controller.running_roulette_count(),
        "spin button pressed"
    );
}

/// Spawns the recurring highlight task for one column. The first frame fires
/// one period after the start, like a browser interval.
pub fn spawn_reel_ticker(
    mut board: Signal<Option<RouletteController>>,
    column: ColumnId,
    period: Duration,
) -> Task {
    spawn(async move {
        let mut rng = SmallRng::from_entropy();
        let mut ticks = interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            let mut guard = board.write();
            let Some(controller) = guard.as_mut() else {
                break;
            };
            let highlighted = controller.tick(column, &mut rng);
            trace!(?column, ?highlighted, "reel tick");
        }
    })
}
