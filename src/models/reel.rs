use std::fmt;

use rand::Rng;

/// Handle to a running tick source. Dropping the reel's handle without
/// calling `cancel` leaves the ticker running.
pub trait SpinHandle {
    fn cancel(self: Box<Self>);
}

/// Position of an option column on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnId {
    pub category: usize,
    pub option: usize,
}

impl ColumnId {
    pub fn new(category: usize, option: usize) -> Self {
        Self { category, option }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReelState {
    Stopped,
    Spinning,
}

/// Highlight state of one option column. A single index is stored, so at most
/// one choice is ever selected.
pub struct Reel {
    len: usize,
    selected: Option<usize>,
    spin: Option<Box<dyn SpinHandle>>,
}

impl Reel {
    pub fn new(len: usize, selected: Option<usize>) -> Self {
        Self {
            len,
            selected: selected.filter(|index| *index < len),
            spin: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn state(&self) -> ReelState {
        if self.spin.is_some() {
            ReelState::Spinning
        } else {
            ReelState::Stopped
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.state() == ReelState::Spinning
    }

    /// Clears the landed choice and attaches the ticker driving this reel.
    pub fn start(&mut self, handle: Box<dyn SpinHandle>) {
        if let Some(previous) = self.spin.take() {
            previous.cancel();
        }
        self.selected = None;
        self.spin = Some(handle);
    }

    /// One animation frame: the previous highlight is cleared before a new
    /// index is drawn uniformly over the whole column (repeats allowed).
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if !self.is_spinning() {
            return self.selected;
        }
        self.selected = None;
        if self.len == 0 {
            return None;
        }
        let index = rng.gen_range(0..self.len);
        self.selected = Some(index);
        Some(index)
    }

    /// Cancels the ticker and returns whatever is highlighted right now.
    pub fn stop(&mut self) -> Option<usize> {
        if let Some(handle) = self.spin.take() {
            handle.cancel();
        }
        self.selected
    }
}

impl fmt::Debug for Reel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reel")
            .field("len", &self.len)
            .field("selected", &self.selected)
            .field("state", &self.state())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingHandle;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn starts_stopped_with_saved_index() {
        let reel = Reel::new(3, Some(1));
        assert_eq!(reel.state(), ReelState::Stopped);
        assert_eq!(reel.selected(), Some(1));
        assert_eq!(Reel::new(3, Some(7)).selected(), None);
    }

    #[test]
    fn start_clears_selection_until_first_tick() {
        let mut reel = Reel::new(3, Some(2));
        reel.start(Box::new(RecordingHandle::default()));
        assert!(reel.is_spinning());
        assert_eq!(reel.selected(), None);
        assert_eq!(reel.stop(), None);
    }

    #[test]
    fn ticks_stay_in_range_and_stop_cancels() {
        let mut rng = SmallRng::seed_from_u64(7);
        let handle = RecordingHandle::default();
        let cancelled = handle.cancelled.clone();
        let mut reel = Reel::new(3, None);
        reel.start(Box::new(handle));

        for _ in 0..100 {
            let index = reel.tick(&mut rng).expect("non-empty reel always highlights");
            assert!(index < 3);
            assert_eq!(reel.selected(), Some(index));
        }

        let landed = reel.selected();
        assert_eq!(reel.stop(), landed);
        assert!(cancelled.get());
        assert_eq!(reel.state(), ReelState::Stopped);
    }

    #[test]
    fn ticks_are_ignored_once_stopped() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut reel = Reel::new(4, Some(3));
        assert_eq!(reel.tick(&mut rng), Some(3));
        assert_eq!(reel.selected(), Some(3));
    }

    #[test]
    fn empty_reel_never_highlights() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut reel = Reel::new(0, None);
        reel.start(Box::new(RecordingHandle::default()));
        assert_eq!(reel.tick(&mut rng), None);
        assert_eq!(reel.stop(), None);
    }

    #[test]
    fn restarting_cancels_previous_ticker() {
        let first = RecordingHandle::default();
        let first_cancelled = first.cancelled.clone();
        let mut reel = Reel::new(2, None);
        reel.start(Box::new(first));
        reel.start(Box::new(RecordingHandle::default()));
        assert!(first_cancelled.get());
        assert!(reel.is_spinning());
    }
}
