// Dskey Keyboard Context
// Shift, caps lock and mode state owned by the keyboard driver

use std::time::{Duration, Instant};

use crate::KeyboardMode;

/// Default window in which two shift taps count as a double tap
pub const DEFAULT_DOUBLE_TAP: Duration = Duration::from_millis(300);

/// Mutable keyboard state.
///
/// Transitions:
/// - a single shift tap toggles shift, unless caps lock is on
/// - two shift taps inside the double-tap window toggle caps lock and set
///   shift to match it
/// - typing a letter while shifted (without caps lock) drops shift
#[derive(Debug, Clone)]
pub struct KeyboardContext {
    shifted: bool,
    caps_lock: bool,
    mode: KeyboardMode,
    double_tap: Duration,
    shift_taps: u8,
    last_shift_tap: Option<Instant>,
}

impl Default for KeyboardContext {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_TAP)
    }
}

impl KeyboardContext {
    pub fn new(double_tap: Duration) -> Self {
        Self {
            shifted: false,
            caps_lock: false,
            mode: KeyboardMode::Letters,
            double_tap,
            shift_taps: 0,
            last_shift_tap: None,
        }
    }

    pub fn with_mode(mut self, mode: KeyboardMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn is_shifted(&self) -> bool {
        self.shifted
    }

    pub fn is_caps_lock(&self) -> bool {
        self.caps_lock
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    pub fn double_tap(&self) -> Duration {
        self.double_tap
    }

    /// Time of the most recent shift tap
    pub fn last_shift_tap(&self) -> Option<Instant> {
        self.last_shift_tap
    }

    pub fn set_mode(&mut self, mode: KeyboardMode) {
        self.mode = mode;
    }

    /// Register a shift tap now
    pub fn handle_shift(&mut self) {
        self.handle_shift_at(Instant::now());
    }

    /// Register a shift tap at `now`
    pub fn handle_shift_at(&mut self, now: Instant) {
        let within_window = self
            .last_shift_tap
            .map(|last| now.saturating_duration_since(last) <= self.double_tap)
            .unwrap_or(false);
        if !within_window {
            self.shift_taps = 0;
        }

        self.shift_taps += 1;
        self.last_shift_tap = Some(now);

        if self.shift_taps >= 2 {
            self.caps_lock = !self.caps_lock;
            self.shifted = self.caps_lock;
            self.shift_taps = 0;
            log::debug!("caps lock -> {}", self.caps_lock);
        } else if !self.caps_lock {
            self.shifted = !self.shifted;
        }
    }

    /// Called after a letter was typed
    pub fn after_letter(&mut self) {
        if self.shifted && !self.caps_lock {
            self.shifted = false;
        }
    }
}
