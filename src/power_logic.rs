/// Decide whether the panel should be lit given how long the menu has been idle.
pub fn screen_should_be_on(auto_off_enabled: bool, idle_ms: u64, auto_off_timeout_ms: u64) -> bool {
    !(auto_off_enabled && idle_ms >= auto_off_timeout_ms)
}

/// Turns the panel off after a stretch without button presses.
///
/// The press that wakes a dark panel only wakes it; it is not passed on to
/// the menu, so the user never selects something they could not see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSaver {
    enabled: bool,
    timeout_ms: u64,
    last_activity_ms: u64,
    lit: bool,
}

impl ScreenSaver {
    pub const fn new(enabled: bool, timeout_ms: u64, now_ms: u64) -> Self {
        Self {
            enabled,
            timeout_ms,
            last_activity_ms: now_ms,
            lit: true,
        }
    }

    /// Record a press. Returns `true` if it woke the panel and should be
    /// swallowed.
    pub fn on_press(&mut self, now_ms: u64) -> bool {
        self.last_activity_ms = now_ms;
        if self.lit {
            return false;
        }
        self.lit = true;
        true
    }

    /// Periodic check. Returns `true` exactly once when the panel should go dark.
    pub fn on_tick(&mut self, now_ms: u64) -> bool {
        if !self.lit {
            return false;
        }
        let idle_ms = now_ms.saturating_sub(self.last_activity_ms);
        if screen_should_be_on(self.enabled, idle_ms, self.timeout_ms) {
            return false;
        }
        self.lit = false;
        true
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
