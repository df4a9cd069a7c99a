/// Minimum-spacing debounce for a single button channel.
///
/// A press is accepted only if at least `min_spacing_ms` have passed since
/// the last accepted press. The first press is always accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    min_spacing_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl Debouncer {
    pub const fn new(min_spacing_ms: u64) -> Self {
        Self {
            min_spacing_ms,
            last_accepted_ms: None,
        }
    }

    /// Decide whether an edge seen at `now_ms` counts as a press.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.min_spacing_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    pub fn min_spacing_ms(&self) -> u64 {
        self.min_spacing_ms
    }
}
