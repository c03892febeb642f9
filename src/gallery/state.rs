use std::time::Instant;

/// Lifecycle of a gallery instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPhase {
    Uninitialized,
    Settled,
    /// A corrective wrap jump was issued and has not settled yet.
    Jumping {
        target: f32,
        issued_at: Instant,
    },
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub raw_offset: f32,
    pub active_index: usize,
    pub phase: ScrollPhase,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            raw_offset: 0.0,
            active_index: 0,
            phase: ScrollPhase::Uninitialized,
        }
    }

    pub fn is_programmatic_jump(&self) -> bool {
        matches!(self.phase, ScrollPhase::Jumping { .. })
    }

    pub fn is_mounted(&self) -> bool {
        matches!(
            self.phase,
            ScrollPhase::Settled | ScrollPhase::Jumping { .. }
        )
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
