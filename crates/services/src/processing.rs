//! Simulated analysis shown between the final submit and the offer screen.

use std::time::Duration;

/// Tick interval the view drives the sequence with.
pub const PROCESSING_TICK: Duration = Duration::from_millis(50);
/// Time to go from 0% to 100%.
pub const PROCESSING_TOTAL: Duration = Duration::from_millis(4000);
/// Hold at 100% before the completion signal fires.
pub const PROCESSING_COMPLETE_HOLD: Duration = Duration::from_millis(500);

/// Staged status lines, activated in order as progress crosses each quarter.
pub const PROCESSING_STAGES: [&str; 4] = [
    "Conectando ao banco de dados...",
    "Analisando perfil metabólico...",
    "Identificando tipo de gordura...",
    "Gerando protocolo personalizado...",
];

/// Copy shown once the bar fills.
pub const PROCESSING_DONE_LABEL: &str = "Concluído!";

/// Progress of the simulated analysis, advanced by [`Self::tick`].
///
/// The sequence never reacts to real work; it exists so the diagnosis feels
/// earned. Elapsed time past 100% counts toward the completion hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSequence {
    elapsed: Duration,
}

impl ProcessingSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick interval. Returns `true` when the completion
    /// signal should fire, exactly once per sequence.
    pub fn tick(&mut self) -> bool {
        let before_done = self.should_complete();
        self.elapsed = self.elapsed.saturating_add(PROCESSING_TICK);
        !before_done && self.should_complete()
    }

    /// Fill percentage, clamped to 100.
    #[must_use]
    pub fn percent(&self) -> u8 {
        let ratio = self.elapsed.as_secs_f64() / PROCESSING_TOTAL.as_secs_f64();
        (ratio * 100.0).min(100.0) as u8
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elapsed >= PROCESSING_TOTAL
    }

    /// Index of the active stage line.
    #[must_use]
    pub fn stage_index(&self) -> usize {
        let stages = PROCESSING_STAGES.len();
        let index = (usize::from(self.percent()) * stages) / 100;
        index.min(stages - 1)
    }

    /// The status line to display, switching to the done label at 100%.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_full() {
            PROCESSING_DONE_LABEL
        } else {
            PROCESSING_STAGES[self.stage_index()]
        }
    }

    fn should_complete(&self) -> bool {
        self.elapsed >= PROCESSING_TOTAL + PROCESSING_COMPLETE_HOLD
    }
}
