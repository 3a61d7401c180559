use std::time::Duration;

/// Delay between playback start and the offer reveal.
pub const OFFER_REVEAL_DELAY: Duration = Duration::from_secs(64);
/// Countdown start value once the offer is revealed.
pub const COUNTDOWN_START_SECS: u32 = 600;
/// Countdown tick interval.
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);
/// Review carousel rotation interval.
pub const REVIEW_ROTATION: Duration = Duration::from_secs(6);
/// How long the sound hint stays visible after unmuting.
pub const SOUND_HINT_HIDE_DELAY: Duration = Duration::from_millis(1500);

/// Interaction state of the offer screen.
///
/// Pure data driven by timers and input the view owns. The exit-intent latch
/// fires at most once per screen; the countdown clamps at zero instead of
/// going negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferState {
    video_started: bool,
    offer_revealed: bool,
    countdown_secs: u32,
    exit_intent_visible: bool,
    exit_intent_spent: bool,
    open_faq: Option<usize>,
    review_index: usize,
    muted: bool,
    sound_hint_visible: bool,
}

impl Default for OfferState {
    fn default() -> Self {
        Self::new()
    }
}

impl OfferState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            video_started: false,
            offer_revealed: false,
            countdown_secs: COUNTDOWN_START_SECS,
            exit_intent_visible: false,
            exit_intent_spent: false,
            open_faq: None,
            review_index: 0,
            muted: true,
            sound_hint_visible: false,
        }
    }

    #[must_use]
    pub fn video_started(&self) -> bool {
        self.video_started
    }

    #[must_use]
    pub fn offer_revealed(&self) -> bool {
        self.offer_revealed
    }

    #[must_use]
    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    #[must_use]
    pub fn exit_intent_visible(&self) -> bool {
        self.exit_intent_visible
    }

    #[must_use]
    pub fn open_faq(&self) -> Option<usize> {
        self.open_faq
    }

    #[must_use]
    pub fn review_index(&self) -> usize {
        self.review_index
    }

    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn sound_hint_visible(&self) -> bool {
        self.sound_hint_visible
    }

    /// Playback started behind the cover. Playback begins muted, with the
    /// sound hint showing.
    pub fn start_video(&mut self) {
        self.video_started = true;
        self.muted = true;
        self.sound_hint_visible = true;
    }

    /// Reveal the offer section. Fires once the reveal delay elapses after
    /// playback start; idempotent.
    pub fn reveal_offer(&mut self) {
        self.offer_revealed = true;
    }

    /// One countdown tick. Clamps at zero.
    pub fn tick_countdown(&mut self) {
        self.countdown_secs = self.countdown_secs.saturating_sub(1);
    }

    /// Attempt to raise the exit-intent modal. Returns `true` only on the
    /// first attempt; once spent, further triggers fall through so back
    /// navigation proceeds normally.
    pub fn trigger_exit_intent(&mut self) -> bool {
        if self.exit_intent_spent {
            return false;
        }
        self.exit_intent_spent = true;
        self.exit_intent_visible = true;
        true
    }

    pub fn dismiss_exit_intent(&mut self) {
        self.exit_intent_visible = false;
    }

    /// Single-open accordion: opening one entry closes the previous; tapping
    /// the open entry closes it.
    pub fn toggle_faq(&mut self, index: usize) {
        self.open_faq = if self.open_faq == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Advance the review carousel, wrapping around `review_count`.
    pub fn rotate_review(&mut self, review_count: usize) {
        if review_count > 0 {
            self.review_index = (self.review_index + 1) % review_count;
        }
    }

    /// Sound enabled by the user. The hint stays up until
    /// [`Self::hide_sound_hint`] after [`SOUND_HINT_HIDE_DELAY`].
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn hide_sound_hint(&mut self) {
        self.sound_hint_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_clamps_at_zero() {
        let mut state = OfferState::new();
        state.countdown_secs = 2;
        state.tick_countdown();
        state.tick_countdown();
        state.tick_countdown();
        assert_eq!(state.countdown_secs(), 0);
    }

    #[test]
    fn exit_intent_latch_fires_at_most_once() {
        let mut state = OfferState::new();
        assert!(state.trigger_exit_intent());
        assert!(state.exit_intent_visible());

        state.dismiss_exit_intent();
        assert!(!state.trigger_exit_intent());
        assert!(!state.exit_intent_visible());
    }

    #[test]
    fn faq_accordion_keeps_a_single_entry_open() {
        let mut state = OfferState::new();
        state.toggle_faq(2);
        assert_eq!(state.open_faq(), Some(2));
        state.toggle_faq(5);
        assert_eq!(state.open_faq(), Some(5));
        state.toggle_faq(5);
        assert_eq!(state.open_faq(), None);
    }

    #[test]
    fn reviews_rotate_and_wrap() {
        let mut state = OfferState::new();
        for expected in [1, 2, 0, 1] {
            state.rotate_review(3);
            assert_eq!(state.review_index(), expected);
        }
        // Zero reviews never divides by zero.
        let mut empty = OfferState::new();
        empty.rotate_review(0);
        assert_eq!(empty.review_index(), 0);
    }

    #[test]
    fn playback_starts_muted_with_the_hint_showing() {
        let mut state = OfferState::new();
        state.start_video();
        assert!(state.video_started());
        assert!(state.muted());
        assert!(state.sound_hint_visible());

        state.unmute();
        state.hide_sound_hint();
        assert!(!state.muted());
        assert!(!state.sound_hint_visible());
    }
}
