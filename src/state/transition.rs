use bb_base::config::constants::DETAIL_ANIMATION_MS;

/// A detail pane show/hide animation started at `started_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// true = sliding in, false = sliding out
    pub showing: bool,
    pub started_ms: u64,
}

impl Transition {
    pub fn new(showing: bool, started_ms: u64) -> Self {
        Self { showing, started_ms }
    }

    pub fn end_ms(&self) -> u64 {
        self.started_ms + DETAIL_ANIMATION_MS
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        (elapsed as f32 / DETAIL_ANIMATION_MS as f32).clamp(0.0, 1.0)
    }

    /// Eased pane visibility at `now_ms`
    pub fn reveal(&self, now_ms: u64) -> f32 {
        let eased = ease_in_out(self.progress(now_ms));
        if self.showing { eased } else { 1.0 - eased }
    }

    /// Restart from the current position when toggled mid-flight, so the
    /// pane reverses instead of jumping.
    pub fn reversed(&self, now_ms: u64) -> Self {
        let remaining = DETAIL_ANIMATION_MS.saturating_sub(now_ms.saturating_sub(self.started_ms));
        Self { showing: !self.showing, started_ms: now_ms.saturating_sub(remaining) }
    }
}

/// Cubic ease-in-out
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_is_monotonic() {
        let samples: Vec<f32> = (0..=20).map(|i| ease_in_out(i as f32 / 20.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn showing_runs_zero_to_one() {
        let t = Transition::new(true, 100);
        assert_eq!(t.reveal(100), 0.0);
        assert_eq!(t.reveal(100 + DETAIL_ANIMATION_MS), 1.0);
        assert!(t.is_finished(100 + DETAIL_ANIMATION_MS));
        assert!(!t.is_finished(100 + DETAIL_ANIMATION_MS - 1));
    }

    #[test]
    fn hiding_runs_one_to_zero() {
        let t = Transition::new(false, 0);
        assert_eq!(t.reveal(0), 1.0);
        assert_eq!(t.reveal(DETAIL_ANIMATION_MS), 0.0);
    }

    #[test]
    fn reversal_keeps_position() {
        let quarter = DETAIL_ANIMATION_MS / 4;
        let t = Transition::new(true, 1_000);
        let now = 1_000 + quarter;
        let before = t.reveal(now);
        let r = t.reversed(now);
        assert!(!r.showing);
        assert!((r.reveal(now) - before).abs() < 1e-3);
        assert_eq!(r.end_ms(), now + quarter);
    }
}
