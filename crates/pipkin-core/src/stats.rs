//! Bounded stat gauges.
//!
//! Every creature gauge (health, hunger, bowel, happiness, discipline) is a
//! `StatBar` whose maximum comes from the creature's current evolution
//! stage. Values are `f32` in memory so per-frame decay accumulates
//! smoothly; they round to integers at persistence time.

/// A gauge clamped to `0.0..=max`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub current: f32,
    pub max: f32,
}

impl StatBar {
    /// A full gauge with the given maximum.
    pub fn full(max: f32) -> Self {
        StatBar { current: max, max }
    }

    /// An empty gauge with the given maximum.
    pub fn empty(max: f32) -> Self {
        StatBar { current: 0.0, max }
    }

    /// Restore a gauge from a persisted integer value, clamping to range.
    pub fn restore(current: i64, max: i64) -> Self {
        let max = max.max(0) as f32;
        StatBar {
            current: (current as f32).clamp(0.0, max),
            max,
        }
    }

    pub fn fill(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn drain(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn set(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    /// Change the maximum, keeping the current fill percentage.
    pub fn set_max_keep_ratio(&mut self, new_max: f32) {
        let pct = self.ratio();
        self.max = new_max;
        self.current = (new_max * pct).min(new_max);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Fill ratio in `0.0..=1.0`.
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.current / self.max).clamp(0.0, 1.0)
        }
    }

    /// Rounded value for persistence.
    pub fn rounded(&self) -> i64 {
        self.current.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_drain_clamp() {
        let mut bar = StatBar::full(100.0);
        bar.fill(50.0);
        assert_eq!(bar.current, 100.0);

        bar.drain(30.0);
        assert_eq!(bar.current, 70.0);

        bar.drain(200.0);
        assert_eq!(bar.current, 0.0);
        assert!(bar.is_empty());
    }

    #[test]
    fn test_ratio() {
        let mut bar = StatBar::full(200.0);
        assert_eq!(bar.ratio(), 1.0);
        bar.drain(150.0);
        assert_eq!(bar.ratio(), 0.25);

        let degenerate = StatBar::full(0.0);
        assert_eq!(degenerate.ratio(), 0.0);
    }

    #[test]
    fn test_set_max_keep_ratio() {
        let mut bar = StatBar::full(100.0);
        bar.drain(50.0); // 50%
        bar.set_max_keep_ratio(200.0);
        assert_eq!(bar.max, 200.0);
        assert_eq!(bar.current, 100.0);
    }

    #[test]
    fn test_restore_clamps_out_of_range_rows() {
        let bar = StatBar::restore(250, 100);
        assert_eq!(bar.current, 100.0);
        let bar = StatBar::restore(-5, 100);
        assert_eq!(bar.current, 0.0);
    }

    #[test]
    fn test_rounded() {
        let mut bar = StatBar::full(100.0);
        bar.drain(0.4);
        assert_eq!(bar.rounded(), 100);
        bar.drain(0.2);
        assert_eq!(bar.rounded(), 99);
    }
}
