use crate::config;

/// Which way a hidden element sits before it slides into place.
///
/// `Up` means the element rises into view, so while hidden it is pushed
/// down by the configured distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Scale,
    Blur,
}

impl Direction {
    /// Offset in pixels while hidden, as (x, y).
    pub fn hidden_offset(self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up | Direction::Blur => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
            Direction::Scale => (0.0, 0.0),
        }
    }
}

/// How and when one target animates in.
///
/// `threshold` is clamped into `[0, 1]` on construction and by
/// [`RevealConfig::threshold`]; a NaN threshold becomes `0.0`. Out-of-range
/// values are never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    threshold: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub direction: Direction,
    pub once: bool,
    pub distance: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            delay_ms: 0,
            duration_ms: config::REVEAL_DURATION_MS,
            direction: Direction::Up,
            once: true,
            distance: config::REVEAL_DISTANCE_PX,
        }
    }
}

impl RevealConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = if distance.is_finite() { distance.abs() } else { 0.0 };
        self
    }

    pub fn threshold_value(&self) -> f64 {
        self.threshold
    }

    /// Whether an observed intersection ratio counts as "in view".
    ///
    /// A zero threshold still needs some overlap, otherwise an element far
    /// below the fold would count as visible.
    pub fn is_met_by(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}
