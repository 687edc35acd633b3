/// Animated count from zero up to a target, eased out so it settles gently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub target: u64,
    pub duration_ms: f64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { target, duration_ms }
    }

    /// Value to display `elapsed_ms` after the count started.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.target;
        }
        if elapsed_ms <= 0.0 {
            return 0;
        }
        let t = elapsed_ms / self.duration_ms;
        let eased = 1.0 - (1.0 - t).powi(3);
        ((self.target as f64) * eased).round() as u64
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// `55000` -> `"55,000"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
