//! Falling petals, generated once at startup.

pub const PETAL_COUNT: usize = 18;

const MIN_DURATION_S: f64 = 6.0;
const DURATION_SPREAD_S: f64 = 8.0;
const MAX_DELAY_S: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    /// Horizontal position, percent of viewport width
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Petal {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; animation-duration: {}s; animation-delay: {}s;",
            self.left_pct, self.duration_s, self.delay_s
        )
    }
}

/// `random` yields samples in [0, 1)
pub fn generate(count: usize, mut random: impl FnMut() -> f64) -> Vec<Petal> {
    (0..count)
        .map(|_| Petal {
            left_pct: random() * 100.0,
            duration_s: MIN_DURATION_S + random() * DURATION_SPREAD_S,
            delay_s: random() * MAX_DELAY_S,
        })
        .collect()
}
