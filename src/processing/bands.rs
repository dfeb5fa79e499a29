//! Banded score lookup shared by every section analyzer

/// Ordered thresholds mapping a raw measurement (a length, a count, a score)
/// to a tier value.
///
/// `below` is scanned in order; the first `(limit, value)` pair whose limit
/// exceeds the measurement wins. Measurements at or above every limit map to
/// `otherwise`.
#[derive(Debug, Clone, Copy)]
pub struct Bands<M: 'static, V: 'static> {
    below: &'static [(M, V)],
    otherwise: V,
}

impl<M, V> Bands<M, V>
where
    M: PartialOrd + Copy,
    V: Copy,
{
    pub const fn new(below: &'static [(M, V)], otherwise: V) -> Self {
        Self { below, otherwise }
    }

    pub fn lookup(&self, measurement: M) -> V {
        self.below
            .iter()
            .find(|(limit, _)| measurement < *limit)
            .map(|(_, value)| *value)
            .unwrap_or(self.otherwise)
    }
}

/// Closing assessment tier appended after every analyzed section's feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    NeedsWork,
    Basic,
    Good,
    Excellent,
}

pub const ASSESSMENT_TIERS: Bands<f64, Tier> = Bands::new(
    &[(25.0, Tier::NeedsWork), (50.0, Tier::Basic), (75.0, Tier::Good)],
    Tier::Excellent,
);
