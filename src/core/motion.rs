//! Motion data: frames sampled at a fixed period.

/// One time sample: a value per channel across the whole skeleton,
/// in channel declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub values: Vec<f64>,
}

impl Frame {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of values in this frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for Frame {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<&[f64]> for Frame {
    fn from(values: &[f64]) -> Self {
        Self { values: values.to_vec() }
    }
}

impl<const N: usize> From<[f64; N]> for Frame {
    fn from(values: [f64; N]) -> Self {
        Self { values: values.to_vec() }
    }
}

/// Sampling period plus the append-only frame sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    /// Seconds per frame.
    pub period: f64,
    pub frames: Vec<Frame>,
}

impl Motion {
    /// Create motion with no frames.
    pub fn new(period: f64) -> Self {
        Self {
            period,
            frames: Vec::new(),
        }
    }

    /// Number of accumulated frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.period * self.frames.len() as f64
    }
}
