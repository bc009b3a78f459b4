use rand::Rng;

/// Source of uniform random draws used by the normalizer and the popularity
/// sort. Estimated fields are deliberately nondeterministic in production
/// (no fixed seed); tests inject a scripted source to pin outcomes.
pub trait RandomSource {
    /// Uniform draw in [0, 1).
    fn unit(&mut self) -> f64;

    /// Uniform pick of an index in [0, n). `n` must be > 0.
    fn pick(&mut self, n: usize) -> usize {
        let idx = (self.unit() * n as f64) as usize;
        idx.min(n - 1)
    }
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Scripted source for tests: replays a fixed sequence of unit draws,
/// cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        Self { values, cursor: 0 }
    }

    /// All draws return the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
