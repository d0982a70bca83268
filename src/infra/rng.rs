/// Источник случайности для симуляции.
pub trait RandomSource {
    /// Случайное число в диапазоне `0..upper` (`upper > 0`).
    fn pick(&mut self, upper: usize) -> usize;
}

#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn pick(&mut self, upper: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(0..upper.max(1))
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Один и тот же seed → одна и та же последовательность операций.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn pick(&mut self, upper: usize) -> usize {
        use rand::Rng;
        self.inner.gen_range(0..upper.max(1))
    }
}
