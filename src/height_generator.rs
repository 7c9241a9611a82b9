use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Produces the tower height for a newly inserted node.
///
/// `gen_height` returns the number of levels the node will occupy, in
/// `1..=max_height`. Each set instance owns its generator, so injecting a
/// seeded one makes the layout reproducible.
pub trait HeightGenerator {
    fn gen_height(&mut self, max_height: usize) -> usize;
}

/// The default coin-flip generator: one extra level per heads, stopping on
/// the first tails or at the cap. P(height = k) = (1/2)^k for k below the
/// cap, which keeps the expected tower height at 2 and search cost at
/// O(log n).
pub struct GenHeight {
    rng: StdRng,
}

impl GenHeight {
    pub fn new() -> Self {
        GenHeight {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        GenHeight {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GenHeight {
    fn default() -> Self {
        GenHeight::new()
    }
}

impl HeightGenerator for GenHeight {
    fn gen_height(&mut self, max_height: usize) -> usize {
        let mut height = 1;
        while height < max_height && self.rng.gen::<bool>() {
            height += 1;
        }
        height
    }
}
