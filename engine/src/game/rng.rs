use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.random_range(0..items.len());
        items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..100 {
            let x: u64 = a.random_range(0..1000);
            let y: u64 = b.random_range(0..1000);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_pick_empty_slice_is_none() {
        let mut rng = GameRng::new(7);
        let items: Vec<u32> = vec![];
        assert_eq!(rng.pick(&items), None);
    }

    #[test]
    fn test_pick_returns_element_of_slice() {
        let mut rng = GameRng::new(7);
        let items = vec![1, 2, 3, 4, 5];
        for _ in 0..50 {
            let picked = rng.pick(&items).unwrap();
            assert!(items.contains(picked));
        }
    }
}
