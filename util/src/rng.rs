use rand::Rng;

pub trait RngExt {
    /// Return true with probability `p`, `p` is clamped to [0, 1].
    fn chance(&mut self, p: f64) -> bool;

    /// Uniformly random integer in `0..n`, zero if `n` is not positive.
    fn below(&mut self, n: i32) -> i32;
}

impl<T: Rng + ?Sized> RngExt for T {
    fn chance(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.gen_bool(p)
    }

    fn below(&mut self, n: i32) -> i32 {
        if n <= 0 {
            0
        } else {
            self.gen_range(0..n)
        }
    }
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;
    use rand::SeedableRng;

    use super::*;
    use crate::GameRng;

    #[test]
    fn degenerate_chances() {
        let mut rng = GameRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
            assert!(!rng.chance(-3.0));
            assert_eq!(rng.below(0), 0);
            assert_eq!(rng.below(-5), 0);
        }
    }

    #[quickcheck]
    fn below_stays_in_range(seed: u64, n: i32) -> bool {
        let mut rng = GameRng::seed_from_u64(seed);
        let x = rng.below(n);
        if n <= 0 {
            x == 0
        } else {
            (0..n).contains(&x)
        }
    }
}
