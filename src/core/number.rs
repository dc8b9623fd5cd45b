use crate::utils::error::{DemoError, Result};
use rand::Rng;

/// Same result as `min(max(n, min), max)`; unlike `f64::clamp` it does not
/// panic when `min > max`.
pub fn clamp<T: PartialOrd>(n: T, min: T, max: T) -> T {
    let lower_bounded = if n < min { min } else { n };
    if lower_bounded > max {
        max
    } else {
        lower_bounded
    }
}

/// Uniform integer in `[min, max]`.
pub fn random(min: i64, max: i64) -> Result<i64> {
    random_with(&mut rand::thread_rng(), min, max)
}

pub fn random_with<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(DemoError::InvalidArgument {
            name: "min".to_string(),
            reason: format!("min ({}) must not exceed max ({})", min, max),
        });
    }
    Ok(rng.gen_range(min..=max))
}

pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total) * 100.0
}

/// Half-up rounding by scaling: ties go towards positive infinity.
/// Negative `decimals` round to tens, hundreds, ...
pub fn round(n: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    if factor == 0.0 {
        return 0.0;
    }
    let scaled = n * factor;
    // 精度已超過 f64 可表示範圍，原值即為結果
    if !scaled.is_finite() {
        return n;
    }
    (scaled + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        // 上下界顛倒時回傳 max
        assert_eq!(clamp(5, 10, 0), 0);
    }

    #[test]
    fn test_random_within_range() {
        for _ in 0..200 {
            let n = random(1, 10).unwrap();
            assert!((1..=10).contains(&n));
        }
        assert_eq!(random(7, 7).unwrap(), 7);
        assert!(random(10, 1).is_err());
    }

    #[test]
    fn test_random_with_seeded_rng_hits_both_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<i64> = (0..500).map(|_| random_with(&mut rng, 0, 3).unwrap()).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(25.0, 100.0), 25.0);
        assert_eq!(percentage(50.0, 200.0), 25.0);
        assert_eq!(percentage(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_round() {
        assert_eq!(round(3.14159, 2), 3.14);
        assert_eq!(round(3.14159, 0), 3.0);
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -2.0);
        assert_eq!(round(1.005 * 1000.0, 0), 1005.0);
        assert_eq!(round(1234.5, -2), 1200.0);
        assert_eq!(round(1260.0, -2), 1300.0);
    }

    #[test]
    fn test_round_never_returns_nan_for_finite_input() {
        assert_eq!(round(1.23, i32::MAX), 1.23);
        assert_eq!(round(1.23, 400), 1.23);
        assert_eq!(round(1.23, i32::MIN), 0.0);
    }
}
