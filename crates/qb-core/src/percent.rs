//! Percentage clamping and 5% step rounding.
//!
//! The renderer only ever operates on multiples of 5 inside [0, 100]; these
//! helpers coerce arbitrary caller input into that domain. Silent clamping is
//! the chosen policy: out-of-range values are pulled to the nearest boundary
//! and never rejected.

/// Rounding step of the renderer, in percentage points.
pub const STEP: i32 = 5;

/// Clamp an arbitrary integer into the percentage domain [0, 100].
///
/// # Example
/// ```
/// use qb_core::percent::clamp_percent;
/// assert_eq!(clamp_percent(-10), 0);
/// assert_eq!(clamp_percent(150), 100);
/// assert_eq!(clamp_percent(42), 42);
/// ```
#[must_use]
#[inline(always)]
pub const fn clamp_percent(n: i64) -> i32 {
    if n < 0 {
        0
    } else if n > 100 {
        100
    } else {
        n as i32
    }
}

/// Round a clamped percentage to the nearest multiple of 5, ties up.
///
/// Rounding law: `5 * ((n + 2) / 5)` in integer arithmetic, which equals
/// `5 * round(n / 5)` with half-up ties for every value `clamp_percent`
/// admits. This is the single authoritative rule; golden outputs in the
/// test suite are generated against it.
///
/// # Example
/// ```
/// use qb_core::percent::round_to_step;
/// assert_eq!(round_to_step(73), 75);
/// assert_eq!(round_to_step(72), 70);
/// assert_eq!(round_to_step(100), 100);
/// ```
#[must_use]
#[inline(always)]
pub const fn round_to_step(n: i32) -> i32 {
    STEP * ((n + 2) / STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_to_boundaries() {
        assert_eq!(clamp_percent(i64::MIN), 0);
        assert_eq!(clamp_percent(-1), 0);
        assert_eq!(clamp_percent(0), 0);
        assert_eq!(clamp_percent(100), 100);
        assert_eq!(clamp_percent(101), 100);
        assert_eq!(clamp_percent(i64::MAX), 100);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_to_step(0), 0);
        assert_eq!(round_to_step(2), 0);
        assert_eq!(round_to_step(3), 5);
        assert_eq!(round_to_step(7), 5);
        assert_eq!(round_to_step(8), 10);
        assert_eq!(round_to_step(73), 75);
        assert_eq!(round_to_step(98), 100);
    }

    #[test]
    fn multiples_of_five_are_fixed_points() {
        for n in (0..=100).step_by(5) {
            assert_eq!(round_to_step(n), n);
        }
    }

    #[test]
    fn rounding_stays_in_domain() {
        for n in 0..=100 {
            let r = round_to_step(n);
            assert!((0..=100).contains(&r));
            assert_eq!(r % STEP, 0);
        }
    }
}
