//! Series expansions of the wave term of free-surface kernels.
//!
//! For dimensionless horizontal and vertical offsets `x, y >= 0` the function
//!
//! `F(x, y) = -2 int_0^y exp(t - y) / sqrt(x^2 + t^2) dt - pi exp(-y) (H0(x) + Y0(x))`
//!
//! and its derivatives `Fx`, `Fxx` are evaluated by one of four expansions.
//! Each expansion is only used where it converges with a fixed number of
//! terms; [Regime::select] decides which one applies.
mod expansions;
mod reference;

pub use reference::reference_value;

/// `F` and its first two derivatives with respect to `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesValue {
    /// Function value
    pub f: f64,
    /// First derivative with respect to `x`
    pub fx: f64,
    /// Second derivative with respect to `x`
    pub fxx: f64,
}

/// Expansion used at a point, with its truncation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Expansion around the vertical axis (small `x` or large `y`)
    Sem1 {
        /// Number of terms
        terms: usize,
    },
    /// Power series in `y` for moderate arguments
    Sem2 {
        /// Number of terms
        terms: usize,
    },
    /// Large `x`, close to the surface
    Sem3 {
        /// Number of terms
        terms: usize,
    },
    /// Large `x`, away from the surface
    Sem4 {
        /// Number of terms
        terms: usize,
    },
}

impl Regime {
    /// Select the expansion for `(x, y)`.
    ///
    /// Both arguments must be non-negative and not both zero.
    pub fn select(x: f64, y: f64) -> Self {
        debug_assert!(x >= 0.0 && y >= 0.0, "negative series arguments ({x}, {y})");
        if x >= 9.5 && y > 0.5 * x {
            Regime::Sem4 {
                terms: if x < 14.0 { 20 } else { 15 },
            }
        } else if x >= 6.5 && y <= 0.5 * x {
            Regime::Sem3 { terms: 13 }
        } else if y < 15.0 && y < 2.0 * x {
            let terms = if y > 11.0 {
                42
            } else if x > 7.0 || y > 8.0 {
                36
            } else if x > 4.5 || y > 6.0 {
                30
            } else {
                26
            };
            Regime::Sem2 { terms }
        } else {
            Regime::Sem1 {
                terms: if 14.0 < y && y < 17.0 { 19 } else { 15 },
            }
        }
    }

    /// Evaluate this expansion at `(x, y)`.
    pub fn evaluate(&self, x: f64, y: f64) -> SeriesValue {
        match *self {
            Regime::Sem1 { terms } => expansions::sem1(x, y, terms),
            Regime::Sem2 { terms } => expansions::sem2(x, y, terms),
            Regime::Sem3 { terms } => expansions::sem3(x, y, terms),
            Regime::Sem4 { terms } => expansions::sem4(x, y, terms),
        }
    }
}

/// Evaluate `F`, `Fx` and `Fxx` with the expansion selected for `(x, y)`.
pub fn series_expansion(x: f64, y: f64) -> SeriesValue {
    Regime::select(x, y).evaluate(x, y)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use paste::paste;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_matches_reference(x: f64, y: f64, epsilon: f64) {
        let actual = series_expansion(x, y);
        let expected = reference_value(x, y);
        assert_abs_diff_eq!(actual.f, expected.f, epsilon = epsilon);
        assert_abs_diff_eq!(actual.fx, expected.fx, epsilon = epsilon);
        assert_abs_diff_eq!(actual.fxx, expected.fxx, epsilon = epsilon);
    }

    macro_rules! test_against_reference {
        ($(($name:ident, $x:expr, $y:expr, $regime:ident)),+) => {
        $(
            paste! {
                #[test]
                fn [<test_reference_ $name>]() {
                    assert!(matches!(Regime::select($x, $y), Regime::$regime { .. }));
                    assert_matches_reference($x, $y, 1e-6);
                }
            }
        )*
        };
    }

    test_against_reference!(
        (sem4_corner, 9.5, 5.0, Sem4),
        (sem3_corner, 6.5, 3.0, Sem3),
        (sem3_below_sem4, 9.5, 4.75, Sem3),
        (sem4_above_sem3, 9.5, 4.76, Sem4),
        (sem2_above_sem3, 6.5, 3.26, Sem2),
        (sem2_moderate, 3.0, 2.0, Sem2),
        (sem2_small, 0.5, 0.3, Sem2),
        (sem2_surface, 3.0, 0.0, Sem2),
        (sem2_below_sem1, 7.2, 14.2, Sem2),
        (sem2_many_terms, 6.4, 12.7, Sem2),
        (sem1_deep, 1.0, 20.0, Sem1),
        (sem1_steep, 2.0, 5.0, Sem1),
        (sem1_band, 7.0, 14.9, Sem1),
        (sem1_left_of_sem4, 9.49, 18.0, Sem1),
        (sem1_above_sem2, 9.4, 15.1, Sem1),
        (sem3_far, 30.0, 3.0, Sem3),
        (sem3_close, 8.0, 1.0, Sem3),
        (sem4_far, 30.0, 40.0, Sem4),
        (sem4_diagonal, 15.0, 14.9, Sem4)
    );

    #[test]
    fn test_term_counts() {
        assert_eq!(Regime::select(9.5, 5.0), Regime::Sem4 { terms: 20 });
        assert_eq!(Regime::select(14.0, 7.5), Regime::Sem4 { terms: 15 });
        assert_eq!(Regime::select(6.5, 3.25), Regime::Sem3 { terms: 13 });
        assert_eq!(Regime::select(6.49, 3.0), Regime::Sem2 { terms: 30 });
        assert_eq!(Regime::select(2.0, 1.0), Regime::Sem2 { terms: 26 });
        assert_eq!(Regime::select(7.5, 11.5), Regime::Sem2 { terms: 42 });
        assert_eq!(Regime::select(7.5, 5.0), Regime::Sem2 { terms: 36 });
        assert_eq!(Regime::select(5.0, 8.5), Regime::Sem2 { terms: 36 });
        assert_eq!(Regime::select(4.6, 2.0), Regime::Sem2 { terms: 30 });
        assert_eq!(Regime::select(3.5, 6.5), Regime::Sem2 { terms: 30 });
        assert_eq!(Regime::select(1.0, 2.0), Regime::Sem1 { terms: 15 });
        assert_eq!(Regime::select(1.0, 15.0), Regime::Sem1 { terms: 19 });
        assert_eq!(Regime::select(1.0, 17.0), Regime::Sem1 { terms: 15 });
        assert_eq!(Regime::select(0.0, 3.0), Regime::Sem1 { terms: 15 });
    }

    #[test]
    fn test_sem1_on_axis() {
        let v = series_expansion(0.0, 3.0);
        assert!(v.f.is_finite() && v.fxx.is_finite());
        assert_eq!(v.fx, 0.0);
    }

    #[test]
    fn test_random_points_against_reference() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..40 {
            let x = rng.gen_range(0.05..35.0);
            let y = rng.gen_range(0.0..35.0);
            assert_matches_reference(x, y, 1e-6);
        }
    }
}
