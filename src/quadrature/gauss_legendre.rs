//! Gauss-Legendre rules on the reference interval.
use crate::quadrature::types::{NumericalQuadratureDefinition, QuadratureError};
use std::collections::HashMap;

type RuleDefinition = (usize, Vec<f64>, Vec<f64>);

lazy_static! {
    /// Order, points and weights of the rules, keyed by the number of points.
    static ref GAUSS_LEGENDRE_DEFINITIONS: HashMap<usize, RuleDefinition> = {
        let mut m = HashMap::new();
        m.insert(1, (1, vec![0.0], vec![2.0]));
        m.insert(
            2,
            (
                3,
                vec![-0.577_350_269_189_625_8, 0.577_350_269_189_625_8],
                vec![1.0, 1.0],
            ),
        );
        m.insert(
            3,
            (
                5,
                vec![-0.774_596_669_241_483_4, 0.0, 0.774_596_669_241_483_4],
                vec![5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0],
            ),
        );
        m.insert(
            4,
            (
                7,
                vec![
                    -0.861_136_311_594_052_6,
                    -0.339_981_043_584_856_3,
                    0.339_981_043_584_856_3,
                    0.861_136_311_594_052_6,
                ],
                vec![
                    0.347_854_845_137_453_8,
                    0.652_145_154_862_546_1,
                    0.652_145_154_862_546_1,
                    0.347_854_845_137_453_8,
                ],
            ),
        );
        m.insert(
            5,
            (
                9,
                vec![
                    -0.906_179_845_938_664,
                    -0.538_469_310_105_683_1,
                    0.0,
                    0.538_469_310_105_683_1,
                    0.906_179_845_938_664,
                ],
                vec![
                    0.236_926_885_056_189_1,
                    0.478_628_670_499_366_5,
                    0.568_888_888_888_888_9,
                    0.478_628_670_499_366_5,
                    0.236_926_885_056_189_1,
                ],
            ),
        );
        m.insert(
            6,
            (
                11,
                vec![
                    -0.932_469_514_203_152,
                    -0.661_209_386_466_264_5,
                    -0.238_619_186_083_197,
                    0.238_619_186_083_197,
                    0.661_209_386_466_264_5,
                    0.932_469_514_203_152,
                ],
                vec![
                    0.171_324_492_379_170_3,
                    0.360_761_573_048_138_6,
                    0.467_913_934_572_691,
                    0.467_913_934_572_691,
                    0.360_761_573_048_138_6,
                    0.171_324_492_379_170_3,
                ],
            ),
        );
        m
    };
}

/// Return the Gauss-Legendre rule with `npoints` points.
pub fn gauss_legendre_rule(
    npoints: usize,
) -> Result<NumericalQuadratureDefinition, QuadratureError> {
    if let Some((order, points, weights)) = GAUSS_LEGENDRE_DEFINITIONS.get(&npoints) {
        Ok(NumericalQuadratureDefinition {
            order: *order,
            npoints,
            weights: weights.to_vec(),
            points: points.to_vec(),
        })
    } else {
        Err(QuadratureError::RuleNotFound(npoints))
    }
}

/// Return the numbers of points for which rules are available.
pub fn available_rules() -> Vec<usize> {
    let mut rules = GAUSS_LEGENDRE_DEFINITIONS.keys().copied().collect::<Vec<_>>();
    rules.sort_unstable();
    rules
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use paste::paste;

    macro_rules! test_rule {
        ($($npoints:literal),+) => {
        $(
            paste! {
                #[test]
                fn [<test_exact_polynomials_ $npoints>]() {
                    let rule = gauss_legendre_rule($npoints).unwrap();
                    assert_eq!(rule.points.len(), $npoints);
                    let total = rule.weights.iter().sum::<f64>();
                    assert_relative_eq!(total, 2.0, max_relative = 1e-14);
                    for degree in 0..=rule.order {
                        let exact = if degree % 2 == 1 {
                            0.0
                        } else {
                            2.0 / (degree as f64 + 1.0)
                        };
                        let actual = rule
                            .points
                            .iter()
                            .zip(&rule.weights)
                            .map(|(t, w)| w * t.powi(degree as i32))
                            .sum::<f64>();
                        assert_relative_eq!(actual, exact, epsilon = 1e-14);
                    }
                }
            }
        )*
        };
    }

    test_rule!(1, 2, 3, 4, 5, 6);

    #[test]
    fn test_missing_rule() {
        assert!(gauss_legendre_rule(7).is_err());
        assert_eq!(available_rules(), vec![1, 2, 3, 4, 5, 6]);
    }
}
