//! Numeric equivalence property tests.
//!
//! Cross-checks the hand-rolled reduction and operator table against
//! `num_rational::BigRational`, which canonicalizes independently (lowest
//! terms, positive denominator). Operand ranges mirror the input boundary:
//! terms strictly between 0 and 100.

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

use crate::{evaluate, simplify, Fraction, Op};

fn oracle(f: Fraction) -> BigRational {
    BigRational::new(BigInt::from(f.numerator), BigInt::from(f.denominator))
}

fn operand() -> impl Strategy<Value = Fraction> {
    (1i64..100, 1i64..100).prop_map(|(n, d)| Fraction::new(n, d))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn simplify_is_canonical(n in -9999i64..10_000, d in -9999i64..10_000) {
        prop_assume!(d != 0);

        let (rn, rd) = simplify(n, d);
        prop_assert!(rd > 0, "denominator must end positive, got {}", rd);

        let expected = BigRational::new(BigInt::from(n), BigInt::from(d));
        prop_assert_eq!(BigInt::from(rn), expected.numer().clone());
        prop_assert_eq!(BigInt::from(rd), expected.denom().clone());
    }

    #[test]
    fn zero_numerator_reduces_to_zero_over_one(d in 1i64..10_000) {
        prop_assert_eq!(simplify(0, d), (0, 1));
        prop_assert_eq!(simplify(0, -d), (0, 1));
    }

    #[test]
    fn operator_table_matches_oracle(a in operand(), b in operand()) {
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div] {
            let got = evaluate(a, op, b).unwrap();
            let expected = match op {
                Op::Add => oracle(a) + oracle(b),
                Op::Sub => oracle(a) - oracle(b),
                Op::Mul => oracle(a) * oracle(b),
                Op::Div => oracle(a) / oracle(b),
            };
            prop_assert_eq!(oracle(got), expected);
        }
    }

    #[test]
    fn addition_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(
            evaluate(a, Op::Add, b).unwrap(),
            evaluate(b, Op::Add, a).unwrap()
        );
    }

    #[test]
    fn multiplication_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(
            evaluate(a, Op::Mul, b).unwrap(),
            evaluate(b, Op::Mul, a).unwrap()
        );
    }

    #[test]
    fn addition_associates(a in operand(), b in operand(), c in operand()) {
        let left = evaluate(evaluate(a, Op::Add, b).unwrap(), Op::Add, c).unwrap();
        let right = evaluate(a, Op::Add, evaluate(b, Op::Add, c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }
}
