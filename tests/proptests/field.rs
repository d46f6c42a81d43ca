//! Property tests for prime field arithmetic

use num_bigint::BigUint;
use num_traits::One;
use quickcheck_macros::quickcheck;

use primeshare::PrimeField;
use primeshare::domain::Modulus;

fn field_2083() -> PrimeField {
    PrimeField::new(Modulus::new(BigUint::from(2083u32)).unwrap())
}

/// add, sub and mul stay inside [0, P) even for unreduced inputs
#[quickcheck]
fn prop_operations_are_closed(a: u64, b: u64) -> bool {
    let f = field_2083();
    let (a, b) = (BigUint::from(a), BigUint::from(b));
    [f.add(&a, &b), f.sub(&a, &b), f.mul(&a, &b)]
        .iter()
        .all(|r| f.contains(r))
}

/// Closure in the default 127-bit field with 128-bit operands
#[quickcheck]
fn prop_operations_are_closed_in_default_field(a: u128, b: u128) -> bool {
    let f = PrimeField::default();
    let (a, b) = (BigUint::from(a), BigUint::from(b));
    [f.add(&a, &b), f.sub(&a, &b), f.mul(&a, &b)]
        .iter()
        .all(|r| f.contains(r))
}

/// (a - b) + b == a
#[quickcheck]
fn prop_sub_inverts_add(a: u64, b: u64) -> bool {
    let f = field_2083();
    let (a, b) = (BigUint::from(a), BigUint::from(b));
    f.add(&f.sub(&a, &b), &b) == f.reduce(&a)
}

/// a * a^-1 == 1 for every non-zero a; zero has no inverse
#[quickcheck]
fn prop_inverse(a: u128) -> bool {
    let f = PrimeField::default();
    let a = BigUint::from(a);
    match f.inverse(&a) {
        Ok(inv) => f.mul(&a, &inv).is_one(),
        Err(_) => f.reduce(&a) == BigUint::from(0u32),
    }
}
