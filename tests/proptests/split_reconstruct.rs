//! Property tests for split/reconstruct workflows

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use primeshare::SharingService;
use primeshare::domain::Modulus;

/// Secret below the default modulus (2^127 - 1)
#[derive(Clone, Debug)]
struct ValidSecret(BigUint);

impl Arbitrary for ValidSecret {
    fn arbitrary(g: &mut Gen) -> Self {
        // mask to 126 bits so every value is below 2^127 - 1
        let raw = u128::arbitrary(g) >> 2;
        ValidSecret(BigUint::from(raw))
    }
}

/// Valid (k, n) pair with 2 <= k <= n <= 50
#[derive(Clone, Copy, Debug)]
struct ValidSharingParams {
    threshold: u32,
    num_shares: u32,
}

impl Arbitrary for ValidSharingParams {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_shares = (u32::arbitrary(g) % 49) + 2; // 2..=50
        let threshold = (u32::arbitrary(g) % (num_shares - 1)) + 2; // 2..=num_shares

        ValidSharingParams {
            threshold,
            num_shares,
        }
    }
}

/// Picks `count` distinct positions out of `0..len`, driven by `seed`
fn pick_subset(len: usize, count: usize, seed: u64) -> Vec<usize> {
    index::sample(&mut StdRng::seed_from_u64(seed), len, count).into_vec()
}

/// Any k-subset of the shares recovers the secret
#[quickcheck]
fn prop_split_reconstruct_round_trip(
    secret: ValidSecret,
    params: ValidSharingParams,
    seed: u64,
) -> bool {
    let service = SharingService::default();
    let Ok(output) = service.split(&BigInt::from(secret.0.clone()), params.threshold, params.num_shares)
    else {
        return false;
    };

    let subset: Vec<_> = pick_subset(output.shares.len(), params.threshold as usize, seed)
        .into_iter()
        .map(|i| output.shares[i].clone())
        .collect();

    service
        .reconstruct(&subset, Some(params.threshold))
        .is_ok_and(|r| r.secret == secret.0)
}

/// Two different k-subsets of the same split agree
#[quickcheck]
fn prop_subset_invariance(params: ValidSharingParams, seed_a: u64, seed_b: u64) -> bool {
    let service = SharingService::new(Modulus::new(BigUint::from(2083u32)).unwrap());
    let Ok(output) = service.split(&BigInt::from(42), params.threshold, params.num_shares) else {
        return false;
    };
    let k = params.threshold as usize;

    let reconstruct_from = |seed: u64| {
        let subset: Vec<_> = pick_subset(output.shares.len(), k, seed)
            .into_iter()
            .map(|i| output.shares[i].clone())
            .collect();
        service.reconstruct(&subset, None).map(|r| r.secret)
    };

    match (reconstruct_from(seed_a), reconstruct_from(seed_b)) {
        (Ok(a), Ok(b)) => a == b && a == BigUint::from(42u32),
        _ => false,
    }
}

/// Every share value is a canonical field element and x runs 1..=n
#[quickcheck]
fn prop_shares_are_well_formed(params: ValidSharingParams) -> bool {
    let service = SharingService::new(Modulus::new(BigUint::from(2083u32)).unwrap());
    let Ok(output) = service.split(&BigInt::from(1), params.threshold, params.num_shares) else {
        return false;
    };

    output.shares.len() == params.num_shares as usize
        && output
            .shares
            .iter()
            .enumerate()
            .all(|(i, s)| *s.x as usize == i + 1 && service.field().contains(&s.y))
}

/// k - 1 shares do not fail mechanically; they are just not guaranteed correct
#[quickcheck]
fn prop_below_threshold_does_not_fail(secret: ValidSecret, params: ValidSharingParams) -> bool {
    let service = SharingService::default();
    let Ok(output) = service.split(&BigInt::from(secret.0.clone()), params.threshold, params.num_shares)
    else {
        return false;
    };

    let insufficient = &output.shares[..(params.threshold as usize - 1)];
    let result = service.reconstruct(insufficient, None);

    if insufficient.len() < 2 {
        // k = 2 leaves a single share, which is rejected outright
        result.is_err()
    } else {
        // Fewer than k shares interpolate some field element; it equals the
        // secret only with negligible probability, so only the range is checked
        result.is_ok_and(|r| service.field().contains(&r.secret))
    }
}

/// Reconstructing with a duplicated x always fails
#[quickcheck]
fn prop_duplicate_x_fails(params: ValidSharingParams, pick: usize) -> bool {
    let service = SharingService::default();
    let Ok(output) = service.split(&BigInt::from(9), params.threshold, params.num_shares) else {
        return false;
    };
    let share = output.shares[pick % output.shares.len()].clone();

    service
        .reconstruct(&[share.clone(), share], None)
        .is_err_and(|e| e == primeshare::SharingError::DivisionByZero)
}
