// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Small helpers shared across the crate: root-of-unity enumeration and
//! group-element linear combinations.

use crate::error::Error;
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{FftField, PrimeField, Zero};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_poly_commit::kzg10::Commitment;

/// Builds the evaluation domain of size `n` or reports why `n` does not
/// fit inside the field's two-adicity.
pub fn domain_of_size<F: FftField>(
    n: usize,
) -> Result<GeneralEvaluationDomain<F>, Error> {
    GeneralEvaluationDomain::<F>::new(n).ok_or(Error::InvalidEvalDomainSize {
        log_size_of_group: (n.max(1)).trailing_zeros(),
        adicity: <F::FftParams as ark_ff::FftParameters>::TWO_ADICITY,
    })
}

/// Returns `ω`, a primitive `n`-th root of unity (`n` must be a power of
/// two dividing `p - 1`).
pub fn root_of_unity<F: FftField>(n: usize) -> Result<F, Error> {
    Ok(domain_of_size::<F>(n)?.group_gen())
}

/// Returns `[ω^0, …, ω^{n-1}]` for the primitive `n`-th root of unity `ω`.
pub fn roots_of_unity<F: FftField>(n: usize) -> Result<Vec<F>, Error> {
    let domain = domain_of_size::<F>(n)?;
    let gen = domain.group_gen();
    let mut powers = Vec::with_capacity(n);
    let mut acc = F::one();
    for _ in 0..n {
        powers.push(acc);
        acc *= gen;
    }
    Ok(powers)
}

/// Computes `Σ scalars[i] * points[i]` as a single affine group element,
/// the pattern the verifier uses to fold several KZG openings into one
/// aggregate commitment under a random challenge.
pub fn linear_combination<E: PairingEngine>(
    scalars: &[E::Fr],
    points: &[Commitment<E>],
    challenge: E::Fr,
) -> (Commitment<E>, E::Fr) {
    debug_assert_eq!(scalars.len(), points.len());
    let mut acc_point = E::G1Projective::zero();
    let mut acc_scalar = E::Fr::zero();
    let mut power = E::Fr::from(1u64);
    for (scalar, point) in scalars.iter().zip(points.iter()) {
        acc_point += point.0.mul(power.into_repr());
        acc_scalar += *scalar * power;
        power *= challenge;
    }
    (Commitment(acc_point.into_affine()), acc_scalar)
}
