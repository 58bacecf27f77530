// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Copy-constraint permutation: builds `S1, S2, S3` from the wiring of a
//! circuit's gates, and the `rlc` helper the grand-product argument and
//! the quotient/linearization polynomials are built from.

use crate::error::Error;
use crate::polynomial::{Basis, Polynomial};
use ark_ff::FftField;
use hashbrown::HashMap;

/// The quadratic-non-residue coset identifiers distinguishing the three
/// wires' copies of each variable: wire `L` uses `1`, wire `R` uses `2`,
/// wire `O` uses `3`.
pub const K1: u64 = 2;
pub const K2: u64 = 3;

/// A single wire slot: gate index `i`, wire `L`/`R`/`O`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireSlot {
    Left(usize),
    Right(usize),
    Output(usize),
}

/// Builds `S1, S2, S3` (each `Lagrange(n)`) from the map of variable name
/// to every wire slot it appears in, following the same coset-identifier
/// scheme the grand-product argument uses.
///
/// For each wire slot, `σ` maps to the *next* slot in the variable's
/// cycle (wrapping around), encoded as `coset_id(slot) * ω^{gate index}`
/// where `coset_id` is `1` for `Left`, `K1` for `Right`, `K2` for
/// `Output` — this is the standard PLONK copy-permutation encoding.
pub fn build_sigma_polynomials<F: FftField>(
    n: usize,
    variable_slots: &HashMap<String, Vec<WireSlot>>,
) -> Result<[Polynomial<F>; 3], Error> {
    let roots = crate::util::roots_of_unity::<F>(n)?;

    // sigma[slot] = the slot that comes "next" in its variable's cycle.
    let mut sigma: Vec<WireSlot> = (0..n).map(WireSlot::Left).collect();
    sigma.extend((0..n).map(WireSlot::Right));
    sigma.extend((0..n).map(WireSlot::Output));

    for slots in variable_slots.values() {
        if slots.len() < 2 {
            continue;
        }
        for i in 0..slots.len() {
            let from = slots[i];
            let to = slots[(i + 1) % slots.len()];
            set_sigma(&mut sigma, from, to, n);
        }
    }

    let encode = |slot: WireSlot| -> F {
        match slot {
            WireSlot::Left(i) => roots[i],
            WireSlot::Right(i) => F::from(K1) * roots[i],
            WireSlot::Output(i) => F::from(K2) * roots[i],
        }
    };

    let s1: Vec<F> = (0..n).map(|i| encode(sigma[i])).collect();
    let s2: Vec<F> = (0..n).map(|i| encode(sigma[n + i])).collect();
    let s3: Vec<F> = (0..n).map(|i| encode(sigma[2 * n + i])).collect();

    Ok([
        Polynomial::new(s1, Basis::Lagrange),
        Polynomial::new(s2, Basis::Lagrange),
        Polynomial::new(s3, Basis::Lagrange),
    ])
}

fn slot_index(slot: WireSlot, n: usize) -> usize {
    match slot {
        WireSlot::Left(i) => i,
        WireSlot::Right(i) => n + i,
        WireSlot::Output(i) => 2 * n + i,
    }
}

fn set_sigma(sigma: &mut [WireSlot], from: WireSlot, to: WireSlot, n: usize) {
    sigma[slot_index(from, n)] = to;
}

/// `rlc(x, y) = x + β·y + γ`, the random linear combination the
/// permutation argument and the linearization polynomial are built from.
/// Bilinear in its arguments: both `x` and `y` may be a [`Polynomial`] or
/// a bare field element, in any combination.
pub mod rlc {
    use super::*;

    /// `rlc` with both arguments polynomials.
    pub fn poly_poly<F: FftField>(
        x: &Polynomial<F>,
        y: &Polynomial<F>,
        beta: F,
        gamma: F,
    ) -> Result<Polynomial<F>, Error> {
        Ok(x.add(&y.scale(beta))?.add_scalar(gamma))
    }

    /// `rlc` with a polynomial `x` and a scalar `y`.
    pub fn poly_scalar<F: FftField>(
        x: &Polynomial<F>,
        y: F,
        beta: F,
        gamma: F,
    ) -> Polynomial<F> {
        x.add_scalar(beta * y + gamma)
    }

    /// `rlc` with a scalar `x` and a polynomial `y`.
    pub fn scalar_poly<F: FftField>(
        x: F,
        y: &Polynomial<F>,
        beta: F,
        gamma: F,
    ) -> Polynomial<F> {
        y.scale(beta).add_scalar(x + gamma)
    }

    /// `rlc` with both arguments scalars.
    pub fn scalar_scalar<F: FftField>(x: F, y: F, beta: F, gamma: F) -> F {
        x + beta * y + gamma
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bls12_381::Fr;

    #[test]
    fn identity_permutation_is_fixed_point_encoding() {
        let n = 4;
        let map: HashMap<String, Vec<WireSlot>> = HashMap::new();
        let [s1, s2, s3] = build_sigma_polynomials::<Fr>(n, &map).unwrap();
        let roots = crate::util::roots_of_unity::<Fr>(n).unwrap();
        for i in 0..n {
            assert_eq!(s1.values()[i], roots[i]);
            assert_eq!(s2.values()[i], Fr::from(K1) * roots[i]);
            assert_eq!(s3.values()[i], Fr::from(K2) * roots[i]);
        }
    }
}
