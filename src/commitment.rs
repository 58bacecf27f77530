// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! KZG-style commitment to a single group element, given an SRS produced
//! by a one-time trusted setup.

use crate::error::Error;
use crate::polynomial::{Basis, Polynomial};
use ark_ec::PairingEngine;
use ark_poly::univariate::DensePolynomial;
use ark_poly_commit::kzg10::{Commitment, Powers, VerifierKey, KZG10};
use rand_core::RngCore;

/// A trusted setup / SRS, and the `commit` operation it enables.
///
/// Wraps `ark-poly-commit`'s KZG10 scheme but always commits with no
/// hiding bound: `spec.md`'s Non-goals explicitly do not require
/// emitting blinding scalars, so every commitment here is the bare
/// `[P(τ)]_1 = Σ c_i·[τ^i]_1`.
pub struct Setup<E: PairingEngine> {
    powers: Powers<'static, E>,
    verifier_key: VerifierKey<E>,
}

impl<E: PairingEngine> Setup<E> {
    /// Runs a (test-only, insecure) trusted setup supporting polynomials
    /// of degree up to `max_degree`.
    pub fn setup<R: RngCore>(max_degree: usize, rng: &mut R) -> Result<Self, Error> {
        let params = KZG10::<E, DensePolynomial<E::Fr>>::setup(max_degree, false, rng)?;
        let (powers, verifier_key) =
            KZG10::<E, DensePolynomial<E::Fr>>::trim(&params, max_degree)?;
        Ok(Self {
            powers,
            verifier_key,
        })
    }

    /// The verifier key paired with this SRS.
    pub fn verifier_key(&self) -> &VerifierKey<E> {
        &self.verifier_key
    }

    /// The powers-of-tau commitment key paired with this SRS (exposed so
    /// the verifier's batched KZG check can reuse it).
    pub fn powers(&self) -> &Powers<'static, E> {
        &self.powers
    }

    /// `commit(P) = [P(τ)]_1`. Converts `P` to monomial form first if it
    /// is not already there.
    pub fn commit(&self, poly: &Polynomial<E::Fr>) -> Result<Commitment<E>, Error> {
        let monomial = match poly.basis() {
            Basis::Monomial => poly.clone(),
            Basis::Lagrange => poly.ifft()?,
            Basis::CosetExtendedLagrange(h) => poly.coset_extended_lagrange_to_coeffs(h)?,
        };
        if monomial.size() > self.powers.powers_of_g.len() {
            return Err(Error::PolynomialDegreeTooLarge);
        }
        let dense: DensePolynomial<E::Fr> = monomial.into();
        let (commitment, _) =
            KZG10::<E, DensePolynomial<E::Fr>>::commit(&self.powers, &dense, None, None)?;
        Ok(commitment)
    }
}
