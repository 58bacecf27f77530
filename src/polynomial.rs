// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A dense polynomial carrying a runtime basis tag, so that arithmetic
//! between polynomials in incompatible bases or sizes is rejected rather
//! than silently miscomputed.
//!
//! Three bases are modelled, matching the reference prover:
//!
//! - [`Basis::Monomial`]: coefficients of `Σ c_i X^i`.
//! - [`Basis::Lagrange`]: values at the `n`-th roots of unity.
//! - [`Basis::CosetExtendedLagrange`]: values at `h·μ^i` for the `4n`-th
//!   roots of unity `μ` and coset offset `h`.

use crate::error::Error;
use crate::util::domain_of_size;
use ark_ff::{batch_inversion, FftField};
use ark_poly::{
    univariate::DensePolynomial, EvaluationDomain, GeneralEvaluationDomain,
    UVPolynomial,
};

/// Tags the basis a [`Polynomial`]'s values are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Basis<F> {
    /// Coefficients of `Σ c_i X^i`.
    Monomial,
    /// Values at the `n`-th roots of unity, `n = values.len()`.
    Lagrange,
    /// Values at `h·μ^i`, `μ` a primitive `values.len()`-th root of unity.
    CosetExtendedLagrange(F),
}

/// A dense, basis-tagged polynomial.
///
/// Arithmetic (`+`, `-`, `*`) is only defined between polynomials that
/// share both basis and size; a bare scalar on either side promotes to a
/// constant polynomial in the other operand's basis and size (see
/// [`Polynomial::constant_like`]).
#[derive(Clone, Debug)]
pub struct Polynomial<F: FftField> {
    pub(crate) values: Vec<F>,
    pub(crate) basis: Basis<F>,
}

impl<F: FftField> Polynomial<F> {
    /// Builds a polynomial from `values` tagged with `basis`.
    pub fn new(values: Vec<F>, basis: Basis<F>) -> Self {
        Self { values, basis }
    }

    /// Number of values/coefficients.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// The basis this polynomial is expressed in.
    pub fn basis(&self) -> Basis<F> {
        self.basis
    }

    /// Raw values/coefficients, in basis order.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    fn domain(&self) -> Result<GeneralEvaluationDomain<F>, Error> {
        domain_of_size(self.size())
    }

    fn require_basis(&self, basis: &Basis<F>) -> Result<(), Error> {
        match (basis, &self.basis) {
            (Basis::Monomial, Basis::Monomial) => Ok(()),
            (Basis::Lagrange, Basis::Lagrange) => Ok(()),
            (Basis::CosetExtendedLagrange(_), Basis::CosetExtendedLagrange(_)) => {
                Ok(())
            }
            _ => Err(Error::WrongBasis),
        }
    }

    fn require_same_shape(&self, other: &Self) -> Result<(), Error> {
        if self.values.len() != other.values.len() {
            return Err(Error::BasisMismatch);
        }
        match (self.basis, other.basis) {
            (Basis::Monomial, Basis::Monomial) => Ok(()),
            (Basis::Lagrange, Basis::Lagrange) => Ok(()),
            (
                Basis::CosetExtendedLagrange(h1),
                Basis::CosetExtendedLagrange(h2),
            ) if h1 == h2 => Ok(()),
            _ => Err(Error::BasisMismatch),
        }
    }

    /// Promotes `value` to a constant polynomial matching `self`'s basis
    /// and size.
    pub fn constant_like(&self, value: F) -> Self {
        Self {
            values: vec![value; self.values.len()],
            basis: self.basis,
        }
    }

    /// Pointwise addition; `self` and `other` must share basis and size.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.require_same_shape(other)?;
        Ok(Self {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| *a + b)
                .collect(),
            basis: self.basis,
        })
    }

    /// Pointwise subtraction; `self` and `other` must share basis and
    /// size.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.require_same_shape(other)?;
        Ok(Self {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| *a - b)
                .collect(),
            basis: self.basis,
        })
    }

    /// Pointwise multiplication; `self` and `other` must share basis and
    /// size.
    ///
    /// Note: for `Basis::Monomial` this is *not* polynomial
    /// multiplication (which would raise the degree) — it is only used
    /// in this crate in the Lagrange/coset bases, where pointwise
    /// multiplication is exactly what the algebra calls for.
    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        self.require_same_shape(other)?;
        Ok(Self {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| *a * b)
                .collect(),
            basis: self.basis,
        })
    }

    /// Adds a bare scalar, promoted to a constant polynomial of `self`'s
    /// basis and size.
    pub fn add_scalar(&self, scalar: F) -> Self {
        self.add(&self.constant_like(scalar)).expect("same shape by construction")
    }

    /// Subtracts a bare scalar, promoted to a constant polynomial of
    /// `self`'s basis and size.
    pub fn sub_scalar(&self, scalar: F) -> Self {
        self.sub(&self.constant_like(scalar)).expect("same shape by construction")
    }

    /// Multiplies by a bare scalar.
    pub fn scale(&self, scalar: F) -> Self {
        Self {
            values: self.values.iter().map(|v| *v * scalar).collect(),
            basis: self.basis,
        }
    }

    /// Pointwise division; only defined in `Lagrange` or
    /// `CosetExtendedLagrange` bases. Fails if `other` is zero at any
    /// evaluation point.
    pub fn pointwise_div(&self, other: &Self) -> Result<Self, Error> {
        self.require_same_shape(other)?;
        if matches!(self.basis, Basis::Monomial) {
            return Err(Error::WrongBasis);
        }
        let mut denominators = other.values.clone();
        if denominators.iter().any(|d| d.is_zero()) {
            return Err(Error::ArithmeticError);
        }
        batch_inversion(&mut denominators);
        Ok(Self {
            values: self
                .values
                .iter()
                .zip(denominators.iter())
                .map(|(a, b_inv)| *a * b_inv)
                .collect(),
            basis: self.basis,
        })
    }

    /// Barycentric evaluation at an arbitrary point `z`, only defined in
    /// `Lagrange`:
    ///
    /// ```text
    /// P(z) = (z^n - 1)/n · Σ_i v_i · ω^i / (z - ω^i)
    /// ```
    ///
    /// Falls back to a direct lookup when `z` coincides with a root of
    /// unity, to avoid the `0/0` the closed form would otherwise hit.
    pub fn evaluate_at(&self, z: F) -> Result<F, Error> {
        self.require_basis(&Basis::Lagrange)?;
        let domain = self.domain()?;
        let n = self.size();

        let gen = domain.group_gen();
        let mut denominators = Vec::with_capacity(n);
        let mut root_pow = F::one();
        for _ in 0..n {
            denominators.push(z - root_pow);
            root_pow *= gen;
        }

        // Direct lookup if z is (numerically) a root of unity: some
        // denominator above is exactly zero.
        if let Some(idx) = denominators.iter().position(|d| d.is_zero()) {
            return Ok(self.values[idx]);
        }

        batch_inversion(&mut denominators);

        let z_n = z.pow([n as u64]);
        let z_h_eval = z_n - F::one();
        let numerator = z_h_eval * F::from(n as u64).inverse().ok_or(Error::ArithmeticError)?;

        let mut root_pow = F::one();
        let mut acc = F::zero();
        for i in 0..n {
            acc += self.values[i] * root_pow * denominators[i];
            root_pow *= domain.group_gen();
        }
        Ok(acc * numerator)
    }

    /// Cyclic left rotation of values by `k`: returns `P(X·ω^k)` on the
    /// same domain. Only defined in `Lagrange`.
    pub fn shift(&self, k: usize) -> Result<Self, Error> {
        self.require_basis(&Basis::Lagrange)?;
        let n = self.size();
        let k = k % n.max(1);
        let mut rotated = self.values[k..].to_vec();
        rotated.extend_from_slice(&self.values[..k]);
        Ok(Self {
            values: rotated,
            basis: Basis::Lagrange,
        })
    }

    /// Converts a `Monomial` polynomial to `Lagrange` of the same size
    /// via FFT.
    pub fn fft(&self) -> Result<Self, Error> {
        self.require_basis(&Basis::Monomial)?;
        let domain = self.domain()?;
        Ok(Self {
            values: domain.fft(&self.values),
            basis: Basis::Lagrange,
        })
    }

    /// Converts a `Lagrange` polynomial to `Monomial` of the same size
    /// via inverse FFT.
    pub fn ifft(&self) -> Result<Self, Error> {
        self.require_basis(&Basis::Lagrange)?;
        let domain = self.domain()?;
        Ok(Self {
            values: domain.ifft(&self.values),
            basis: Basis::Monomial,
        })
    }

    /// Produces a `CosetExtendedLagrange(4n)` representation of a
    /// `Lagrange(n)` polynomial with coset offset `h`: inverse-FFT to
    /// monomial form, scale coefficient `i` by `h^i`, zero-pad to `4n`,
    /// then FFT.
    pub fn to_coset_extended_lagrange(&self, h: F) -> Result<Self, Error> {
        self.require_basis(&Basis::Lagrange)?;
        let n = self.size();
        let monomial = self.ifft()?;
        let domain_4n = domain_of_size::<F>(4 * n)?;
        let mut coeffs = monomial.values;
        coeffs.resize(4 * n, F::zero());
        Ok(Self {
            values: domain_4n.coset_fft_with_offset(&coeffs, h),
            basis: Basis::CosetExtendedLagrange(h),
        })
    }

    /// Inverse of [`Polynomial::to_coset_extended_lagrange`]: produces a
    /// `Monomial` polynomial of length `4n` from a
    /// `CosetExtendedLagrange(4n)` polynomial with offset `h`. The
    /// caller is responsible for checking degree bounds on the result
    /// (e.g. that the top `n` coefficients are zero).
    pub fn coset_extended_lagrange_to_coeffs(&self, h: F) -> Result<Self, Error> {
        match self.basis {
            Basis::CosetExtendedLagrange(offset) if offset == h => {}
            _ => return Err(Error::WrongBasis),
        }
        let domain_4n = self.domain()?;
        Ok(Self {
            values: domain_4n.coset_ifft_with_offset(&self.values, h),
            basis: Basis::Monomial,
        })
    }
}

/// `EvaluationDomain` does not expose coset FFT with an arbitrary
/// (non-builtin) offset directly in terms we want to reuse across both
/// directions, so we implement the multiply-before/after-FFT dance
/// ourselves atop the plain `fft`/`ifft` the crate already exposes.
trait CosetFft<F: FftField>: EvaluationDomain<F> {
    fn coset_fft_with_offset(&self, coeffs: &[F], offset: F) -> Vec<F>;
    fn coset_ifft_with_offset(&self, evals: &[F], offset: F) -> Vec<F>;
}

impl<F: FftField> CosetFft<F> for GeneralEvaluationDomain<F> {
    fn coset_fft_with_offset(&self, coeffs: &[F], offset: F) -> Vec<F> {
        let mut scaled = coeffs.to_vec();
        let mut power = F::one();
        for c in scaled.iter_mut() {
            *c *= power;
            power *= offset;
        }
        self.fft(&scaled)
    }

    fn coset_ifft_with_offset(&self, evals: &[F], offset: F) -> Vec<F> {
        let mut coeffs = self.ifft(evals);
        let offset_inv = offset.inverse().expect("offset is non-zero");
        let mut power = F::one();
        for c in coeffs.iter_mut() {
            *c *= power;
            power *= offset_inv;
        }
        coeffs
    }
}

impl<F: FftField> From<Polynomial<F>> for DensePolynomial<F> {
    fn from(poly: Polynomial<F>) -> Self {
        assert!(
            matches!(poly.basis, Basis::Monomial),
            "only a Monomial Polynomial converts directly to DensePolynomial"
        );
        DensePolynomial::from_coefficients_vec(poly.values)
    }
}

impl<F: FftField> From<DensePolynomial<F>> for Polynomial<F> {
    fn from(poly: DensePolynomial<F>) -> Self {
        Polynomial {
            values: poly.coeffs,
            basis: Basis::Monomial,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::batch_test;
    use ark_ff::UniformRand;
    use ark_std::test_rng;

    fn fft_ifft_round_trip<F: FftField + UniformRand>() {
        let mut rng = test_rng();
        let n = 8;
        let coeffs: Vec<F> = (0..n).map(|_| F::rand(&mut rng)).collect();
        let poly = Polynomial::new(coeffs.clone(), Basis::Monomial);
        let back = poly.fft().unwrap().ifft().unwrap();
        assert_eq!(back.values, coeffs);
    }

    fn coset_round_trip<F: FftField + UniformRand>() {
        let mut rng = test_rng();
        let n = 8;
        let values: Vec<F> = (0..n).map(|_| F::rand(&mut rng)).collect();
        let poly = Polynomial::new(values, Basis::Lagrange);
        let h = F::from(7u64);
        let extended = poly.to_coset_extended_lagrange(h).unwrap();
        assert_eq!(extended.size(), 4 * n);
        let coeffs = extended.coset_extended_lagrange_to_coeffs(h).unwrap();
        let monomial = poly.ifft().unwrap();
        assert_eq!(&coeffs.values[..n], monomial.values.as_slice());
        assert!(coeffs.values[n..].iter().all(|v| v.is_zero()));
    }

    fn barycentric_matches_values_at_roots<F: FftField + UniformRand>() {
        let n = 8;
        let values: Vec<F> = (0..n as u64).map(F::from).collect();
        let poly = Polynomial::new(values.clone(), Basis::Lagrange);
        let roots = crate::util::roots_of_unity::<F>(n).unwrap();
        for (i, root) in roots.iter().enumerate() {
            assert_eq!(poly.evaluate_at(*root).unwrap(), values[i]);
        }
    }

    fn shift_rotates_values<F: FftField + UniformRand>() {
        let values = vec![F::from(0u64), F::from(1u64), F::from(2u64), F::from(3u64)];
        let poly = Polynomial::new(values, Basis::Lagrange);
        let shifted = poly.shift(1).unwrap();
        assert_eq!(
            shifted.values,
            vec![F::from(1u64), F::from(2u64), F::from(3u64), F::from(0u64)]
        );
    }

    batch_test!(
        [fft_ifft_round_trip, coset_round_trip, barycentric_matches_values_at_roots, shift_rotates_values]
        => (ark_bls12_381::Fr, bls12_381)
    );
    batch_test!(
        [fft_ifft_round_trip, coset_round_trip, barycentric_matches_values_at_roots, shift_rotates_values]
        => (ark_bls12_377::Fr, bls12_377)
    );
}
