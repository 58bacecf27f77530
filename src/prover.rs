// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The five-round PLONK prover: wire polynomials, the permutation grand
//! product, the quotient polynomial, openings at the Fiat-Shamir
//! challenge `ζ`, and the two KZG opening witnesses.
//!
//! Rounds are strictly sequential — each takes as input exactly the
//! challenges produced by the rounds before it, so re-entry or running a
//! round out of order is a type error, not a runtime check.

use crate::circuit::{lookup, CommonPreprocessedInput, Program, Witness};
use crate::commitment::Setup;
use crate::error::Error;
use crate::permutation::rlc;
use crate::polynomial::{Basis, Polynomial};
use crate::proof::Proof;
use crate::transcript::TranscriptWrapper;
use ark_ec::PairingEngine;
use ark_ff::{FftField, Field};
use ark_poly_commit::kzg10::Commitment;
use tracing::{debug, debug_span, error};

/// Round 1's message: commitments to the wire polynomials.
pub struct Message1<E: PairingEngine> {
    pub a_1: Commitment<E>,
    pub b_1: Commitment<E>,
    pub c_1: Commitment<E>,
}

/// Round 2's message: the commitment to the permutation grand product.
pub struct Message2<E: PairingEngine> {
    pub z_1: Commitment<E>,
}

/// Round 3's message: commitments to the three quotient chunks.
pub struct Message3<E: PairingEngine> {
    pub t_lo_1: Commitment<E>,
    pub t_mid_1: Commitment<E>,
    pub t_hi_1: Commitment<E>,
}

/// Round 4's message: the opening evaluations at `ζ` (and `Z` at `ζω`).
#[derive(Clone, Copy)]
pub struct Message4<F> {
    pub a_eval: F,
    pub b_eval: F,
    pub c_eval: F,
    pub s1_eval: F,
    pub s2_eval: F,
    pub z_shifted_eval: F,
}

/// Round 5's message: commitments to the two opening witness
/// polynomials.
pub struct Message5<E: PairingEngine> {
    pub w_z_1: Commitment<E>,
    pub w_zw_1: Commitment<E>,
}

/// The PLONK prover core. Holds only the circuit's preprocessed input and
/// a reference to the trusted setup; all per-proof state lives on the
/// stack for the duration of a single [`Prover::prove`] call.
pub struct Prover<'s, E: PairingEngine> {
    setup: &'s Setup<E>,
    group_order: usize,
    pk: CommonPreprocessedInput<E::Fr>,
}

impl<'s, E: PairingEngine> Prover<'s, E> {
    /// Builds a prover for `program`'s preprocessed input, against
    /// `setup`.
    pub fn new(setup: &'s Setup<E>, program: &Program<E::Fr>) -> Result<Self, Error> {
        let pk = program.common_preprocessed_input()?;
        Ok(Self {
            setup,
            group_order: pk.group_order,
            pk,
        })
    }

    /// Runs the full five-round protocol, producing a [`Proof`].
    ///
    /// Every assertion below (`spec.md` §7) is a proving-invariant
    /// violation: either the witness does not satisfy the circuit, or
    /// there is an implementation bug. Both abort synchronously.
    pub fn prove(&self, program: &Program<E::Fr>, witness: &Witness) -> Result<Proof<E>, Error> {
        let n = self.group_order;
        let span = debug_span!("prove", group_order = n);
        let _enter = span.enter();

        let mut transcript = TranscriptWrapper::<E>::new(b"plonk");
        let public_input_values = program.public_input_values(witness);
        transcript.bind_circuit(
            n as u64,
            [&self.pk.q_l, &self.pk.q_r, &self.pk.q_m, &self.pk.q_o, &self.pk.q_c],
            [&self.pk.s1, &self.pk.s2, &self.pk.s3],
            &public_input_values,
        );

        let pi = program.public_input_polynomial(n, witness);

        // Round 1
        let wires = program.wires();
        let (a, b, c, msg_1) = self.round_1(&wires, witness, &pi)?;
        let (beta, gamma) = transcript.round_1(&msg_1);
        debug!("round 1 complete");

        // Round 2
        let (z, msg_2) = self.round_2(&a, &b, &c, beta, gamma)?;
        let (alpha, fft_cofactor) = transcript.round_2(&msg_2);
        debug!("round 2 complete");

        // Round 3
        let (t1, t2, t3, msg_3) = self.round_3(
            &a, &b, &c, &pi, &z, alpha, beta, gamma, fft_cofactor,
        )?;
        let zeta = transcript.round_3(&msg_3);
        debug!("round 3 complete");

        // Round 4
        let (msg_4, z_shifted_eval) = self.round_4(&a, &b, &c, &z, zeta)?;
        let v = transcript.round_4(&msg_4);
        debug!("round 4 complete");

        // Round 5
        let msg_5 = self.round_5(
            &a, &b, &c, &pi, &z, &t1, &t2, &t3, alpha, beta, gamma, fft_cofactor, zeta, v, &msg_4,
            z_shifted_eval,
        )?;
        debug!("round 5 complete");

        Ok(Proof {
            a_1: msg_1.a_1,
            b_1: msg_1.b_1,
            c_1: msg_1.c_1,
            z_1: msg_2.z_1,
            t_lo_1: msg_3.t_lo_1,
            t_mid_1: msg_3.t_mid_1,
            t_hi_1: msg_3.t_hi_1,
            a_eval: msg_4.a_eval,
            b_eval: msg_4.b_eval,
            c_eval: msg_4.c_eval,
            s1_eval: msg_4.s1_eval,
            s2_eval: msg_4.s2_eval,
            z_shifted_eval: msg_4.z_shifted_eval,
            w_z_1: msg_5.w_z_1,
            w_zw_1: msg_5.w_zw_1,
        })
    }

    /// Round 1 — wire polynomials, gate-constraint sanity check.
    fn round_1(
        &self,
        wires: &[(Option<String>, Option<String>, Option<String>)],
        witness: &Witness,
        pi: &Polynomial<E::Fr>,
    ) -> Result<(Polynomial<E::Fr>, Polynomial<E::Fr>, Polynomial<E::Fr>, Message1<E>), Error> {
        let n = self.group_order;
        let mut a_values = vec![E::Fr::zero(); n];
        let mut b_values = vec![E::Fr::zero(); n];
        let mut c_values = vec![E::Fr::zero(); n];
        for (i, (l, r, o)) in wires.iter().enumerate() {
            a_values[i] = lookup::<E::Fr>(witness, l);
            b_values[i] = lookup::<E::Fr>(witness, r);
            c_values[i] = lookup::<E::Fr>(witness, o);
        }
        let a = Polynomial::new(a_values, Basis::Lagrange);
        let b = Polynomial::new(b_values, Basis::Lagrange);
        let c = Polynomial::new(c_values, Basis::Lagrange);

        let a_1 = self.setup.commit(&a)?;
        let b_1 = self.setup.commit(&b)?;
        let c_1 = self.setup.commit(&c)?;

        let gates = a
            .mul(&self.pk.q_l)?
            .add(&b.mul(&self.pk.q_r)?)?
            .add(&a.mul(&b)?.mul(&self.pk.q_m)?)?
            .add(&c.mul(&self.pk.q_o)?)?
            .add(pi)?
            .add(&self.pk.q_c)?;
        if gates.values().iter().any(|v| !v.is_zero()) {
            error!("round 1 gate-constraint check failed");
            return Err(Error::GateConstraintUnsatisfied);
        }

        Ok((a, b, c, Message1 { a_1, b_1, c_1 }))
    }

    /// Round 2 — permutation grand product.
    fn round_2(
        &self,
        a: &Polynomial<E::Fr>,
        b: &Polynomial<E::Fr>,
        c: &Polynomial<E::Fr>,
        beta: E::Fr,
        gamma: E::Fr,
    ) -> Result<(Polynomial<E::Fr>, Message2<E>), Error> {
        let n = self.group_order;
        let roots = crate::util::roots_of_unity::<E::Fr>(n)?;
        let k1 = E::Fr::from(crate::permutation::K1);
        let k2 = E::Fr::from(crate::permutation::K2);

        let mut z_values = Vec::with_capacity(n + 1);
        z_values.push(E::Fr::one());
        for i in 0..n {
            let num = rlc::scalar_scalar(a.values()[i], roots[i], beta, gamma)
                * rlc::scalar_scalar(b.values()[i], k1 * roots[i], beta, gamma)
                * rlc::scalar_scalar(c.values()[i], k2 * roots[i], beta, gamma);
            let den = rlc::scalar_scalar(a.values()[i], self.pk.s1.values()[i], beta, gamma)
                * rlc::scalar_scalar(b.values()[i], self.pk.s2.values()[i], beta, gamma)
                * rlc::scalar_scalar(c.values()[i], self.pk.s3.values()[i], beta, gamma);
            let den_inv = den.inverse().ok_or(Error::ArithmeticError)?;
            let next = z_values[i] * num * den_inv;
            z_values.push(next);
        }
        let z_n = z_values.pop().expect("pushed n+1 values");
        if z_n != E::Fr::one() {
            error!("round 2 permutation closure failed: Z_n != 1");
            return Err(Error::PermutationClosureFailed);
        }

        let z = Polynomial::new(z_values, Basis::Lagrange);
        let z_1 = self.setup.commit(&z)?;
        Ok((z, Message2 { z_1 }))
    }

    /// Round 3 — quotient polynomial, split into three chunks.
    #[allow(clippy::too_many_arguments)]
    fn round_3(
        &self,
        a: &Polynomial<E::Fr>,
        b: &Polynomial<E::Fr>,
        c: &Polynomial<E::Fr>,
        pi: &Polynomial<E::Fr>,
        z: &Polynomial<E::Fr>,
        alpha: E::Fr,
        beta: E::Fr,
        gamma: E::Fr,
        h: E::Fr,
    ) -> Result<(
        Polynomial<E::Fr>,
        Polynomial<E::Fr>,
        Polynomial<E::Fr>,
        Message3<E>,
    ), Error> {
        let n = self.group_order;
        let k1 = E::Fr::from(crate::permutation::K1);
        let k2 = E::Fr::from(crate::permutation::K2);

        let a_exp = a.to_coset_extended_lagrange(h)?;
        let b_exp = b.to_coset_extended_lagrange(h)?;
        let c_exp = c.to_coset_extended_lagrange(h)?;
        let pi_exp = pi.to_coset_extended_lagrange(h)?;
        let ql_exp = self.pk.q_l.to_coset_extended_lagrange(h)?;
        let qr_exp = self.pk.q_r.to_coset_extended_lagrange(h)?;
        let qm_exp = self.pk.q_m.to_coset_extended_lagrange(h)?;
        let qo_exp = self.pk.q_o.to_coset_extended_lagrange(h)?;
        let qc_exp = self.pk.q_c.to_coset_extended_lagrange(h)?;
        let z_exp = z.to_coset_extended_lagrange(h)?;
        let z_shifted_exp = z.shift(1)?.to_coset_extended_lagrange(h)?;
        let s1_exp = self.pk.s1.to_coset_extended_lagrange(h)?;
        let s2_exp = self.pk.s2.to_coset_extended_lagrange(h)?;
        let s3_exp = self.pk.s3.to_coset_extended_lagrange(h)?;

        let identity = coset_identity::<E::Fr>(n, h)?;
        let l0 = first_lagrange_polynomial::<E::Fr>(n);
        let l0_exp = l0.to_coset_extended_lagrange(h)?;
        let z_h = coset_vanishing_values::<E::Fr>(n, h)?;

        let gate_constraints = a_exp
            .mul(&ql_exp)?
            .add(&b_exp.mul(&qr_exp)?)?
            .add(&a_exp.mul(&b_exp)?.mul(&qm_exp)?)?
            .add(&c_exp.mul(&qo_exp)?)?
            .add(&pi_exp)?
            .add(&qc_exp)?;

        let perm_lhs = rlc::poly_poly(&a_exp, &identity, beta, gamma)?
            .mul(&rlc::poly_poly(&b_exp, &identity.scale(k1), beta, gamma)?)?
            .mul(&rlc::poly_poly(&c_exp, &identity.scale(k2), beta, gamma)?)?
            .mul(&z_exp)?;
        let perm_rhs = rlc::poly_poly(&a_exp, &s1_exp, beta, gamma)?
            .mul(&rlc::poly_poly(&b_exp, &s2_exp, beta, gamma)?)?
            .mul(&rlc::poly_poly(&c_exp, &s3_exp, beta, gamma)?)?
            .mul(&z_shifted_exp)?;
        let perm_first_row = z_exp.sub_scalar(E::Fr::one()).mul(&l0_exp)?;

        let permutation = perm_lhs
            .sub(&perm_rhs)?
            .scale(alpha)
            .add(&perm_first_row.scale(alpha.square()))?;

        let quotient_numerator = gate_constraints.add(&permutation)?;
        let quotient_expanded = quotient_numerator.pointwise_div(&z_h)?;

        let quotient_coeffs = quotient_expanded.coset_extended_lagrange_to_coeffs(h)?;
        if quotient_coeffs.values()[3 * n..].iter().any(|v| !v.is_zero()) {
            error!("round 3 quotient not divisible by the vanishing polynomial");
            return Err(Error::QuotientNotDivisible);
        }

        let t1 = Polynomial::new(quotient_coeffs.values()[..n].to_vec(), Basis::Monomial).fft()?;
        let t2 =
            Polynomial::new(quotient_coeffs.values()[n..2 * n].to_vec(), Basis::Monomial).fft()?;
        let t3 = Polynomial::new(quotient_coeffs.values()[2 * n..3 * n].to_vec(), Basis::Monomial)
            .fft()?;

        let h_n = h.pow([n as u64]);
        let h_2n = h.pow([2 * n as u64]);
        let reconstructed = t1.evaluate_at(h)? + t2.evaluate_at(h)? * h_n + t3.evaluate_at(h)? * h_2n;
        if reconstructed != quotient_expanded.values()[0] {
            error!("round 3 T1/T2/T3 reconstruction mismatch");
            return Err(Error::QuotientNotDivisible);
        }

        let t_lo_1 = self.setup.commit(&t1)?;
        let t_mid_1 = self.setup.commit(&t2)?;
        let t_hi_1 = self.setup.commit(&t3)?;

        Ok((
            t1,
            t2,
            t3,
            Message3 {
                t_lo_1,
                t_mid_1,
                t_hi_1,
            },
        ))
    }

    /// Round 4 — openings at `ζ`.
    fn round_4(
        &self,
        a: &Polynomial<E::Fr>,
        b: &Polynomial<E::Fr>,
        c: &Polynomial<E::Fr>,
        z: &Polynomial<E::Fr>,
        zeta: E::Fr,
    ) -> Result<(Message4<E::Fr>, E::Fr), Error> {
        let omega = crate::util::root_of_unity::<E::Fr>(self.group_order)?;
        let a_eval = a.evaluate_at(zeta)?;
        let b_eval = b.evaluate_at(zeta)?;
        let c_eval = c.evaluate_at(zeta)?;
        let s1_eval = self.pk.s1.evaluate_at(zeta)?;
        let s2_eval = self.pk.s2.evaluate_at(zeta)?;
        let z_shifted_eval = z.evaluate_at(zeta * omega)?;
        Ok((
            Message4 {
                a_eval,
                b_eval,
                c_eval,
                s1_eval,
                s2_eval,
                z_shifted_eval,
            },
            z_shifted_eval,
        ))
    }

    /// Round 5 — linearization and the two KZG opening witnesses.
    #[allow(clippy::too_many_arguments)]
    fn round_5(
        &self,
        a: &Polynomial<E::Fr>,
        b: &Polynomial<E::Fr>,
        c: &Polynomial<E::Fr>,
        pi: &Polynomial<E::Fr>,
        z: &Polynomial<E::Fr>,
        t1: &Polynomial<E::Fr>,
        t2: &Polynomial<E::Fr>,
        t3: &Polynomial<E::Fr>,
        alpha: E::Fr,
        beta: E::Fr,
        gamma: E::Fr,
        h: E::Fr,
        zeta: E::Fr,
        v: E::Fr,
        evals: &Message4<E::Fr>,
        z_shifted_eval: E::Fr,
    ) -> Result<Message5<E>, Error> {
        let n = self.group_order;
        let omega = crate::util::root_of_unity::<E::Fr>(n)?;
        let k1 = E::Fr::from(crate::permutation::K1);
        let k2 = E::Fr::from(crate::permutation::K2);

        let l0 = first_lagrange_polynomial::<E::Fr>(n);
        let l0_eval = l0.evaluate_at(zeta)?;
        let z_h_eval = zeta.pow([n as u64]) - E::Fr::one();
        let pi_eval = pi.evaluate_at(zeta)?;

        let ql_exp = self.pk.q_l.to_coset_extended_lagrange(h)?;
        let qr_exp = self.pk.q_r.to_coset_extended_lagrange(h)?;
        let qm_exp = self.pk.q_m.to_coset_extended_lagrange(h)?;
        let qo_exp = self.pk.q_o.to_coset_extended_lagrange(h)?;
        let qc_exp = self.pk.q_c.to_coset_extended_lagrange(h)?;
        let s3_exp = self.pk.s3.to_coset_extended_lagrange(h)?;
        let z_exp = z.to_coset_extended_lagrange(h)?;
        let a_exp = a.to_coset_extended_lagrange(h)?;
        let b_exp = b.to_coset_extended_lagrange(h)?;
        let c_exp = c.to_coset_extended_lagrange(h)?;
        let s1_exp = self.pk.s1.to_coset_extended_lagrange(h)?;
        let s2_exp = self.pk.s2.to_coset_extended_lagrange(h)?;
        let t1_exp = t1.to_coset_extended_lagrange(h)?;
        let t2_exp = t2.to_coset_extended_lagrange(h)?;
        let t3_exp = t3.to_coset_extended_lagrange(h)?;

        let gates_term = ql_exp
            .scale(evals.a_eval)
            .add(&qr_exp.scale(evals.b_eval))?
            .add(&qm_exp.scale(evals.a_eval * evals.b_eval))?
            .add(&qo_exp.scale(evals.c_eval))?
            .add_scalar(pi_eval)
            .add(&qc_exp)?;

        let row_scalar = rlc::scalar_scalar(evals.a_eval, zeta, beta, gamma)
            * rlc::scalar_scalar(evals.b_eval, k1 * zeta, beta, gamma)
            * rlc::scalar_scalar(evals.c_eval, k2 * zeta, beta, gamma);
        let sigma_scalar = rlc::scalar_scalar(evals.a_eval, evals.s1_eval, beta, gamma)
            * rlc::scalar_scalar(evals.b_eval, evals.s2_eval, beta, gamma)
            * z_shifted_eval;
        let permutation_term = z_exp
            .scale(row_scalar)
            .sub(&rlc::scalar_poly(evals.c_eval, &s3_exp, beta, gamma).scale(sigma_scalar))?;

        let first_row_term = z_exp.sub_scalar(E::Fr::one()).scale(l0_eval);

        let t_argument = t1_exp
            .add(&t2_exp.scale(zeta.pow([n as u64])))?
            .add(&t3_exp.scale(zeta.pow([2 * n as u64])))?;

        let r_argument = gates_term
            .add(&permutation_term.scale(alpha))?
            .add(&first_row_term.scale(alpha.square()))?
            .sub(&t_argument.scale(z_h_eval))?;

        let r_coeffs = r_argument.coset_extended_lagrange_to_coeffs(h)?;
        if r_coeffs.values()[n..].iter().any(|v| !v.is_zero()) {
            error!("round 5 linearization polynomial has degree >= n");
            return Err(Error::LinearizationNonZero);
        }
        let r = Polynomial::new(r_coeffs.values()[..n].to_vec(), Basis::Monomial).fft()?;
        if !r.evaluate_at(zeta)?.is_zero() {
            error!("round 5 linearization polynomial does not vanish at zeta");
            return Err(Error::LinearizationNonZero);
        }

        let identity = coset_identity::<E::Fr>(n, h)?;

        let w_z_numerator = r_argument
            .add(&a_exp.sub_scalar(evals.a_eval).scale(v))?
            .add(&b_exp.sub_scalar(evals.b_eval).scale(v.square()))?
            .add(&c_exp.sub_scalar(evals.c_eval).scale(v.pow([3u64])))?
            .add(&s1_exp.sub_scalar(evals.s1_eval).scale(v.pow([4u64])))?
            .add(&s2_exp.sub_scalar(evals.s2_eval).scale(v.pow([5u64])))?;
        let w_z_denominator = identity.sub_scalar(zeta);
        let w_z_expanded = w_z_numerator.pointwise_div(&w_z_denominator)?;
        let w_z_coeffs = w_z_expanded.coset_extended_lagrange_to_coeffs(h)?;
        if w_z_coeffs.values()[n..].iter().any(|v| !v.is_zero()) {
            error!("round 5 W_z has degree >= n");
            return Err(Error::OpeningDegreeTooLarge);
        }
        let w_z = Polynomial::new(w_z_coeffs.values()[..n].to_vec(), Basis::Monomial).fft()?;

        let w_zw_numerator = z_exp.sub_scalar(z_shifted_eval);
        let w_zw_denominator = identity.sub_scalar(zeta * omega);
        let w_zw_expanded = w_zw_numerator.pointwise_div(&w_zw_denominator)?;
        let w_zw_coeffs = w_zw_expanded.coset_extended_lagrange_to_coeffs(h)?;
        if w_zw_coeffs.values()[n..].iter().any(|v| !v.is_zero()) {
            error!("round 5 W_zw has degree >= n");
            return Err(Error::OpeningDegreeTooLarge);
        }
        let w_zw = Polynomial::new(w_zw_coeffs.values()[..n].to_vec(), Basis::Monomial).fft()?;

        let w_z_1 = self.setup.commit(&w_z)?;
        let w_zw_1 = self.setup.commit(&w_zw)?;

        Ok(Message5 { w_z_1, w_zw_1 })
    }
}

/// Builds `L0`, the Lagrange basis polynomial that is `1` at `ω^0` and
/// `0` at every other `n`-th root of unity.
fn first_lagrange_polynomial<F: FftField>(n: usize) -> Polynomial<F> {
    let mut values = vec![F::zero(); n];
    values[0] = F::one();
    Polynomial::new(values, Basis::Lagrange)
}

/// The identity polynomial expanded on the coset: value `h·μ^i` at
/// index `i`, for the `4n`-th roots of unity `μ`.
fn coset_identity<F: FftField>(n: usize, h: F) -> Result<Polynomial<F>, Error> {
    let roots = crate::util::roots_of_unity::<F>(4 * n)?;
    let values = roots.into_iter().map(|r| r * h).collect();
    Ok(Polynomial::new(values, Basis::CosetExtendedLagrange(h)))
}

/// `Z_H(X) = X^n - 1` evaluated pointwise on the coset: nonzero
/// everywhere since `h^n != 1`.
fn coset_vanishing_values<F: FftField>(n: usize, h: F) -> Result<Polynomial<F>, Error> {
    let roots = crate::util::roots_of_unity::<F>(4 * n)?;
    let values = roots
        .into_iter()
        .map(|r| (r * h).pow([n as u64]) - F::one())
        .collect();
    Ok(Polynomial::new(values, Basis::CosetExtendedLagrange(h)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::circuit::Program;
    use crate::commitment::Setup;
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_std::test_rng;

    /// Scenario 4: two gates wired so the output of gate 0 (`link`)
    /// feeds into the input of gate 1, but the wire values supplied for
    /// that shared variable disagree between the two rows even though
    /// each row's own gate constraint is individually satisfied. Round
    /// 2's grand-product accumulator must fail to close to `1`.
    #[test]
    fn copy_constraint_violation_fails_permutation_closure() {
        let mut rng = test_rng();
        let mut program = Program::<Fr>::new();
        program.add_gate(Program::mul_gate("x", "y", "link"));
        program.add_gate(Program::equality_gate("link", "z"));

        let setup = Setup::<Bls12_381>::setup(16, &mut rng).unwrap();
        let prover = Prover::new(&setup, &program).unwrap();

        // Row 0: x * y = link, consistently satisfied (2 * 3 = 6).
        // Row 1: equality gate reads "link" as 5, paired with z = 5, so
        // the row's own constraint (link - z = 0) holds locally — but 5
        // disagrees with row 0's link value of 6, which the copy
        // constraint requires to match.
        let a = Polynomial::new(vec![Fr::from(2u64), Fr::from(5u64)], Basis::Lagrange);
        let b = Polynomial::new(vec![Fr::from(3u64), Fr::from(5u64)], Basis::Lagrange);
        let c = Polynomial::new(vec![Fr::from(6u64), Fr::from(0u64)], Basis::Lagrange);

        let beta = Fr::from(7u64);
        let gamma = Fr::from(13u64);
        match prover.round_2(&a, &b, &c, beta, gamma) {
            Err(Error::PermutationClosureFailed) => {}
            Err(_) => panic!("expected PermutationClosureFailed, got a different error"),
            Ok(_) => panic!("expected PermutationClosureFailed, got Ok"),
        }
    }

    /// Scenario 1/3 at the round level: the gate-constraint sanity check
    /// fires precisely when the witness does not satisfy the circuit.
    #[test]
    fn round_1_rejects_unsatisfying_witness() {
        let mut rng = test_rng();
        let mut program = Program::<Fr>::new();
        program.add_gate(Program::mul_gate("a", "b", "c"));

        let setup = Setup::<Bls12_381>::setup(16, &mut rng).unwrap();
        let prover = Prover::new(&setup, &program).unwrap();

        let wires = program.wires();
        let pi = program.public_input_polynomial(prover.group_order, &crate::circuit::Witness::new());

        let mut bad_witness = crate::circuit::Witness::new();
        bad_witness.insert(Some("a".to_string()), 3);
        bad_witness.insert(Some("b".to_string()), 4);
        bad_witness.insert(Some("c".to_string()), 11);

        match prover.round_1(&wires, &bad_witness, &pi) {
            Err(Error::GateConstraintUnsatisfied) => {}
            Err(_) => panic!("expected GateConstraintUnsatisfied, got a different error"),
            Ok(_) => panic!("expected GateConstraintUnsatisfied, got Ok"),
        }
    }
}
