// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A test-support verifier: enough to check a [`Proof`] end-to-end in
//! this crate's own test suite and benchmarks. It is not succinct — it
//! takes the circuit's cleartext [`CommonPreprocessedInput`] rather than
//! a compact verifying key, so it re-derives the Fiat-Shamir transcript
//! exactly as the prover did instead of trusting a separately-shipped
//! digest. A production verifier would commit to the preprocessed
//! polynomials once, ship only those commitments, and drop this
//! redundant computation; that split is out of scope here (see
//! `DESIGN.md`).

use crate::circuit::CommonPreprocessedInput;
use crate::commitment::Setup;
use crate::error::Error;
use crate::permutation::{rlc, K1, K2};
use crate::polynomial::{Basis, Polynomial};
use crate::proof::Proof;
use crate::prover::{Message1, Message2, Message3, Message4};
use crate::transcript::TranscriptWrapper;
use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{Field, One, PrimeField, Zero};
use ark_poly_commit::kzg10::{Commitment, Proof as KzgProof, VerifierKey, KZG10};
use ark_poly::univariate::DensePolynomial;

/// Commitments to a circuit's preprocessed (selector and permutation)
/// polynomials, computed once per circuit against a fixed [`Setup`].
pub struct PreprocessedCommitments<E: PairingEngine> {
    pub q_l_1: Commitment<E>,
    pub q_r_1: Commitment<E>,
    pub q_m_1: Commitment<E>,
    pub q_o_1: Commitment<E>,
    pub q_c_1: Commitment<E>,
    pub s1_1: Commitment<E>,
    pub s2_1: Commitment<E>,
    pub s3_1: Commitment<E>,
}

impl<E: PairingEngine> PreprocessedCommitments<E> {
    /// Commits to every polynomial in `pk` under `setup`.
    pub fn build(setup: &Setup<E>, pk: &CommonPreprocessedInput<E::Fr>) -> Result<Self, Error> {
        Ok(Self {
            q_l_1: setup.commit(&pk.q_l)?,
            q_r_1: setup.commit(&pk.q_r)?,
            q_m_1: setup.commit(&pk.q_m)?,
            q_o_1: setup.commit(&pk.q_o)?,
            q_c_1: setup.commit(&pk.q_c)?,
            s1_1: setup.commit(&pk.s1)?,
            s2_1: setup.commit(&pk.s2)?,
            s3_1: setup.commit(&pk.s3)?,
        })
    }
}

fn combine<E: PairingEngine>(terms: &[(Commitment<E>, E::Fr)]) -> Commitment<E> {
    let mut acc = E::G1Projective::zero();
    for (comm, scalar) in terms {
        acc += comm.0.mul(scalar.into_repr());
    }
    Commitment(acc.into_affine())
}

fn public_input_poly<F: ark_ff::FftField>(n: usize, public_inputs: &[F]) -> Polynomial<F> {
    let mut values = vec![F::zero(); n];
    for (i, value) in public_inputs.iter().enumerate() {
        values[i] = -*value;
    }
    Polynomial::new(values, Basis::Lagrange)
}

/// Verifies `proof` against the circuit described by `pk` /
/// `preprocessed`, for the given (ordered) `public_inputs`.
///
/// Returns `Ok(())` on acceptance, or the first failing check as an
/// [`Error`]. Both KZG openings (`w_z_1` at `ζ`, `w_zw_1` at `ζω`) must
/// hold for the proof to be accepted.
pub fn verify<E: PairingEngine>(
    verifier_key: &VerifierKey<E>,
    pk: &CommonPreprocessedInput<E::Fr>,
    preprocessed: &PreprocessedCommitments<E>,
    proof: &Proof<E>,
    public_inputs: &[E::Fr],
    transcript_label: &'static [u8],
) -> Result<(), Error> {
    let n = pk.group_order;
    let omega = crate::util::root_of_unity::<E::Fr>(n)?;
    let k1 = E::Fr::from(K1);
    let k2 = E::Fr::from(K2);

    let mut transcript = TranscriptWrapper::<E>::new(transcript_label);
    transcript.bind_circuit(
        n as u64,
        [&pk.q_l, &pk.q_r, &pk.q_m, &pk.q_o, &pk.q_c],
        [&pk.s1, &pk.s2, &pk.s3],
        public_inputs,
    );

    let msg1 = Message1 {
        a_1: proof.a_1,
        b_1: proof.b_1,
        c_1: proof.c_1,
    };
    let (beta, gamma) = transcript.round_1(&msg1);

    let msg2 = Message2 { z_1: proof.z_1 };
    let (alpha, _fft_cofactor) = transcript.round_2(&msg2);

    let msg3 = Message3 {
        t_lo_1: proof.t_lo_1,
        t_mid_1: proof.t_mid_1,
        t_hi_1: proof.t_hi_1,
    };
    let zeta = transcript.round_3(&msg3);

    let msg4 = Message4 {
        a_eval: proof.a_eval,
        b_eval: proof.b_eval,
        c_eval: proof.c_eval,
        s1_eval: proof.s1_eval,
        s2_eval: proof.s2_eval,
        z_shifted_eval: proof.z_shifted_eval,
    };
    let v = transcript.round_4(&msg4);

    let z_h_eval = zeta.pow([n as u64]) - E::Fr::one();
    let n_inv = E::Fr::from(n as u64).inverse().ok_or(Error::ArithmeticError)?;
    let l0_eval = z_h_eval * n_inv * (zeta - E::Fr::one()).inverse().ok_or(Error::ArithmeticError)?;
    let pi_eval = public_input_poly(n, public_inputs).evaluate_at(zeta)?;

    let row_scalar = rlc::scalar_scalar(proof.a_eval, zeta, beta, gamma)
        * rlc::scalar_scalar(proof.b_eval, k1 * zeta, beta, gamma)
        * rlc::scalar_scalar(proof.c_eval, k2 * zeta, beta, gamma);
    let sigma_scalar = rlc::scalar_scalar(proof.a_eval, proof.s1_eval, beta, gamma)
        * rlc::scalar_scalar(proof.b_eval, proof.s2_eval, beta, gamma);

    let r0 = pi_eval
        - l0_eval * alpha.square()
        - alpha * sigma_scalar * (proof.c_eval + gamma) * proof.z_shifted_eval;

    let d_z = alpha * row_scalar + alpha.square() * l0_eval;
    let d_s3 = -(alpha * beta * sigma_scalar * proof.z_shifted_eval);
    let d_t = -z_h_eval;
    let zeta_n = zeta.pow([n as u64]);
    let zeta_2n = zeta.pow([2 * n as u64]);

    let d = combine(&[
        (preprocessed.q_l_1, proof.a_eval),
        (preprocessed.q_r_1, proof.b_eval),
        (preprocessed.q_m_1, proof.a_eval * proof.b_eval),
        (preprocessed.q_o_1, proof.c_eval),
        (preprocessed.q_c_1, E::Fr::one()),
        (proof.z_1, d_z),
        (preprocessed.s3_1, d_s3),
        (proof.t_lo_1, d_t),
        (proof.t_mid_1, d_t * zeta_n),
        (proof.t_hi_1, d_t * zeta_2n),
    ]);

    let f_commitment = combine(&[
        (d, E::Fr::one()),
        (proof.a_1, v),
        (proof.b_1, v.square()),
        (proof.c_1, v.pow([3u64])),
        (preprocessed.s1_1, v.pow([4u64])),
        (preprocessed.s2_1, v.pow([5u64])),
    ]);
    let f_value = -r0
        + v * proof.a_eval
        + v.square() * proof.b_eval
        + v.pow([3u64]) * proof.c_eval
        + v.pow([4u64]) * proof.s1_eval
        + v.pow([5u64]) * proof.s2_eval;

    let w_z_proof = KzgProof {
        w: proof.w_z_1.0,
        random_v: None,
    };
    if !KZG10::<E, DensePolynomial<E::Fr>>::check(
        verifier_key,
        &f_commitment,
        zeta,
        f_value,
        &w_z_proof,
    )? {
        return Err(Error::OpeningCheckFailed);
    }

    let w_zw_proof = KzgProof {
        w: proof.w_zw_1.0,
        random_v: None,
    };
    if !KZG10::<E, DensePolynomial<E::Fr>>::check(
        verifier_key,
        &proof.z_1,
        zeta * omega,
        proof.z_shifted_eval,
        &w_zw_proof,
    )? {
        return Err(Error::OpeningCheckFailed);
    }

    Ok(())
}
