// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! This is an extension over the [Merlin Transcript](Transcript) which adds
//! the domain-separated, per-round Fiat-Shamir challenge derivation the
//! five-round prover drives itself from.

use crate::polynomial::{Basis, Polynomial};
use crate::prover::{Message1, Message2, Message3, Message4};
use ark_ec::PairingEngine;
use ark_ff::{Field, PrimeField, Zero};
use ark_poly_commit::kzg10::Commitment;
use ark_serialize::CanonicalSerialize;
use core::marker::PhantomData;
use merlin::Transcript;

/// Wrapper around [`Transcript`] that knows how to absorb a `Prover`'s
/// round messages and derive the challenges that round produces.
#[derive(derivative::Derivative)]
#[derivative(Clone)]
pub struct TranscriptWrapper<E>
where
    E: PairingEngine,
{
    /// Base Transcript
    pub transcript: Transcript,

    /// Type Parameter Marker
    __: PhantomData<E>,
}

impl<E> TranscriptWrapper<E>
where
    E: PairingEngine,
{
    /// Builds a new [`TranscriptWrapper`] with the given `label`.
    #[inline]
    pub fn new(label: &'static [u8]) -> Self {
        Self {
            transcript: Transcript::new(label),
            __: PhantomData,
        }
    }

    /// Absorbs a domain-separation commitment to the circuit's common
    /// preprocessed input and the public inputs, binding every challenge
    /// derived afterwards to this circuit and these public inputs.
    ///
    /// The reference implementation this crate is modelled on never does
    /// this (marked `FIXME` there); skipping it lets a verifier accept a
    /// proof against a *different* circuit sharing the same witness
    /// shape, so this crate performs the absorption unconditionally.
    pub fn bind_circuit(
        &mut self,
        group_order: u64,
        selectors: [&Polynomial<E::Fr>; 5],
        sigmas: [&Polynomial<E::Fr>; 3],
        public_inputs: &[E::Fr],
    ) {
        self.circuit_domain_sep(group_order);
        for (label, poly) in [b"q_l".as_slice(), b"q_r", b"q_m", b"q_o", b"q_c"]
            .into_iter()
            .zip(selectors.into_iter())
        {
            self.append_lagrange_poly(label, poly);
        }
        for (label, poly) in [b"s_1".as_slice(), b"s_2", b"s_3"]
            .into_iter()
            .zip(sigmas.into_iter())
        {
            self.append_lagrange_poly(label, poly);
        }
        self.transcript
            .append_u64(b"num-public-inputs", public_inputs.len() as u64);
        for pi in public_inputs {
            self.append_scalar(b"public-input", pi);
        }
    }

    fn append_lagrange_poly(&mut self, label: &'static [u8], poly: &Polynomial<E::Fr>) {
        debug_assert!(matches!(poly.basis(), Basis::Lagrange));
        self.transcript
            .append_u64(b"poly-len", poly.size() as u64);
        for value in poly.values() {
            self.append_scalar(label, value);
        }
    }

    /// Round 1: absorbs `(a_1, b_1, c_1)`, returns `(β, γ)`.
    pub fn round_1(&mut self, msg: &Message1<E>) -> (E::Fr, E::Fr) {
        self.append_commitment(b"a_1", &msg.a_1);
        self.append_commitment(b"b_1", &msg.b_1);
        self.append_commitment(b"c_1", &msg.c_1);
        let beta = self.nonzero_challenge_scalar(b"beta");
        let gamma = self.nonzero_challenge_scalar(b"gamma");
        (beta, gamma)
    }

    /// Round 2: absorbs `z_1`, returns `(α, fft_cofactor)`, both
    /// guaranteed non-zero.
    pub fn round_2(&mut self, msg: &Message2<E>) -> (E::Fr, E::Fr) {
        self.append_commitment(b"z_1", &msg.z_1);
        let alpha = self.nonzero_challenge_scalar(b"alpha");
        let fft_cofactor = self.nonzero_challenge_scalar(b"fft_cofactor");
        (alpha, fft_cofactor)
    }

    /// Round 3: absorbs `(t_lo_1, t_mid_1, t_hi_1)`, returns `ζ`.
    pub fn round_3(&mut self, msg: &Message3<E>) -> E::Fr {
        self.append_commitment(b"t_lo_1", &msg.t_lo_1);
        self.append_commitment(b"t_mid_1", &msg.t_mid_1);
        self.append_commitment(b"t_hi_1", &msg.t_hi_1);
        self.challenge_scalar(b"zeta")
    }

    /// Round 4: absorbs the six opening evaluations, returns `v`.
    pub fn round_4(&mut self, msg: &Message4<E::Fr>) -> E::Fr {
        self.append_scalar(b"a_eval", &msg.a_eval);
        self.append_scalar(b"b_eval", &msg.b_eval);
        self.append_scalar(b"c_eval", &msg.c_eval);
        self.append_scalar(b"s1_eval", &msg.s1_eval);
        self.append_scalar(b"s2_eval", &msg.s2_eval);
        self.append_scalar(b"z_shifted_eval", &msg.z_shifted_eval);
        self.nonzero_challenge_scalar(b"v")
    }
}

/// Transcript adds an abstraction over the Merlin transcript
/// For convenience
pub(crate) trait TranscriptProtocol<E>
where
    E: PairingEngine,
{
    /// Append a `commitment` with the given `label`.
    fn append_commitment(&mut self, label: &'static [u8], comm: &Commitment<E>);

    /// Append a scalar with the given `label`.
    fn append_scalar(&mut self, label: &'static [u8], s: &E::Fr);

    /// Compute a `label`ed challenge variable.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> E::Fr;

    /// Compute a `label`ed challenge variable, retrying (with a counter
    /// suffix) on the negligible-probability event that it is zero.
    fn nonzero_challenge_scalar(&mut self, label: &'static [u8]) -> E::Fr;

    /// Append domain separator for the circuit size.
    fn circuit_domain_sep(&mut self, n: u64);
}

impl<E> TranscriptProtocol<E> for TranscriptWrapper<E>
where
    E: PairingEngine,
{
    fn append_commitment(
        &mut self,
        label: &'static [u8],
        comm: &Commitment<E>,
    ) {
        let mut bytes = Vec::new();
        comm.0.serialize(&mut bytes).unwrap();
        self.transcript.append_message(label, &bytes);
    }

    fn append_scalar(&mut self, label: &'static [u8], s: &E::Fr) {
        let mut bytes = Vec::new();
        s.serialize(&mut bytes).unwrap();
        self.transcript.append_message(label, &bytes)
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> E::Fr {
        let size = E::Fr::size_in_bits() / 8;
        let mut buf = vec![0u8; size];
        self.transcript.challenge_bytes(label, &mut buf);
        E::Fr::from_random_bytes(&buf).unwrap()
    }

    fn nonzero_challenge_scalar(&mut self, label: &'static [u8]) -> E::Fr {
        let mut attempt = 0u64;
        loop {
            self.transcript.append_u64(b"retry", attempt);
            let challenge = self.challenge_scalar(label);
            if !challenge.is_zero() {
                return challenge;
            }
            attempt += 1;
        }
    }

    fn circuit_domain_sep(&mut self, n: u64) {
        self.transcript.append_message(b"dom-sep", b"circuit_size");
        self.transcript.append_u64(b"n", n);
    }
}
