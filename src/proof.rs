// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The fifteen-field PLONK proof object. Deliberately flat — a verifier
//! never needs anything this crate computed except these fields, not
//! even the linearization polynomial's commitment (it is never formed;
//! see `src/prover.rs`'s round 5).

use ark_ec::PairingEngine;
use ark_poly_commit::kzg10::Commitment;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// A complete PLONK proof: three round-1 wire commitments, the round-2
/// permutation commitment, three round-3 quotient-chunk commitments, six
/// round-4 opening evaluations, and the two round-5 KZG witnesses.
#[derive(CanonicalSerialize, CanonicalDeserialize, Clone, Debug, PartialEq)]
pub struct Proof<E: PairingEngine> {
    pub a_1: Commitment<E>,
    pub b_1: Commitment<E>,
    pub c_1: Commitment<E>,

    pub z_1: Commitment<E>,

    pub t_lo_1: Commitment<E>,
    pub t_mid_1: Commitment<E>,
    pub t_hi_1: Commitment<E>,

    pub a_eval: E::Fr,
    pub b_eval: E::Fr,
    pub c_eval: E::Fr,
    pub s1_eval: E::Fr,
    pub s2_eval: E::Fr,
    pub z_shifted_eval: E::Fr,

    pub w_z_1: Commitment<E>,
    pub w_zw_1: Commitment<E>,
}
