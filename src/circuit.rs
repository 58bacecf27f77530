// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A minimal circuit front-end: just enough to accumulate standard
//! arithmetic gates, the copy constraints between their wires, and the
//! public-input positions, and to compile that into the
//! [`CommonPreprocessedInput`] the prover core consumes.
//!
//! This is deliberately thin — custom gates (range, logic, elliptic
//! curve) are out of scope, matching the prover core's own Non-goals.
//! Its only job is to make the prover core exercisable end-to-end.

use crate::error::Error;
use crate::permutation::{build_sigma_polynomials, WireSlot};
use crate::polynomial::{Basis, Polynomial};
use crate::util::domain_of_size;
use ark_ff::FftField;
use hashbrown::HashMap;
use std::collections::BTreeMap;

/// A witness: maps a variable name to its (signed) value. A missing
/// entry is treated as `0` — in particular the sentinel `None` wire,
/// used by gates that leave one of `L, R, O` unconstrained, always reads
/// as the constant-zero wire.
pub type Witness = BTreeMap<Option<String>, i64>;

fn witness_lookup<F: FftField>(witness: &Witness, var: &Option<String>) -> F {
    let value = witness.get(var).copied().unwrap_or(0);
    signed_to_field(value)
}

fn signed_to_field<F: FftField>(value: i64) -> F {
    if value >= 0 {
        F::from(value as u64)
    } else {
        -F::from((-value) as u64)
    }
}

/// One standard arithmetic gate: `q_l·L + q_r·R + q_m·L·R + q_o·O + q_c = 0`.
#[derive(Clone, Debug)]
pub struct Gate<F> {
    pub q_l: F,
    pub q_r: F,
    pub q_m: F,
    pub q_o: F,
    pub q_c: F,
    pub l: Option<String>,
    pub r: Option<String>,
    pub o: Option<String>,
}

/// The common preprocessed input the prover and a verifier share:
/// selector and permutation polynomials plus the circuit's size.
#[derive(Clone)]
pub struct CommonPreprocessedInput<F: FftField> {
    pub group_order: usize,
    pub q_l: Polynomial<F>,
    pub q_r: Polynomial<F>,
    pub q_m: Polynomial<F>,
    pub q_o: Polynomial<F>,
    pub q_c: Polynomial<F>,
    pub s1: Polynomial<F>,
    pub s2: Polynomial<F>,
    pub s3: Polynomial<F>,
}

/// Accumulates gates and public-input positions, compiling them into a
/// [`CommonPreprocessedInput`] on demand.
#[derive(Clone, Default)]
pub struct Program<F> {
    gates: Vec<Gate<F>>,
    public_inputs: Vec<Option<String>>,
}

impl<F: FftField> Program<F> {
    /// An empty program.
    pub fn new() -> Self {
        Self {
            gates: Vec::new(),
            public_inputs: Vec::new(),
        }
    }

    /// Appends a standard arithmetic gate.
    pub fn add_gate(&mut self, gate: Gate<F>) -> &mut Self {
        self.gates.push(gate);
        self
    }

    /// Convenience constructor for a multiplication gate `l * r = o`.
    pub fn mul_gate(l: &str, r: &str, o: &str) -> Gate<F> {
        Gate {
            q_l: F::zero(),
            q_r: F::zero(),
            q_m: F::one(),
            q_o: -F::one(),
            q_c: F::zero(),
            l: Some(l.to_string()),
            r: Some(r.to_string()),
            o: Some(o.to_string()),
        }
    }

    /// Convenience constructor for an equality gate `l = r` (`l - r = 0`,
    /// with `o` left as the unconstrained sentinel wire).
    pub fn equality_gate(l: &str, r: &str) -> Gate<F> {
        Gate {
            q_l: F::one(),
            q_r: -F::one(),
            q_m: F::zero(),
            q_o: F::zero(),
            q_c: F::zero(),
            l: Some(l.to_string()),
            r: Some(r.to_string()),
            o: None,
        }
    }

    /// Marks `var` as a public input; its position in this list is
    /// `spec.md`'s "ordered public-input positions".
    pub fn add_public_input(&mut self, var: &str) -> &mut Self {
        self.public_inputs.push(Some(var.to_string()));
        self
    }

    /// The ordered `(L, R, O)` variable names of every gate, padded with
    /// all-sentinel rows up to the next power of two (matching
    /// [`Program::common_preprocessed_input`]'s padding).
    pub fn wires(&self) -> Vec<(Option<String>, Option<String>, Option<String>)> {
        let n = self.num_gates().max(1).next_power_of_two();
        let mut wires: Vec<_> = self
            .gates
            .iter()
            .map(|g| (g.l.clone(), g.r.clone(), g.o.clone()))
            .collect();
        wires.resize(n, (None, None, None));
        wires
    }

    /// The ordered public variable names.
    pub fn get_public_assignments(&self) -> &[Option<String>] {
        &self.public_inputs
    }

    /// Number of gates before padding to a power of two.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Compiles the accumulated gates into [`CommonPreprocessedInput`],
    /// padding the gate count up to the next power of two with
    /// all-zero selector gates wired to the sentinel variable.
    pub fn common_preprocessed_input(&self) -> Result<CommonPreprocessedInput<F>, Error> {
        let n = self.num_gates().max(1).next_power_of_two();
        domain_of_size::<F>(n)?;

        let mut q_l = vec![F::zero(); n];
        let mut q_r = vec![F::zero(); n];
        let mut q_m = vec![F::zero(); n];
        let mut q_o = vec![F::zero(); n];
        let mut q_c = vec![F::zero(); n];

        let mut slots: HashMap<String, Vec<WireSlot>> = HashMap::new();
        for (i, gate) in self.gates.iter().enumerate() {
            q_l[i] = gate.q_l;
            q_r[i] = gate.q_r;
            q_m[i] = gate.q_m;
            q_o[i] = gate.q_o;
            q_c[i] = gate.q_c;

            if let Some(name) = &gate.l {
                slots.entry(name.clone()).or_default().push(WireSlot::Left(i));
            }
            if let Some(name) = &gate.r {
                slots.entry(name.clone()).or_default().push(WireSlot::Right(i));
            }
            if let Some(name) = &gate.o {
                slots.entry(name.clone()).or_default().push(WireSlot::Output(i));
            }
        }

        let [s1, s2, s3] = build_sigma_polynomials::<F>(n, &slots)?;

        Ok(CommonPreprocessedInput {
            group_order: n,
            q_l: Polynomial::new(q_l, Basis::Lagrange),
            q_r: Polynomial::new(q_r, Basis::Lagrange),
            q_m: Polynomial::new(q_m, Basis::Lagrange),
            q_o: Polynomial::new(q_o, Basis::Lagrange),
            q_c: Polynomial::new(q_c, Basis::Lagrange),
            s1,
            s2,
            s3,
        })
    }

    /// Builds the public-input polynomial: `-witness[pub_var_i]` at
    /// public-input position `i`, zero elsewhere, in `Lagrange(n)`.
    pub fn public_input_polynomial(
        &self,
        group_order: usize,
        witness: &Witness,
    ) -> Polynomial<F> {
        let mut values = vec![F::zero(); group_order];
        for (i, var) in self.public_inputs.iter().enumerate() {
            values[i] = -witness_lookup::<F>(witness, var);
        }
        Polynomial::new(values, Basis::Lagrange)
    }

    /// The public input scalars themselves (not negated), in order —
    /// what a verifier is handed out of band.
    pub fn public_input_values(&self, witness: &Witness) -> Vec<F> {
        self.public_inputs
            .iter()
            .map(|var| witness_lookup::<F>(witness, var))
            .collect()
    }
}

/// Looks up `witness[var]`, defaulting missing entries (including the
/// sentinel `None` wire) to zero, per `spec.md`'s witness semantics.
pub fn lookup<F: FftField>(witness: &Witness, var: &Option<String>) -> F {
    witness_lookup(witness, var)
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_ff::Zero;

    #[test]
    fn missing_witness_entry_reads_zero() {
        let witness = Witness::new();
        assert_eq!(lookup::<Fr>(&witness, &Some("unset".to_string())), Fr::zero());
        assert_eq!(lookup::<Fr>(&witness, &None), Fr::zero());
    }

    #[test]
    fn signed_values_reduce_mod_p() {
        let mut witness = Witness::new();
        witness.insert(Some("neg".to_string()), -5);
        assert_eq!(lookup::<Fr>(&witness, &Some("neg".to_string())), -Fr::from(5u64));
    }

    #[test]
    fn wires_pad_to_next_power_of_two() {
        let mut program = Program::<Fr>::new();
        program.add_gate(Program::mul_gate("a", "b", "c"));
        program.add_gate(Program::mul_gate("d", "e", "f"));
        program.add_gate(Program::mul_gate("g", "h", "i"));
        let wires = program.wires();
        assert_eq!(wires.len(), 4);
        assert_eq!(wires[3], (None, None, None));
    }

    #[test]
    fn public_input_polynomial_negates_witness_value() {
        let mut program = Program::<Fr>::new();
        program.add_gate(Program::equality_gate("x", "x"));
        program.add_public_input("x");
        let mut witness = Witness::new();
        witness.insert(Some("x".to_string()), 9);

        let pi = program.public_input_polynomial(1, &witness);
        assert_eq!(pi.values()[0], -Fr::from(9u64));
    }
}
