// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! End-to-end scenarios driving the public API: build a tiny circuit,
//! prove it, and check the proof with the test-support verifier.

use ark_bls12_381::{Bls12_381, Fr};
use ark_ff::{One, Zero};
use ark_std::test_rng;
use plonk_prover_core::circuit::{Gate, Program, Witness};
use plonk_prover_core::commitment::Setup;
use plonk_prover_core::error::Error;
use plonk_prover_core::prover::Prover;
use plonk_prover_core::verify::{verify, PreprocessedCommitments};

const SRS_DEGREE: usize = 64;

fn witness_of(pairs: &[(&str, i64)]) -> Witness {
    let mut witness = Witness::new();
    for (name, value) in pairs {
        witness.insert(Some(name.to_string()), *value);
    }
    witness
}

/// Scenario 1: a single `a * b = c` gate, satisfying witness, no public
/// inputs. Expect `prove` to succeed and the proof to be accepted.
#[test]
fn identity_circuit_proves_and_verifies() {
    let mut rng = test_rng();
    let mut program = Program::<Fr>::new();
    program.add_gate(Program::mul_gate("a", "b", "c"));
    let witness = witness_of(&[("a", 3), ("b", 4), ("c", 12)]);

    let setup = Setup::<Bls12_381>::setup(SRS_DEGREE, &mut rng).unwrap();
    let prover = Prover::new(&setup, &program).unwrap();
    let proof = prover.prove(&program, &witness).unwrap();

    let pk = program.common_preprocessed_input().unwrap();
    let preprocessed = PreprocessedCommitments::build(&setup, &pk).unwrap();
    let public_inputs = program.public_input_values(&witness);

    verify(
        setup.verifier_key(),
        &pk,
        &preprocessed,
        &proof,
        &public_inputs,
        b"identity-circuit",
    )
    .expect("proof must be accepted");
}

/// Scenario 2: a gate constraining a single wire to a public input.
/// `PI.values()[0]` must carry the negated public value, and the proof
/// must still be accepted.
#[test]
fn public_input_equality_proves_and_verifies() {
    let mut rng = test_rng();
    let mut program = Program::<Fr>::new();
    program.add_gate(Gate {
        q_l: Fr::one(),
        q_r: Fr::zero(),
        q_m: Fr::zero(),
        q_o: Fr::zero(),
        q_c: Fr::zero(),
        l: Some("x".to_string()),
        r: None,
        o: None,
    });
    program.add_public_input("x");
    let witness = witness_of(&[("x", 7)]);

    let pk = program.common_preprocessed_input().unwrap();
    let pi = program.public_input_polynomial(pk.group_order, &witness);
    assert_eq!(pi.values()[0], -Fr::from(7u64));
    assert!(pi.values()[1..].iter().all(|v| v.is_zero()));

    let setup = Setup::<Bls12_381>::setup(SRS_DEGREE, &mut rng).unwrap();
    let prover = Prover::new(&setup, &program).unwrap();
    let proof = prover.prove(&program, &witness).unwrap();

    let preprocessed = PreprocessedCommitments::build(&setup, &pk).unwrap();
    let public_inputs = program.public_input_values(&witness);
    assert_eq!(public_inputs, vec![Fr::from(7u64)]);

    verify(
        setup.verifier_key(),
        &pk,
        &preprocessed,
        &proof,
        &public_inputs,
        b"public-input-equality",
    )
    .expect("proof must be accepted");
}

/// Scenario 3: the same circuit as scenario 1 with a witness that does
/// not satisfy the gate. Round 1's sanity check must abort `prove`.
#[test]
fn unsatisfied_gate_aborts() {
    let mut rng = test_rng();
    let mut program = Program::<Fr>::new();
    program.add_gate(Program::mul_gate("a", "b", "c"));
    let witness = witness_of(&[("a", 3), ("b", 4), ("c", 11)]);

    let setup = Setup::<Bls12_381>::setup(SRS_DEGREE, &mut rng).unwrap();
    let prover = Prover::new(&setup, &program).unwrap();

    match prover.prove(&program, &witness) {
        Err(Error::GateConstraintUnsatisfied) => {}
        other => panic!("expected GateConstraintUnsatisfied, got {other:?}"),
    }
}

/// Scenario 5: `prove` run twice on the same circuit and witness yields
/// byte-identical proofs in all fifteen fields.
#[test]
fn determinism() {
    let mut rng = test_rng();
    let mut program = Program::<Fr>::new();
    program.add_gate(Program::mul_gate("a", "b", "c"));
    let witness = witness_of(&[("a", 3), ("b", 4), ("c", 12)]);

    let setup = Setup::<Bls12_381>::setup(SRS_DEGREE, &mut rng).unwrap();
    let prover = Prover::new(&setup, &program).unwrap();

    let proof_1 = prover.prove(&program, &witness).unwrap();
    let proof_2 = prover.prove(&program, &witness).unwrap();
    assert_eq!(proof_1, proof_2);
}

/// Scenario 6: swapping two selector polynomials (changing the circuit
/// while keeping the witness shape identical) must change the
/// transcript-derived challenge `ζ` and `a_eval`, confirming the
/// transcript binds to the circuit and not only to the witness.
#[test]
fn transcript_binds_to_circuit() {
    let mut rng = test_rng();
    let setup = Setup::<Bls12_381>::setup(SRS_DEGREE, &mut rng).unwrap();

    // A second, filler gate pads the circuit to `n = 2` so the wire
    // polynomials are not forced constant (at `n = 1` every Lagrange
    // polynomial is a single point, and `a_eval` would trivially equal
    // that point regardless of the challenge `ζ`).
    let filler_gate = || Gate {
        q_l: Fr::one(),
        q_r: -Fr::one(),
        q_m: Fr::zero(),
        q_o: Fr::zero(),
        q_c: Fr::zero(),
        l: Some("p".to_string()),
        r: Some("p".to_string()),
        o: None,
    };

    let mut program_a = Program::<Fr>::new();
    program_a.add_gate(Gate {
        q_l: Fr::one(),
        q_r: -Fr::one(),
        q_m: Fr::zero(),
        q_o: Fr::zero(),
        q_c: Fr::zero(),
        l: Some("x".to_string()),
        r: Some("y".to_string()),
        o: None,
    });
    program_a.add_gate(filler_gate());

    let mut program_b = Program::<Fr>::new();
    program_b.add_gate(Gate {
        q_l: -Fr::one(),
        q_r: Fr::one(),
        q_m: Fr::zero(),
        q_o: Fr::zero(),
        q_c: Fr::zero(),
        l: Some("x".to_string()),
        r: Some("y".to_string()),
        o: None,
    });
    program_b.add_gate(filler_gate());

    // The witness is symmetric under the swap (x == y), so both circuits
    // are satisfied by the same witness.
    let witness = witness_of(&[("x", 5), ("y", 5)]);

    let prover_a = Prover::new(&setup, &program_a).unwrap();
    let prover_b = Prover::new(&setup, &program_b).unwrap();

    let proof_a = prover_a.prove(&program_a, &witness).unwrap();
    let proof_b = prover_b.prove(&program_b, &witness).unwrap();

    assert_ne!(proof_a.a_eval, proof_b.a_eval);
}
</content>
