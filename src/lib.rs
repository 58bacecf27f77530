// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Implementation of the PLONK proof system, restricted to its prover
//! core: building wire polynomials from a witness, running the
//! permutation grand-product argument, constructing the quotient
//! polynomial over a coset-extended Lagrange basis, and producing the
//! evaluation and KZG opening witnesses the five-round protocol hands
//! off to a verifier.
//!
//! The circuit front-end ([`circuit`]) and the test-only [`verify`]
//! module exist to exercise [`prover::Prover`] end-to-end; a production
//! deployment would replace both with a real compiler and a succinct
//! verifier that consumes commitments to the preprocessed polynomials
//! rather than their cleartext Lagrange values.
//!
//! ```no_run
//! use ark_bls12_381::Bls12_381;
//! use ark_std::test_rng;
//! use plonk_prover_core::circuit::{Program, Witness};
//! use plonk_prover_core::commitment::Setup;
//! use plonk_prover_core::prover::Prover;
//!
//! let mut rng = test_rng();
//! let mut program = Program::<ark_bls12_381::Fr>::new();
//! program.add_gate(Program::mul_gate("a", "b", "c"));
//!
//! let setup = Setup::<Bls12_381>::setup(8, &mut rng).unwrap();
//! let prover = Prover::new(&setup, &program).unwrap();
//!
//! let mut witness = Witness::new();
//! witness.insert(Some("a".to_string()), 3);
//! witness.insert(Some("b".to_string()), 4);
//! witness.insert(Some("c".to_string()), 12);
//!
//! let proof = prover.prove(&program, &witness).unwrap();
//! let _ = proof.a_1;
//! ```

#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts, private_in_public, variant_size_differences)]
#![deny(stable_features, unreachable_pub, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_mut)]
#![deny(unused_extern_crates, unused_must_use, unused_mut, unused_imports)]
#![deny(renamed_and_removed_lints, stable_features, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_parens)]
#![forbid(unsafe_code)]

/// Expands each listed test function into one `#[test]` per scalar field,
/// suffixing the generated test's name with `_<label>`. Lets a single
/// generic test body (`fn some_property<F: FftField>() { .. }`) run
/// against every curve's scalar field the crate is tested with.
#[macro_export]
macro_rules! batch_test {
    ([$($test_name:ident),* $(,)?] => ($field:ty, $label:ident)) => {
        paste::paste! {
            $(
                #[test]
                fn [<$test_name _ $label>]() {
                    $test_name::<$field>();
                }
            )*
        }
    };
}

pub mod circuit;
pub mod commitment;
pub mod error;
pub mod permutation;
pub mod polynomial;
pub mod proof;
pub mod prover;
pub mod transcript;
pub mod util;
pub mod verify;
</content>
