// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A collection of all possible errors encountered in the prover.

/// Defines all possible errors that can be encountered in the prover core.
///
/// Every variant here is either a proving-invariant violation (malformed
/// witness or implementation bug) or a size/degree mismatch caught before
/// such an invariant would otherwise be violated silently. None of them
/// carry witness values.
#[derive(Debug)]
pub enum Error {
    /// The requested evaluation domain does not fit inside the field's
    /// two-adicity.
    InvalidEvalDomainSize {
        /// Log size of the requested domain.
        log_size_of_group: u32,
        /// The field's two-adicity.
        adicity: u32,
    },

    /// Two polynomials (or a polynomial and a scalar promoted to one) were
    /// combined with mismatched basis, domain size, or coset offset.
    BasisMismatch,

    /// A polynomial operation valid only in a specific basis (e.g.
    /// `evaluate_at`, `shift` in `LAGRANGE`) was attempted outside of it.
    WrongBasis,

    /// Pointwise polynomial division encountered a zero denominator: a
    /// vanishingly improbable challenge collision, or a bug.
    ArithmeticError,

    /// Round 1's gate-constraint sanity check failed: the witness does
    /// not satisfy the circuit.
    GateConstraintUnsatisfied,

    /// Round 2's grand-product accumulator did not close to `1`: the
    /// witness violates a copy constraint.
    PermutationClosureFailed,

    /// The quotient polynomial computed in Round 3 is not divisible by
    /// the vanishing polynomial (top coefficients are non-zero).
    QuotientNotDivisible,

    /// The linearization polynomial built in Round 5 does not vanish at
    /// `ζ`.
    LinearizationNonZero,

    /// An opening witness polynomial (`W_z` or `W_zω`) has degree `>= n`
    /// after conversion back to monomial form.
    OpeningDegreeTooLarge,

    /// The gate/permutation/wire vectors accumulated by the circuit
    /// builder do not all have the same length.
    MismatchedPolyLen,

    /// A variable referenced by a gate was never registered with the
    /// circuit builder.
    UnknownVariable,

    /// The requested polynomial commitment key is too small for the
    /// polynomial's degree.
    PolynomialDegreeTooLarge,

    /// A KZG opening failed the verifier's pairing check: either the
    /// proof is malformed or it was built against a different circuit,
    /// witness, or setup.
    OpeningCheckFailed,

    /// Wraps an error surfaced by `ark-poly-commit`'s KZG10 scheme.
    PCError {
        /// The underlying error.
        error: ark_poly_commit::error::Error,
    },
}

impl From<ark_poly_commit::error::Error> for Error {
    fn from(error: ark_poly_commit::error::Error) -> Self {
        Self::PCError { error }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidEvalDomainSize {
                log_size_of_group,
                adicity,
            } => write!(
                f,
                "log-size of the evaluation domain group > two-adicity: \
                 {:?} > {:?}",
                log_size_of_group, adicity
            ),
            Self::BasisMismatch => {
                write!(f, "operands do not share the same basis/size")
            }
            Self::WrongBasis => {
                write!(f, "operation is not supported in this basis")
            }
            Self::ArithmeticError => {
                write!(f, "division by zero in pointwise polynomial division")
            }
            Self::GateConstraintUnsatisfied => {
                write!(f, "witness does not satisfy the circuit's gate constraints")
            }
            Self::PermutationClosureFailed => {
                write!(f, "permutation grand product did not close to one")
            }
            Self::QuotientNotDivisible => {
                write!(f, "quotient polynomial is not divisible by the vanishing polynomial")
            }
            Self::LinearizationNonZero => {
                write!(f, "linearization polynomial does not vanish at the evaluation challenge")
            }
            Self::OpeningDegreeTooLarge => {
                write!(f, "opening witness polynomial has degree >= n")
            }
            Self::MismatchedPolyLen => {
                write!(f, "circuit vectors do not all share the same length")
            }
            Self::UnknownVariable => {
                write!(f, "gate references a variable that was never registered")
            }
            Self::PolynomialDegreeTooLarge => {
                write!(f, "polynomial degree exceeds the commitment key size")
            }
            Self::OpeningCheckFailed => {
                write!(f, "KZG opening failed the verifier's pairing check")
            }
            Self::PCError { error } => write!(f, "{:?}", error),
        }
    }
}

impl std::error::Error for Error {}
