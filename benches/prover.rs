// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

use ark_bls12_381::Bls12_381;
use ark_std::test_rng;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plonk_prover_core::circuit::{Program, Witness};
use plonk_prover_core::commitment::Setup;
use plonk_prover_core::prover::Prover;

/// A repeated chain of `n` multiplication gates, `out_i = out_{i-1} * x_i`,
/// so the benchmark exercises the full five-round pipeline (including a
/// non-trivial permutation argument) at a chosen circuit size.
fn chain_circuit(num_gates: usize) -> (Program<ark_bls12_381::Fr>, Witness) {
    let mut program = Program::new();
    let mut witness = Witness::new();
    witness.insert(Some("out_0".to_string()), 1);

    for i in 0..num_gates {
        let x = format!("x_{i}");
        let prev = format!("out_{i}");
        let next = format!("out_{}", i + 1);
        program.add_gate(Program::mul_gate(&prev, &x, &next));
        witness.insert(Some(x), 2);
        witness.insert(Some(next), 2i64.pow((i + 1) as u32));
    }

    (program, witness)
}

fn prove_benchmark(c: &mut Criterion) {
    let mut rng = test_rng();
    let mut group = c.benchmark_group("plonk_prove");

    for log_n in [4usize, 6, 8] {
        let num_gates = (1usize << log_n) - 1;
        let (program, witness) = chain_circuit(num_gates);
        let setup = Setup::<Bls12_381>::setup(1 << (log_n + 2), &mut rng).unwrap();
        let prover = Prover::new(&setup, &program).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(1 << log_n),
            &(program, witness),
            |b, (program, witness)| {
                b.iter(|| prover.prove(program, witness).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, prove_benchmark);
criterion_main!(benches);
</content>
