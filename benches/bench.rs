use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use float_expansion::{qd, Accumulator, Cascade, Ereal};
use float_expansion::accumulate::{harmonic, sum_exact, sum_kahan, sum_naive, sum_neumaier, sum_pairwise};
use float_expansion::eft::{two_prod, two_prod_dekker, two_sum};
use float_expansion::expansion::{compress, linear_expansion_sum, renormalize, scale_expansion};

// Establish a baseline by comparing with a single fpu add and mul

fn baseline_fpu(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f64", |b| {
    b.iter(|| black_box(3.14_f64) + black_box(69.420));
  });
  c.bench_function("baseline_fpu_mul_f64", |b| {
    b.iter(|| black_box(3.14_f64) * black_box(69.420));
  });
}

// Error-free transformations

fn eft(c: &mut Criterion) {
  let mut g = c.benchmark_group("eft");
  g.throughput(Throughput::Elements(1));
  g.bench_function("two_sum", |b| b.iter(|| two_sum(black_box(3.14), black_box(1e-20))));
  g.bench_function("two_prod", |b| b.iter(|| two_prod(black_box(3.14), black_box(0.1))));
  g.bench_function("two_prod_dekker", |b| b.iter(|| two_prod_dekker(black_box(3.14), black_box(0.1))));
  g.finish();
}

// Expansion kernels, on expansions of various lengths

fn sample(len: usize) -> Vec<f64> {
  let mut x = 1. / 3.;
  let mut e = Vec::with_capacity(len);
  for _ in 0 .. len {
    e.push(x);
    x *= 1e-17;
  }
  e
}

fn expansion(c: &mut Criterion) {
  let mut g = c.benchmark_group("expansion");
  for len in [2, 4, 8, 16] {
    let (e, f) = (sample(len), sample(len).iter().map(|x| x * 0.7).collect::<Vec<_>>());
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("linear_expansion_sum", len), &len, |b, _| {
      b.iter(|| linear_expansion_sum(black_box(&e), black_box(&f)));
    });
    g.bench_with_input(BenchmarkId::new("scale_expansion", len), &len, |b, _| {
      b.iter(|| scale_expansion(black_box(&e), black_box(0.1)));
    });
    let mut shuffled = e.clone();
    shuffled.reverse();
    g.bench_with_input(BenchmarkId::new("renormalize", len), &len, |b, _| {
      b.iter(|| renormalize(black_box(&shuffled)));
    });
    g.bench_with_input(BenchmarkId::new("compress_4", len), &len, |b, _| {
      b.iter(|| compress::<4>(black_box(&e)));
    });
  }
  g.finish();
}

// Arithmetic of fixed-limb types

fn operands<const N: usize>() -> (Cascade<N>, Cascade<N>) {
  (Cascade::<N>::PI, Cascade::<N>::E / 7.)
}

macro_rules! bench_cascade {
  ($fn:ident, $name:literal, $n:literal) => {
    fn $fn(c: &mut Criterion) {
      let mut g = c.benchmark_group($name);
      let (x, y) = operands::<$n>();
      g.throughput(Throughput::Elements(1));
      g.bench_function("add", |b| b.iter(|| black_box(x).bench_add_kernel(black_box(y))));
      g.bench_function("mul", |b| b.iter(|| black_box(x).bench_mul_kernel(black_box(y))));
      g.bench_function("mul_f64", |b| b.iter(|| black_box(x).bench_mul_f64_kernel(black_box(0.1))));
      g.bench_function("div", |b| b.iter(|| black_box(x).bench_div_kernel(black_box(y))));
      g.bench_function("sqrt", |b| b.iter(|| black_box(x).bench_sqrt_kernel()));
      g.finish();
    }
  };
}

bench_cascade!{ops_dd, "ops_dd", 2}
bench_cascade!{ops_td, "ops_td", 3}
bench_cascade!{ops_qd, "ops_qd", 4}
bench_cascade!{ops_6, "ops_cascade_6", 6}

fn ops_ereal(c: &mut Criterion) {
  let mut g = c.benchmark_group("ops_ereal");
  let x = Ereal::<64>::from(qd::PI);
  let y = Ereal::<64>::from(qd::E) / 7.;
  g.throughput(Throughput::Elements(1));
  g.bench_function("add", |b| b.iter(|| black_box(&x) + black_box(&y)));
  g.bench_function("mul", |b| b.iter(|| black_box(&x) * black_box(&y)));
  g.bench_function("div", |b| b.iter(|| black_box(&x) / black_box(&y)));
  g.finish();
}

// Summation

fn summation(c: &mut Criterion) {
  let mut g = c.benchmark_group("summation");
  let n = 10_000;
  let xs: Vec<f64> = (1 ..= n).map(|k| 1. / f64::from(k)).collect();
  g.throughput(Throughput::Elements(n.into()));
  g.bench_function("naive", |b| b.iter(|| sum_naive(black_box(&xs))));
  g.bench_function("kahan", |b| b.iter(|| sum_kahan(black_box(&xs))));
  g.bench_function("neumaier", |b| b.iter(|| sum_neumaier(black_box(&xs))));
  g.bench_function("pairwise_64", |b| b.iter(|| sum_pairwise(black_box(&xs), 64)));
  g.bench_function("exact", |b| b.iter(|| sum_exact(black_box(&xs))));
  g.bench_function("accumulator_dot", |b| b.iter(|| {
    let mut acc = Accumulator::new();
    for &x in &xs {
      acc.add_product(black_box(x), x);
    }
    acc.round::<2>()
  }));
  g.bench_function("harmonic_dd", |b| b.iter(|| harmonic::<2>(black_box(n))));
  g.finish();
}

criterion_group!(baseline,
  baseline_fpu,
  eft,
);

criterion_group!(kernels,
  expansion,
);

criterion_group!(ops,
  ops_dd,
  ops_td,
  ops_qd,
  ops_6,
  ops_ereal,
);

criterion_group!(sums,
  summation,
);

criterion_main!(baseline, kernels, ops, sums);
