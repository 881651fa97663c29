//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{ArithmeticError, Cascade, Policy};

impl<
  const N: usize,
  P: Policy,
> Cascade<N, P> {
  pub fn bench_add_kernel(self, other: Self) -> (Self, Option<ArithmeticError>) {
    self.add_kernel(other)
  }

  pub fn bench_mul_kernel(self, other: Self) -> (Self, Option<ArithmeticError>) {
    self.mul_kernel(other)
  }

  pub fn bench_mul_f64_kernel(self, other: f64) -> (Self, Option<ArithmeticError>) {
    self.mul_f64_kernel(other)
  }

  pub fn bench_div_kernel(self, other: Self) -> (Self, Option<ArithmeticError>) {
    self.div_kernel(other)
  }

  pub fn bench_sqrt_kernel(self) -> (Self, Option<ArithmeticError>) {
    self.sqrt_kernel()
  }
}
