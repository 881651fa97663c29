use super::*;

/// Square root.
mod sqrt;

/// Integer powers and scaling by powers of two.
mod pow;

/// Rounding to integers.
mod round;
