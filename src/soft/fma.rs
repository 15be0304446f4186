use super::*;
use super::add::{add_kernel, cancellation_sign};
use super::mul::mul_kernel;

/// `x × y + z`, with a single rounding according to `mode`.
pub fn fma<F: Float>(x: F, y: F, z: F, mode: RoundingMode) -> F {
  let product_sign = x.sign() ^ y.sign();
  match (classify(x), classify(y), classify(z)) {
    (Class::Nan, _, _) => x.quiet(),
    (_, Class::Nan, _) => y.quiet(),
    (_, _, Class::Nan) => z.quiet(),

    // An infinite product, or an infinite addend, dominates, unless they are ∞ - ∞ or the product
    // itself is ∞ × 0.
    (Class::Infinite { .. }, Class::Zero { .. }, _) | (Class::Zero { .. }, Class::Infinite { .. }, _) =>
      F::default_nan(),
    (Class::Infinite { .. }, _, Class::Infinite { sign }) | (_, Class::Infinite { .. }, Class::Infinite { sign })
      if sign != product_sign => F::default_nan(),
    (Class::Infinite { .. }, _, _) | (_, Class::Infinite { .. }, _) => F::infinity(product_sign),
    (_, _, Class::Infinite { .. }) => z,

    // A zero product is exact, so the sum is just `z` (with the usual rule for the sign of a sum
    // of zeros).
    (Class::Zero { .. }, _, Class::Zero { sign }) | (_, Class::Zero { .. }, Class::Zero { sign }) =>
      F::zero(if sign == product_sign { sign } else { cancellation_sign(mode) }),
    (Class::Zero { .. }, _, _) | (_, Class::Zero { .. }, _) => z,

    // If `z` is zero, round the product on its own.
    (Class::Regular(a), Class::Regular(b), Class::Zero { .. }) => mul_kernel(a, b).round(mode),

    // Otherwise, it's an exact product (at most 106 bits) plus an exact addend, exactly what
    // `add_kernel` can handle.
    (Class::Regular(a), Class::Regular(b), Class::Regular(c)) =>
      match add_kernel(mul_kernel(a, b), c.into()) {
        Some(sum) => sum.round(mode),
        None => F::zero(cancellation_sign(mode)),
      },
  }
}
