//! Multi-precision integer arithmetic in base 2^32 / 2^64.
//!
//! Two companion number types share the same little-endian limb
//! representation and the same schoolbook arithmetic kernels:
//!
//! - [`Bignum`]: a growable limb vector with runtime signedness and width
//!   (width 0 grows as needed; a nonzero width wraps in two's complement).
//! - [`Wideint`]: a fixed limb array whose width and signedness are const
//!   generics, with aliases [`Uint64`] through [`Int256`].
//!
//! Every arithmetic operation is total: division by zero returns a zero
//! quotient and the dividend as remainder, overflow wraps, shift amounts
//! reduce modulo the width. Text conversion covers radices 10, 2 and 16;
//! parsing is the only fallible surface.

mod bignum;
mod bits;
mod limb;
mod radix;
mod wide;


pub use bignum::{Bignum, Signedness};
pub use radix::ParseError;
pub use wide::{Int48, Int64, Int128, Int256, Uint64, Uint128, Uint256, Wideint};
