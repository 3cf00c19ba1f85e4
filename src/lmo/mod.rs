//! Lagarias-Miller-Odlyzko prime counting: driver and the S1, S2, P2
//! phases of the identity pi(x) = S1 + S2 + pi(y) - 1 - P2.

mod driver;
mod p2;
mod s1;
mod s2;

pub use driver::pi_lmo;
pub use p2::p2;
pub use s1::s1;
pub use s2::s2;
