//! Compact Z-order encoded multidimensional address keys.
//!
//! The core type [`Addr`] packs up to 12 coordinates (20 bits each) into a
//! single 32-byte value using Z-order (Morton) interleaving. Because `Addr`
//! is a plain `[u64; 4]` under the hood it is `Copy`, bitwise-comparable,
//! and usable directly as a map key without hashing or string conversion:
//!
//! ```
//! use std::collections::HashMap;
//! use zlattice::Addr;
//!
//! let mut cells: HashMap<Addr, f64> = HashMap::new();
//! cells.insert(Addr::new(&[1, 2, 3])?, 42.0);
//! # Ok::<(), zlattice::AddrError>(())
//! ```
//!
//! Encoding, decoding, accessors and predicates are all allocation-free;
//! only the transformers ([`Addr::append`], [`Addr::slice`], [`Addr::with`])
//! materialise an intermediate coordinate buffer, and that buffer lives on
//! the stack for every address that can actually be re-encoded.

pub mod addr;
pub mod error;
pub mod range;

pub use addr::*;
pub use error::*;
pub use range::*;
