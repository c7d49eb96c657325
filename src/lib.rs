//! # Corridor Tiling Library
//!
//! This library counts the domino tilings of a 2xN corridor modulo
//! 1,000,000,007. The count follows a linear recurrence, so it is evaluated by
//! raising a fixed transition matrix to a power with binary exponentiation,
//! which takes O(log n) matrix multiplications.
//!
//! ## Modules
//!
//! ### `math`
//! - `Matrix`: square matrix of arbitrary dimension with entries kept in
//!   `[0, MOD)`.
//! - `matrix_mult`: modular matrix product. Mismatched dimensions are a
//!   programming error and panic.
//! - `matrix_pow`: binary exponentiation; a zero exponent yields the identity.
//!
//! ### `tiling`
//! - `Recurrence`: a transition matrix paired with its base cases. Any linear
//!   recurrence can be evaluated with `Recurrence::nth`.
//! - `count_ways`: the tiling count for a corridor of length `n`.
//! - `seq_basic`: the first counts by plain iteration, useful as an oracle.
//!
//! ### `input`
//! - `parse_corridor_length` / `read_corridor_length`: turn user text into a
//!   corridor length, reporting negative or malformed values as `InputError`.
//!
//! ## Usage Example
//! ```rust
//! use corridor_tiling::tiling::count_ways;
//! assert_eq!(count_ways(50), 365_010_934);
//! ```

pub mod input;
pub mod math;
pub mod tiling;
