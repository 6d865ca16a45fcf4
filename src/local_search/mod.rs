//! Local search operators for improving a visiting order.
//!
//! - [`two_opt_improve`] — 2-opt segment reversal on an open path

mod two_opt;

pub use two_opt::{two_opt_improve, TwoOptClosure};
