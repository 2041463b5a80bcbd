//! cs-analysis: ampere-turn distribution balancing and the transient
//! asymmetry (peak) factor.
//!
//! Both are small, pure calculations the editing layer runs against the live
//! model: [`AmpTurns`] keeps the six per-terminal ampere-turn percentage
//! contributions and can force them to a balanced (zero-sum) state;
//! [`peak_factor`] evaluates the short-circuit current asymmetry factor K
//! from the X/R ratio.

pub mod ampturns;
pub mod peak_factor;

pub use ampturns::AmpTurns;
pub use peak_factor::{K_CEIL, K_FLOOR, direct_peak_factor, peak_factor};
