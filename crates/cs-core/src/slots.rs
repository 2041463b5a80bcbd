use core::fmt;

use crate::error::{CsError, CsResult};

/// Number of addressable terminal slots in a transformer.
pub const NUM_TERMINAL_SLOTS: usize = 6;

/// A fixed 1-based terminal slot number (1..=6).
///
/// The transformer always exposes exactly six slots; any slot may be empty.
/// `TermSlot` cannot hold an out-of-range value by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermSlot(u8);

impl TermSlot {
    /// Create from a 1-based slot number.
    pub fn new(number: u8) -> CsResult<Self> {
        if (1..=NUM_TERMINAL_SLOTS as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CsError::InvalidArg {
                what: "terminal slot number must be 1..=6",
            })
        }
    }

    /// The 1-based slot number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// 0-based index into the fixed slot array.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over all six slots in order.
    pub fn all() -> impl Iterator<Item = TermSlot> {
        (1..=NUM_TERMINAL_SLOTS as u8).map(TermSlot)
    }
}

impl fmt::Debug for TermSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermSlot({})", self.0)
    }
}

impl fmt::Display for TermSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
