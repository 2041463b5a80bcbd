//! Terminals: the electrical connection points of the transformer.

use serde::{Deserialize, Serialize};

use crate::connection::Connection;

/// Andersen number reserved for an unconnected/virtual terminal.
pub const ANDERSEN_VIRTUAL: u32 = 0;

/// An electrical connection point (e.g. an HV or LV winding group).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub name: String,
    /// Line voltage [V].
    pub voltage_v: f64,
    /// Rated power [VA].
    pub va: f64,
    pub connection: Connection,
    /// Current direction, +1 or -1.
    pub current_direction: i8,
    /// External (Andersen) numbering; 0 marks a virtual terminal.
    pub andersen_number: u32,
}

impl Terminal {
    /// VA carried by one core leg.
    pub fn leg_va(&self) -> f64 {
        self.va / self.connection.phase_factor()
    }

    /// Nominal ONAN current: per-leg VA over the winding voltage.
    pub fn nominal_onan_amps(&self) -> f64 {
        self.leg_va() / (self.voltage_v / self.connection.conn_factor())
    }

    /// Whether this terminal participates in the external numbering.
    pub fn is_virtual(&self) -> bool {
        self.andersen_number == ANDERSEN_VIRTUAL
    }
}
