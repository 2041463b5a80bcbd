//! Terminal connection kinds and their electrical factors.

use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// How a terminal is connected to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connection {
    SinglePhase1Leg,
    SinglePhase2Leg,
    Wye,
    Delta,
    AutoCommon,
    AutoSeries,
    Zig,
    Zag,
}

impl Connection {
    /// Divisor applied to the terminal VA to obtain per-leg VA.
    ///
    /// Single-phase windings split across one or two legs; every three-phase
    /// connection divides across three.
    pub fn phase_factor(self) -> f64 {
        match self {
            Connection::SinglePhase1Leg => 1.0,
            Connection::SinglePhase2Leg => 2.0,
            _ => 3.0,
        }
    }

    /// Line-to-winding voltage factor: √3 for wye and the auto family,
    /// 1 for everything else.
    pub fn conn_factor(self) -> f64 {
        match self {
            Connection::Wye | Connection::AutoCommon | Connection::AutoSeries => SQRT_3,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_factor_per_leg() {
        assert_eq!(Connection::SinglePhase1Leg.phase_factor(), 1.0);
        assert_eq!(Connection::SinglePhase2Leg.phase_factor(), 2.0);
        assert_eq!(Connection::Wye.phase_factor(), 3.0);
        assert_eq!(Connection::Delta.phase_factor(), 3.0);
        assert_eq!(Connection::Zig.phase_factor(), 3.0);
    }

    #[test]
    fn conn_factor_wye_family_only() {
        assert_eq!(Connection::Wye.conn_factor(), SQRT_3);
        assert_eq!(Connection::AutoCommon.conn_factor(), SQRT_3);
        assert_eq!(Connection::AutoSeries.conn_factor(), SQRT_3);
        assert_eq!(Connection::Delta.conn_factor(), 1.0);
        assert_eq!(Connection::Zag.conn_factor(), 1.0);
    }
}
