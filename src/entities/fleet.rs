//! Fleet definition - ships, fuel tank feeds, engines and pumps
//!
//! The fleet is a fixed literal: two carriers, each with a forward and an
//! aft diesel-generator room fed by its own fuel tank. Forward engines
//! carry 16 fuel pumps, aft engines 12.

use clap::ValueEnum;
use serde::Serialize;

/// A diesel generator and its bank of fuel pumps
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Engine {
    /// Engine name (e.g. "DG1")
    pub name: &'static str,

    /// Number of fuel pumps on this engine
    pub pump_count: u32,
}

/// A fuel tank feed and the pair of engines it supplies
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TankFeed {
    /// Feed name (e.g. "FWD DG RU")
    pub name: &'static str,

    /// Engines running off this tank
    pub engines: [Engine; 2],
}

/// A ship and its tank feeds
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ship {
    /// Pennant-style ship name
    pub name: &'static str,

    /// Forward and aft tank feeds
    pub tanks: [TankFeed; 2],
}

impl Ship {
    /// Total number of fuel pumps across all engines
    pub fn pump_total(&self) -> u32 {
        self.tanks
            .iter()
            .flat_map(|t| t.engines.iter())
            .map(|e| e.pump_count)
            .sum()
    }

    /// Engine identifier scoped to this ship (e.g. "QNLZ_DG1")
    pub fn engine_id(&self, engine: &Engine) -> String {
        format!("{}_{}", self.name, engine.name)
    }
}

/// The built-in fleet every run generates data for
pub fn standard_fleet() -> Vec<Ship> {
    let forward = TankFeed {
        name: "FWD DG RU",
        engines: [
            Engine { name: "DG1", pump_count: 16 },
            Engine { name: "DG2", pump_count: 16 },
        ],
    };
    let aft = TankFeed {
        name: "AFT DG RU",
        engines: [
            Engine { name: "DG3", pump_count: 12 },
            Engine { name: "DG4", pump_count: 12 },
        ],
    };

    vec![
        Ship { name: "QNLZ", tanks: [forward, aft] },
        Ship { name: "PWLS", tanks: [forward, aft] },
    ]
}

/// Pump identifier style
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PumpNaming {
    /// Sequential: DG1_Pump_1 .. DG1_Pump_16
    #[default]
    Numeric,
    /// Split into two banks: DG1_A1 .. DG1_A8, DG1_B1 .. DG1_B8
    Banked,
}

/// Label for pump number `pump_num` (1-based) on the given engine
pub fn pump_label(engine: &Engine, pump_num: u32, naming: PumpNaming) -> String {
    match naming {
        PumpNaming::Numeric => format!("{}_Pump_{}", engine.name, pump_num),
        PumpNaming::Banked => {
            let half = engine.pump_count / 2;
            if pump_num <= half {
                format!("{}_A{}", engine.name, pump_num)
            } else {
                format!("{}_B{}", engine.name, pump_num - half)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fleet_shape() {
        let fleet = standard_fleet();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[0].name, "QNLZ");
        assert_eq!(fleet[1].name, "PWLS");
        for ship in &fleet {
            assert_eq!(ship.pump_total(), 56);
            assert_eq!(ship.tanks[0].name, "FWD DG RU");
            assert_eq!(ship.tanks[1].name, "AFT DG RU");
        }
    }

    #[test]
    fn test_engine_id() {
        let fleet = standard_fleet();
        let ship = &fleet[0];
        let engine = &ship.tanks[1].engines[0];
        assert_eq!(ship.engine_id(engine), "QNLZ_DG3");
    }

    #[test]
    fn test_numeric_pump_labels() {
        let engine = Engine { name: "DG1", pump_count: 16 };
        assert_eq!(pump_label(&engine, 1, PumpNaming::Numeric), "DG1_Pump_1");
        assert_eq!(pump_label(&engine, 16, PumpNaming::Numeric), "DG1_Pump_16");
    }

    #[test]
    fn test_banked_pump_labels() {
        let forward = Engine { name: "DG1", pump_count: 16 };
        assert_eq!(pump_label(&forward, 1, PumpNaming::Banked), "DG1_A1");
        assert_eq!(pump_label(&forward, 8, PumpNaming::Banked), "DG1_A8");
        assert_eq!(pump_label(&forward, 9, PumpNaming::Banked), "DG1_B1");
        assert_eq!(pump_label(&forward, 16, PumpNaming::Banked), "DG1_B8");

        let aft = Engine { name: "DG3", pump_count: 12 };
        assert_eq!(pump_label(&aft, 6, PumpNaming::Banked), "DG3_A6");
        assert_eq!(pump_label(&aft, 7, PumpNaming::Banked), "DG3_B1");
    }
}
