//! Flat CSV record types
//!
//! Field order and the serde renames define the exact column headers of
//! the generated files; the `csv` writer emits them verbatim.

use chrono::NaiveDate;
use serde::Serialize;

/// One row of the monthly fuel-analysis dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    #[serde(rename = "Ship")]
    pub ship: String,

    #[serde(rename = "Engine")]
    pub engine: String,

    #[serde(rename = "Engine ID")]
    pub engine_id: String,

    #[serde(rename = "Fuel Pump ID")]
    pub pump_id: String,

    /// Empty when the pump did not fail this month
    #[serde(rename = "Time Til Failure (hours)")]
    pub time_til_failure: Option<f64>,

    #[serde(rename = "Fuel Tank Feed")]
    pub fuel_tank: String,

    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Density (kg/m3)")]
    pub density: f64,

    #[serde(rename = "Water Reaction Vol Change (ml)")]
    pub water_reaction: f64,

    #[serde(rename = "Flash Point (celsius)")]
    pub flash_point: f64,

    #[serde(rename = "Filter Blocking Tendency")]
    pub filter_block: f64,

    #[serde(rename = "Cloud Point (celsius)")]
    pub cloud_point: f64,

    #[serde(rename = "Sulphur (%)")]
    pub sulphur: f64,

    #[serde(rename = "Colony Forming Units (CFU/ml)")]
    pub cfu: f64,

    #[serde(rename = "Water content (mg/kg)")]
    pub water_content: f64,
}

/// One row of the optional failure report: dataset failures keyed by
/// fuel tank and date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReportRow {
    #[serde(rename = "Fuel Tank Feed")]
    pub fuel_tank: String,

    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Ship")]
    pub ship: String,

    #[serde(rename = "Engine")]
    pub engine: String,

    #[serde(rename = "Fuel Pump ID")]
    pub pump_id: String,

    #[serde(rename = "Time Til Failure (hours)")]
    pub time_til_failure: f64,
}

/// One row of the renewal-simulation failure log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureLogRow {
    #[serde(rename = "Ship")]
    pub ship: String,

    #[serde(rename = "Engine")]
    pub engine: String,

    #[serde(rename = "Engine ID")]
    pub engine_id: String,

    #[serde(rename = "Fuel Pump ID")]
    pub pump_id: String,

    #[serde(rename = "Fuel Tank Feed")]
    pub fuel_tank: String,

    #[serde(rename = "Failure Date")]
    pub failure_date: NaiveDate,

    #[serde(rename = "Time Til Failure (hours)")]
    pub time_til_failure: f64,

    #[serde(rename = "Colony Forming Units (CFU/ml)")]
    pub cfu: f64,

    #[serde(rename = "Water content (mg/kg)")]
    pub water_content: f64,

    #[serde(rename = "Filter Blocking Tendency")]
    pub filter_block: f64,
}
