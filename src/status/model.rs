use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest status information and live output data of a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Date of the reading.
    pub reported_date: NaiveDate,
    /// Time of day of the reading.
    pub reported_time: NaiveTime,
    /// Energy consumed today, in Wh.
    pub energy_consumption: Option<i64>,
    /// Energy generated today, in Wh.
    pub energy_generation: Option<i64>,
    /// Generation normalised to system size, in kW/kW.
    pub normalized_output: Option<f64>,
    /// Current power consumption, in W.
    pub power_consumption: Option<i64>,
    /// Current power generation, in W.
    pub power_generation: Option<i64>,
    /// Temperature, in °C.
    pub temperature: Option<f64>,
    /// Voltage, in V.
    pub voltage: Option<f64>,
}

impl Status {
    /// The moment of the reading, taken as UTC.
    pub fn reported_datetime(&self) -> DateTime<Utc> {
        self.reported_date.and_time(self.reported_time).and_utc()
    }
}
