use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Static information about a PVOutput system.
///
/// String fields are passed through as sent, so an unset value is an empty
/// string rather than `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub system_name: String,
    /// System size, in W.
    pub system_size: Option<u32>,
    pub zipcode: String,
    pub panels: Option<u32>,
    /// Power per panel, in W.
    pub panel_power: Option<u32>,
    pub panel_brand: String,
    pub inverters: Option<u32>,
    /// Inverter power, in W.
    pub inverter_power: Option<u32>,
    pub inverter_brand: String,
    /// Compass orientation of the array, e.g. `S` or `NW`.
    pub orientation: String,
    /// Tilt of the array, in degrees.
    pub array_tilt: Option<f64>,
    pub shade: String,
    pub install_date: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Minutes between status updates.
    pub status_interval: Option<u32>,
}
