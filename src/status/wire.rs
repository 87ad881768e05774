use super::model::Status;
use crate::core::{DecodeError, client::STATUS_ENDPOINT, wire::Fields};

/// Wire order of `getstatus.jsp`.
pub(crate) const FIELDS: &[&str] = &[
    "reported_date",
    "reported_time",
    "energy_generation",
    "power_generation",
    "energy_consumption",
    "power_consumption",
    "normalized_output",
    "temperature",
    "voltage",
];

pub(crate) fn decode(text: &str) -> Result<Status, DecodeError> {
    let mut f = Fields::split(STATUS_ENDPOINT, FIELDS, text)?;

    let reported_date = f.required_date()?;
    let reported_time = f.time()?;
    let energy_generation = f.number()?;
    let power_generation = f.number()?;
    let energy_consumption = f.number()?;
    let power_consumption = f.number()?;
    let normalized_output = f.number()?;
    let temperature = f.number()?;
    let voltage = f.number()?;

    Ok(Status {
        reported_date,
        reported_time,
        energy_consumption,
        energy_generation,
        normalized_output,
        power_consumption,
        power_generation,
        temperature,
        voltage,
    })
}
