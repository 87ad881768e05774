use super::model::System;
use crate::core::{
    DecodeError,
    client::SYSTEM_ENDPOINT,
    wire::{Fields, primary_section},
};

/// Wire order of the first `;` section of `getsystem.jsp`.
pub(crate) const FIELDS: &[&str] = &[
    "system_name",
    "system_size",
    "zipcode",
    "panels",
    "panel_power",
    "panel_brand",
    "inverters",
    "inverter_power",
    "inverter_brand",
    "orientation",
    "array_tilt",
    "shade",
    "install_date",
    "latitude",
    "longitude",
    "status_interval",
];

pub(crate) fn decode(text: &str) -> Result<System, DecodeError> {
    let mut f = Fields::split(SYSTEM_ENDPOINT, FIELDS, primary_section(text))?;

    Ok(System {
        system_name: f.required_text()?,
        system_size: f.number()?,
        zipcode: f.text(),
        panels: f.number()?,
        panel_power: f.number()?,
        panel_brand: f.text(),
        inverters: f.number()?,
        inverter_power: f.number()?,
        inverter_brand: f.text(),
        orientation: f.text(),
        array_tilt: f.number()?,
        shade: f.text(),
        install_date: f.date()?,
        latitude: f.number()?,
        longitude: f.number()?,
        status_interval: f.number()?,
    })
}
