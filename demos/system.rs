use pvo::PvOutput;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    pvo::init_tracing();

    let api_key = std::env::var("PVOUTPUT_API_KEY")
        .unwrap_or_else(|_| "API_KEY_FROM_PVOUTPUT_ORG".to_string());
    let system_id = std::env::var("PVOUTPUT_SYSTEM_ID")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60017);

    // Dropping the client at the end of main releases its session.
    let pvoutput = PvOutput::new(api_key, system_id)?;
    let system = pvoutput.system().await?;

    println!("--- {} ---", system.system_name);
    println!("Size: {} W", system.system_size.unwrap_or_default());
    println!(
        "Panels: {} x {} W {}",
        system.panels.unwrap_or_default(),
        system.panel_power.unwrap_or_default(),
        system.panel_brand
    );
    println!(
        "Inverters: {} x {} W {}",
        system.inverters.unwrap_or_default(),
        system.inverter_power.unwrap_or_default(),
        system.inverter_brand
    );
    if let Some(date) = system.install_date {
        println!("Installed: {date}");
    }
    Ok(())
}
