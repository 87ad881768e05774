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

    let pvoutput = PvOutput::new(api_key, system_id)?;

    match pvoutput.status().await {
        Ok(status) => {
            println!("--- Status of system {system_id} ---");
            println!("Reported at: {}", status.reported_datetime());
            println!(
                "Generation: {} W now, {} Wh today",
                status.power_generation.map_or("-".into(), |v| v.to_string()),
                status.energy_generation.map_or("-".into(), |v| v.to_string()),
            );
            println!(
                "Consumption: {} W now, {} Wh today",
                status.power_consumption.map_or("-".into(), |v| v.to_string()),
                status.energy_consumption.map_or("-".into(), |v| v.to_string()),
            );
        }
        Err(pvo::PvoError::NoData { .. }) => {
            println!("System {system_id} has not reported any status yet.");
        }
        Err(e) => {
            pvoutput.close().await;
            return Err(e.into());
        }
    }

    pvoutput.close().await;
    Ok(())
}
