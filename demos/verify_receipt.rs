use iap_verifier::{Verifier, VerifierConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let shared_secret = std::env::var("IAP_SHARED_SECRET").expect("IAP_SHARED_SECRET not set");
    let sandbox = std::env::var("IAP_SANDBOX").is_ok_and(|v| v == "1" || v == "true");

    let config = if sandbox {
        VerifierConfig::sandbox(shared_secret)
    } else {
        VerifierConfig::production(shared_secret)
    };
    let verifier = Verifier::from_config(config).expect("Failed to build verifier");

    tracing::info!("Verifying a bad receipt");
    match verifier.verify_receipt("blah", false).await {
        Ok(outcome) => tracing::info!(
            "Bad receipt: {}",
            serde_json::to_string_pretty(&outcome).expect("Outcome is serializable")
        ),
        Err(err) => tracing::error!("Error verifying bad receipt: {}", err),
    }

    // A base64 encoded receipt, as handed over by the app's payment observer.
    let Ok(receipt) = std::env::var("IAP_RECEIPT") else {
        tracing::info!("IAP_RECEIPT not set, skipping real receipt");
        return;
    };

    match verifier.verify_receipt(&receipt, true).await {
        Ok(outcome) => {
            let json = serde_json::to_string_pretty(&outcome).expect("Outcome is serializable");
            if outcome.is_valid {
                tracing::info!("Receipt is valid: {}", json);
            } else {
                tracing::info!("Receipt not valid: {}", json);
            }
        }
        Err(err) => tracing::error!("Error: {}", err),
    }
}
