use bridgewatch_core::reconcile::Reconciler;
use bridgewatch_core::records::{RecordStore, StoreError};
use bridgewatch_core::settings::Settings;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<(), StoreError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    let store = RecordStore::new(settings.records_path.clone());

    log::info!("Starting bridgewatch refresh...");

    let records = store.load()?;
    log::info!("Loaded {} records from the store", records.len());

    let reconciler = Reconciler::new(settings);
    let records = reconciler.run(records).await;

    store.save(&records)?;
    log::info!("Wrote {} records", records.len());

    Ok(())
}
