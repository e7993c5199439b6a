mod telemetry;

use prazo_engine::AlertScheduler;
use prazo_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("prazo".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let scheduler = AlertScheduler::new(context);
    scheduler.start();
    info!("Deadline alert scheduler started");

    tokio::signal::ctrl_c().await?;

    scheduler.stop();
    info!("Deadline alert scheduler stopped");
    Ok(())
}
