#![deny(rust_2018_idioms)]

use fleet_tracker::{settings::Settings, startup::App};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let settings = Settings::new().unwrap();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(tracing::Level::from(settings.log_level))
            .finish(),
    )
    .unwrap();

    let app = App::build(&settings).await.unwrap();

    app.run().await
}
