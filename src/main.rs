use std::env;

use clap::Parser;

use letsmeet_client::cli::{self, Cli};
use letsmeet_client::clients::api_client::HttpEventsApi;
use letsmeet_client::config::AppConfig;
use letsmeet_client::logging;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    logging::init(args.verbose);

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let api = match HttpEventsApi::new(config.base_url()) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("Failed to build API client: {}", err);
            return;
        }
    };

    cli::run(args, &api).await;
}
