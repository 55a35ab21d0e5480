use log::{error, info};

use page_behavior::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page behaviors");
    if let Err(err) = page_behavior::run() {
        error!("page behaviors failed to start: {}", err);
    }
}
