//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ___   __       _
   /   | / /______(_)_  ______ ___
  / /| |/ __/ ___/ / / / / __ `__ \
 / ___ / /_/ /  / / /_/ / / / / / /
/_/  |_\__/_/  /_/\__,_/_/ /_/ /_/

          User Directory
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(host: &str, port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}:{}/api/users", host, port);
    info!("Health:    http://{}:{}/health", host, port);
    info!("{}", separator);
}
