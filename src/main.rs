//! jfx-bundler - JavaFX runtime installer and application packager.
//!
//! This binary installs the JavaFX runtime into a local repository and
//! packages JavaFX applications into executable jars and native bundles.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match jfx_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
