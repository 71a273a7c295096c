//! Logging setup for the binary.
//!
//! `EAGLE_LOG` holds the filter directives (default `info`).
//! `EAGLE_LOG_FORMAT=json` switches to structured JSON lines.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("EAGLE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so command output stays clean on stdout.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match std::env::var("EAGLE_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
