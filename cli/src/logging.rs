// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, logging to stderr.
///
/// `-v` and `-vv` take precedence over `RUST_LOG`, which defaults to `warn`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::new(directive(verbose, std::env::var("RUST_LOG").ok()));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to install logger: {e}");
    }
}

fn directive(verbose: u8, rust_log: Option<String>) -> String {
    match verbose {
        0 => rust_log
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}
