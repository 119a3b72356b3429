//! CLI module for meerkat
//!
//! Provides command-line interface for the alert bot.
//! All checks are triggered via the HTTP endpoints.

use clap::Parser;

/// Meerkat Bot - earthquake and site-watch alert server
#[derive(Parser, Debug)]
#[command(name = "meerkat")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    MEERKAT_HOST                 Bind address (default: 0.0.0.0)
    MEERKAT_PORT                 Listen port (default: 8080)
    MEERKAT_LOG_LEVEL            Log level (default: info)
    MEERKAT_FEED_URL             Earthquake history feed URL
    MEERKAT_DATA_DIR             Data directory (default: data)
    MEERKAT_WATCH_LIST           Watch targets, `name=url` pairs separated by `;`
    MEERKAT_TARGET_USER_ID       Notification recipient id
    MEERKAT_HEALTH_TIMEOUT_SECS  Health check timeout (default: 30)
    LINE_CHANNEL_ACCESS_TOKEN    LINE channel access token
"#)]
pub struct Cli;
