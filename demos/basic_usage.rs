//! Basic channel logger usage example
//!
//! Demonstrates initialization, the three channels, severity filtering,
//! scope tracing and shutdown.
//!
//! Run with: cargo run --example basic_usage

use channel_logger_system::prelude::*;
use channel_logger_system::{debug, error, event, info, trace_scope};
use std::fs;

fn main() -> Result<()> {
    println!("=== Channel Logger System - Basic Usage Example ===\n");

    let dir = std::env::temp_dir().join("channel_logger_demo");
    fs::create_dir_all(&dir).map_err(|e| LoggerError::init("demo directory", e.to_string()))?;
    let path_for = |name: &str| dir.join(name).display().to_string();

    // Initialize the logger and start the writer tasks
    let logger = Logger::new();
    let paths = logger.init(
        &path_for("apl.log"),
        &path_for("debug.log"),
        &path_for("event.log"),
    )?;
    println!("1. Writing to:");
    println!("   application: {}", paths.application.display());
    println!("   debug:       {}", paths.debug.display());
    println!("   event:       {}\n", paths.event.display());

    logger.enable_file_logging(true);
    logger.enable_console_logging(true);

    // Application channel with the threshold lowered to INFO
    logger.set_severity_level(Severity::Info);
    println!("2. Application records at each level:");
    logger.info_with_code(CODE_APP_START, "demo starting");
    logger.info("This is an info record");
    logger.warn("This is a warning record");
    logger.error("This is an error record");
    logger.crit("This is a critical record");

    println!("\n3. Coded records through the macros:");
    info!(logger, "processing {} items", 100);
    error!(logger, code = 503, "backend {} unavailable", "auth");

    println!("\n4. Debug and event channels ignore the threshold:");
    debug!(logger, "cache warmed with {} entries", 1024);
    event!(logger, "user {} logged in", "alice");

    println!("\n5. Scope tracing on the debug channel:");
    {
        let _trace = trace_scope!(logger, "Demo::work");
        debug!(logger, "inside the traced scope");
    }

    println!("\n6. Raising the threshold hides lower severities:");
    logger.set_severity_level(Severity::Error);
    logger.info("Info record (hidden)");
    logger.warn("Warning record (hidden)");
    logger.error("Error record (visible)");

    // Direct passthrough, works before init and after shutdown too
    Logger::syslog_info("demo reporting through the system log");

    logger.set_severity_level(Severity::Info);
    logger.info_with_code(CODE_APP_STOP, "demo stopping");
    logger.drop_all()?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
