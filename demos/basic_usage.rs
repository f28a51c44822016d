//! Basic logger usage example
//!
//! Demonstrates the stdout/stderr fallback and the different log levels.
//!
//! Run with: cargo run --example basic_usage

use rust_channel_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Channel Logger - Basic Usage Example ===\n");

    // No handler registered: records go to stdout, or stderr from `error` up
    let mut logger = Logger::new("demo");

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.notice("This is a notice message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.critical("This is a critical message")?;
    logger.alert("This is an alert message")?;
    logger.emergency("This is an emergency message")?;

    println!("\n2. Logging with a different minimum level:");
    logger.set_level(Severity::Warning);
    println!("   Minimum level set to warning - debug, info and notice won't show:");
    logger.debug("Debug message (hidden)")?;
    logger.info("Info message (hidden)")?;
    logger.warning("Warning message (visible)")?;

    println!("\n3. Context and error details:");
    let context = Context::new()
        .with_field("user_id", 42)
        .with_field("endpoint", "/api/v1/orders");
    logger.log(Severity::Warning, "Slow request", Some(&context))?;

    let failure = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    let context = context.with_exception(ExceptionInfo::from_error(&failure).with_code(504));
    logger.log(Severity::Error, "Request failed", Some(&context))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
