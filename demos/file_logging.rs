//! File logging example
//!
//! Demonstrates logging to a file with echo, plus a handler looked up by name.
//!
//! Run with: cargo run --example file_logging

use rust_channel_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Channel Logger - File Logging Example ===\n");

    let mut logger = Logger::new("app");

    // File output, echoed to stdout as well
    logger.add_handler(Box::new(FileHandler::new("application.log").with_echo(true)));

    // A second file chosen by name
    let mut registry = HandlerRegistry::with_defaults();
    registry.register_file("audit", "audit.log");
    logger.add_handler_named(&registry, "audit")?;

    println!("1. Logging to both files:");

    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.info("Configuration loaded successfully")?;
    logger.warning("Using default settings for some options")?;
    logger.error("Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        let context = Context::new().with_field("item", i).with_field("total", 5);
        logger.log(Severity::Info, "Processing item", Some(&context))?;
        if i == 3 {
            logger.notice("Item 3 took longer than expected")?;
        }
    }

    logger.info("All operations completed")?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'audit.log' for the full log output");

    Ok(())
}
