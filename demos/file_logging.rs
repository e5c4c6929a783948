//! File logging example
//!
//! Demonstrates logging to both console and a logfmt file simultaneously.
//!
//! Run with: cargo run --example file_logging

use ligno::prelude::*;

fn main() -> Result<()> {
    println!("=== Ligno - File Logging Example ===\n");

    // The file is not opened until the first event arrives
    let file = FileHandler::new("application.log", LogfmtFormatter::new());
    let mut chain = CombiningHandler::default()
        .with_handler(ConsoleHandler::detect())
        .with_handler(file);

    println!("1. Logging to both console and file:");
    for (level, message) in [
        (LogLevel::Info, "Application started"),
        (LogLevel::Debug, "Loading configuration..."),
        (LogLevel::Warn, "Using default settings for some options"),
        (LogLevel::Error, "Failed to load optional plugin"),
    ] {
        chain.handle(&Event::new(level, message))?;
    }

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        let event = Event::new(LogLevel::Info, "Processing item")
            .with_pair("item", i)
            .with_pair("of", 5);
        chain.handle(&event)?;
    }

    close_handler(&mut chain);

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the logged messages.");

    Ok(())
}
