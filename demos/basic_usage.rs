//! Basic usage example
//!
//! Demonstrates building events and writing them to the console with each
//! output format.
//!
//! Run with: cargo run --example basic_usage

use ligno::prelude::*;

fn main() -> Result<()> {
    println!("=== Ligno - Basic Usage Example ===\n");

    let ctx = Context::new()
        .with_field("service", "inventory")
        .with_field("version", "1.4.2")
        .to_pairs();

    // Terminal output, colored when stdout is a TTY
    println!("1. Console handler at every level:");
    let mut console = ConsoleHandler::detect();
    for level in LogLevel::ALL {
        let message = format!("This is a {} message", level.to_str().to_lowercase());
        let event = Event::new(level, message).with_context(ctx.clone());
        console.handle(&event)?;
    }

    println!("\n2. The same event in every output format:");
    let event = Event::new(LogLevel::Warn, "stock running low")
        .with_context(ctx.clone())
        .with_pair("sku", "A-1009")
        .with_pair("remaining", 3)
        .with_call_site(file!(), i64::from(line!()));

    for format in [
        OutputFormat::Simple,
        OutputFormat::Terminal,
        OutputFormat::Json,
        OutputFormat::JsonPretty,
        OutputFormat::Logfmt,
    ] {
        let formatter = FormatterConfig::default()
            .with_format(format)
            .with_colors(ColorMode::Never)
            .build(false);
        let mut handler = StreamHandler::stdout(formatter);
        print!("   {:?}: ", format);
        handler.handle(&event)?;
    }

    close_handler(&mut console);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
