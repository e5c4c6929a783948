//! Handler chain example
//!
//! Demonstrates fan-out, filtering and in-memory capture, then inspects the
//! captured output through the capability accessors.
//!
//! Run with: cargo run --example handler_chain

use ligno::prelude::*;

fn main() -> Result<()> {
    println!("=== Ligno - Handler Chain Example ===\n");

    let errors_only = MemoryHandler::new(JsonFormatter::compact());
    let everything = MemoryHandler::new(LogfmtFormatter::new());

    let mut chain = CombiningHandler::default()
        .with_handler(FilterHandler::level(LogLevel::Error, errors_only.clone()))
        .with_handler(everything.clone())
        .with_handler(FilterHandler::new(
            |event: &Event| event.message.starts_with("audit"),
            ConsoleHandler::new(false),
        ));

    let db_error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db unreachable");
    let events = [
        Event::new(LogLevel::Info, "audit: user login").with_pair("user", "alice"),
        Event::new(LogLevel::Debug, "cache miss").with_pair("key", "profile:42"),
        Event::new(LogLevel::Error, "query failed").with_pair("err", Value::error(db_error)),
    ];
    for event in &events {
        chain.handle(event)?;
    }

    println!("\n1. Errors captured as JSON:");
    for line in errors_only.messages() {
        print!("   {}", line);
    }

    println!("\n2. Everything captured as logfmt:");
    let boxed: Box<dyn Handler> = Box::new(everything);
    if let Some(inspect) = boxed.as_inspectable() {
        for line in inspect.messages() {
            print!("   {}", line);
        }
    }

    close_handler(&mut chain);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
