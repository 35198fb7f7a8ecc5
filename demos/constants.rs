//! Driving a session line by line and inspecting its constants.
//!
//! Run with: cargo run --example constants

use conftoml::{to_source, to_string, Options, Session};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let lines = [
        "def limit := 100",
        "def limits := {soft = ?[limit], hard = 200}",
        "def limit := 150 ; does not change limits",
        "{defaults = ?[limits], override = {soft = ?[limit]}}",
    ];

    let mut session = Session::new(Options::new());
    for (index, line) in lines.iter().enumerate() {
        session.feed_line(index + 1, line)?;
    }

    println!("Constants:");
    for (name, value) in session.constants().iter() {
        println!("  {} = {}", name, value);
    }

    let root = session.finish()?;
    println!("\nSource:\n{}", to_source(&root));
    println!("\nTOML:\n{}", to_string(&root));

    Ok(())
}
