//! Converting a document with the default and custom options.
//!
//! Run with: cargo run --example convert

use conftoml::{convert, convert_with_options, KeyStyle, Options};
use std::error::Error;

const DOCUMENT: &str = "\
; web tier
def workers := 4
def ports := <<80, 443>>

{server = {workers = ?[workers], listen = ?[ports], tls = {enabled = 1}}, debug = 0}
";

fn main() -> Result<(), Box<dyn Error>> {
    println!("Default (dotted keys):");
    println!("{}\n", convert(DOCUMENT)?);

    println!("Relative keys:");
    let relative = Options::new().with_key_style(KeyStyle::Relative);
    println!("{}\n", convert_with_options(DOCUMENT, &relative)?);

    println!("Compact:");
    let compact = relative.with_section_spacing(false);
    println!("{}\n", convert_with_options(DOCUMENT, &compact)?);

    println!("Strict mode:");
    match convert_with_options("{a=1,a=2}", &Options::strict()) {
        Ok(toml) => println!("{}", toml),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
