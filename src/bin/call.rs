use anyhow::Context;
use printable_caesar::{logger, service::Cipher};
use serde_json::Value;

fn main() -> anyhow::Result<()> {
    logger::setup_logger();
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <encode|decode> '<json args>'", args[0]);
        eprintln!("  e.g. {} encode '{{\"input\": \"Hello\", \"offset\": 42}}'", args[0]);
        std::process::exit(1);
    }

    let method = &args[1];
    let params: Value =
        serde_json::from_str(&args[2]).context("arguments must be a JSON document")?;

    let response = Cipher.call(method, &params);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
