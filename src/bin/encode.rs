use anyhow::Context;
use printable_caesar::{encode, logger};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        log::error!("Usage: {} <plaintext> <offset>", args[0]);
        std::process::exit(1);
    }

    let plaintext = &args[1];
    let offset: i64 = args[2]
        .parse()
        .with_context(|| format!("invalid offset '{}'", args[2]))?;

    log::info!("[Encoded Text] {}", encode(plaintext, offset)?);

    Ok(())
}
