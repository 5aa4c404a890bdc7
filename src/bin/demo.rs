use anyhow::Context;
use printable_caesar::{CaesarCodec, logger};

const SAMPLE_TEXT: &str = "Hello, world!";
const SAMPLE_OFFSET: i64 = 42;

fn main() -> anyhow::Result<()> {
    logger::setup_logger();
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: {} [text] [offset]", args[0]);
        std::process::exit(1);
    }

    let text = args.get(1).map_or(SAMPLE_TEXT, String::as_str);
    let offset: i64 = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid offset '{raw}'"))?,
        None => SAMPLE_OFFSET,
    };

    let codec = CaesarCodec::new(offset);
    let encoded = codec.encode(text)?;
    let decoded = codec.decode(&encoded)?;

    println!("{text}");
    println!("{encoded}");
    println!("{decoded}");

    Ok(())
}
