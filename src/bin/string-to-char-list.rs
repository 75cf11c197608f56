use std::io::{self, Read, Write};
use std::process;

fn run() -> io::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let text = input.strip_suffix("\r\n")
                    .or_else(|| input.strip_suffix('\n'))
                    .unwrap_or(&input);
    log::debug!("encoding {} characters", text.chars().count());

    let mut stdout = io::stdout().lock();
    charcodes::encode(text, &mut stdout)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
