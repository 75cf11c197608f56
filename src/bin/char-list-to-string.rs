use std::io::Write;
use std::process;

const USAGE: &str = "You MUST pass in a comma seperated list of ascii chars in decimal format";

fn run(src: &str) -> charcodes::Result<()> {
    let mut stdout = std::io::stdout().lock();
    charcodes::decode(src, &mut stdout)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<_> = std::env::args_os().skip(1).collect();
    if args.len() != 1 {
        log::debug!("expected 1 argument, got {}", args.len());
        println!("{}", USAGE);
        process::exit(1);
    }

    if let Err(e) = run(&args[0].to_string_lossy()) {
        eprintln!("Error: {}", e);
        process::exit(2);
    }
}
