mod cli;
mod describe;
mod format;
mod input;
mod term;

use std::env;
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::process;

use chrono::Local;

use crate::cli::{get_program_name, parse_args, CliArgs};
use crate::format::format_event_line;
use crate::input::read_event;
use crate::term::RawModeGuard;

fn main() {
    let args: Vec<String> = env::args().collect();
    let opts = parse_args(&args);

    // Check before any mode change so there is nothing to restore on this path.
    if !term::stdin_is_tty() {
        eprintln!("stdin is not a TTY; run this in an interactive terminal.");
        process::exit(2);
    }

    println!("Reading from stdin in raw mode.");
    println!("Press keys to see the bytes your terminal sends.");
    println!("Exit: Ctrl+C (0x03) or 'q'.");
    println!();

    if let Err(err) = run(&opts) {
        // The raw-mode guard has already restored the terminal by the time
        // run() returns, so this lands on a usable stderr.
        eprintln!("{}: {}", get_program_name(), err);
        process::exit(1);
    }
}

fn run(opts: &CliArgs) -> io::Result<()> {
    let fd = io::stdin().as_raw_fd();
    let _guard = RawModeGuard::enter()?;

    let mut counter: u64 = 0;
    loop {
        let data = read_event(fd, opts.coalesce)?;
        if data.is_empty() {
            // stdin closed; nothing more will arrive
            break;
        }
        if matches!(data.as_slice(), b"q" | b"\x03") {
            break;
        }
        counter += 1;
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        // Raw mode disables output post-processing, so lines need explicit CRLF.
        print!("{}\r\n", format_event_line(counter, &timestamp, &data));
        io::stdout().flush()?;
    }

    Ok(())
}
