use std::process;
use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_COALESCE_MS: f64 = 20.0;

pub struct CliArgs {
    pub coalesce: Duration,
}

pub fn get_program_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
        .unwrap_or_else(|| "rawkeys".to_string())
        .to_lowercase()
}

pub fn print_help() {
    let prog = get_program_name();
    println!(
        r#"{prog} - show the raw bytes your terminal sends for each key press

Run it, then press keys: each key event is printed as hex bytes, a quoted
byte string, printable ASCII, and an annotation for recognizable control
sequences. Useful for debugging keybinding conflicts like Ctrl+M vs Enter.

USAGE:
    {prog} [OPTIONS]

OPTIONS:
    --coalesce-ms <ms>  Wait this many ms for additional bytes to group
                        into one event (default: 20)
    -h, --help          Show this help message
    -V, --version       Show version information

EXIT STATUS:
    0   normal exit (q or Ctrl+C pressed, or stdin closed)
    2   stdin is not an interactive terminal, or bad usage
"#,
        prog = prog
    );
}

pub fn print_version() {
    println!("{} {}", get_program_name(), VERSION);
}

/// Scan argv. Exits directly for help/version and usage errors, so the
/// caller only ever sees a valid configuration.
pub fn parse_args(args: &[String]) -> CliArgs {
    let mut coalesce_ms = DEFAULT_COALESCE_MS;
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                print_version();
                process::exit(0);
            }
            "--coalesce-ms" => {
                let Some(value) = args.get(i + 1) else {
                    usage_error("--coalesce-ms requires a value");
                };
                coalesce_ms = parse_ms(value);
                i += 2;
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--coalesce-ms=") {
                    coalesce_ms = parse_ms(value);
                    i += 1;
                } else {
                    usage_error(&format!("unrecognized argument '{}'", arg));
                }
            }
        }
    }
    CliArgs {
        coalesce: coalesce_window(coalesce_ms),
    }
}

fn parse_ms(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or_else(|_| {
        usage_error(&format!("--coalesce-ms: invalid value '{}'", value));
    })
}

fn usage_error(msg: &str) -> ! {
    eprintln!("{}: {} (try --help)", get_program_name(), msg);
    process::exit(2);
}

/// Millisecond flag value to idle window. Negative values clamp to zero;
/// zero means "drain what is already buffered, no extra wait".
pub fn coalesce_window(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}
