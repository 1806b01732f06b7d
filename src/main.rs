use clap::Parser;
use std::error::Error;
use std::io::{self, IsTerminal};
use std::process;
use subzero::config::{Config, OutputFormat};
use subzero::logging::init_logging;
use subzero::session::Session;
use subzero::FormatError;

/// IPv4 subnet calculator
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Address with the new prefix, e.g. 192.168.1.50/26. Prompts when omitted.
    input: Option<String>,

    /// Output format [env: SUBZERO_FORMAT]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Maximum subnet rows to list [env: SUBZERO_MAX_ROWS]
    #[arg(short = 'n', long)]
    max_rows: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(max_rows) = args.max_rows {
        config.max_rows = max_rows;
    }
    if args.no_color || !io::stdout().is_terminal() {
        config.color = false;
        colored::control::set_override(false);
    }

    let session = Session::new(&config);
    match args.input {
        Some(input) => match session.render(&input) {
            Ok(text) => print!("{text}"),
            Err(e) => match e.downcast_ref::<FormatError>() {
                Some(format_err) => {
                    eprintln!("{}", session.error_message(format_err));
                    process::exit(1);
                }
                None => return Err(e),
            },
        },
        None => {
            let stdin = io::stdin();
            session.run_interactive(stdin.lock(), &mut io::stdout(), &mut io::stderr())?;
        }
    }
    Ok(())
}
