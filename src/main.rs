// vcfront: VC scanner and recogniser

use clap::Parser as _;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vcfront::driver::{check_source, read_source, scan_source, CheckOptions};
use vcfront::error::Result;
use vcfront::ui::App;

#[derive(clap::Parser, Debug)]
#[command(name = "vcfront", about = "Scan and recognise a VC source file")]
struct Args {
    /// Input source file (.vc)
    input: PathBuf,

    /// Print the token stream instead of recognising
    #[arg(long)]
    tokens: bool,

    /// Trace tokens as the scanner returns them (log level debug)
    #[arg(long)]
    debug: bool,

    /// Browse tokens and diagnostics in a terminal UI
    #[arg(long)]
    explore: bool,
}

fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if debug {
        match "vcfront::scanner=debug".parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    } else {
        filter
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Log lines would tear through the alternate screen
    if !args.explore {
        init_logging(args.debug);
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the program was accepted.
fn run(args: &Args) -> Result<bool> {
    let name = args.input.display().to_string();
    let source = read_source(&args.input)?;
    let opts = CheckOptions {
        trace_tokens: args.debug,
    };

    if args.explore {
        return explore(&name, source, &opts);
    }

    if args.tokens {
        let scan = scan_source(&name, &source, &opts);
        for token in &scan.tokens {
            println!("{}", token);
        }
        for diag in &scan.diagnostics {
            eprintln!("{}", diag);
        }
        return Ok(scan.diagnostics.is_empty());
    }

    let report = check_source(&name, &source, &opts);
    for diag in &report.diagnostics {
        eprintln!("{}", diag);
    }

    if report.is_success() {
        println!("Compilation was successful.");
    } else {
        println!("Compilation was unsuccessful.");
    }
    Ok(report.is_success())
}

fn explore(name: &str, source: String, opts: &CheckOptions) -> Result<bool> {
    let scan = scan_source(name, &source, opts);
    let check = check_source(name, &source, opts);
    let accepted = check.is_success();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, scan, check);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(accepted)
}
