//! Skip Hire - Main entry point
//!
//! Runs the booking wizard in the terminal, or one of the catalog/settings
//! subcommands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use skiphire::app::App;
use skiphire::catalog::Catalog;
use skiphire::cli::{Cli, Commands};
use skiphire::error::SkipHireError;
use skiphire::logging::{self, LogTarget};
use skiphire::report;
use skiphire::settings::Settings;

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Validate and InitConfig operate on settings files themselves
    match cli.command {
        Some(Commands::Validate { ref config }) => {
            validate_settings(config);
            return Ok(());
        }
        Some(Commands::InitConfig { ref path }) => {
            Settings::default()
                .save_to_file(path)
                .map_err(|e| SkipHireError::config(format!("{:#}", e)))?;
            println!("✓ Wrote default settings to {}", path.display());
            return Ok(());
        }
        _ => {}
    }

    let settings = Settings::resolve(
        cli.config.as_deref(),
        cli.log_level.as_deref(),
        cli.log_file.as_deref(),
    )
    .map_err(|e| SkipHireError::config(format!("{:#}", e)))?;

    let target = logging::init_logging(&settings, cli.is_tui_mode())?;
    info!("Skip Hire starting up");
    debug!(?target, ?settings, "logging initialised");

    let catalog = Catalog::builtin();

    match cli.command {
        Some(Commands::Catalog { json }) => {
            let output = if json {
                report::catalog_json(&catalog)?
            } else {
                report::catalog_table(&catalog)
            };
            print!("{}", output);
            if json {
                println!();
            }
        }
        Some(Commands::Quote { skip_id }) => match report::quote(&catalog, skip_id) {
            Ok(summary) => print!("{}", summary),
            Err(e) => {
                error!(skip_id, "quote failed: {}", e);
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Wizard) | None => {
            info!("Launching booking wizard");
            run_wizard(catalog, &settings, &target)?;
        }
        Some(Commands::Validate { .. }) | Some(Commands::InitConfig { .. }) => {}
    }

    Ok(())
}

fn validate_settings(path: &Path) {
    match Settings::load_from_file(path) {
        Ok(settings) => match settings.validate() {
            Ok(()) => println!("✓ Settings file is valid: {}", path.display()),
            Err(e) => {
                eprintln!("✗ Settings validation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("✗ Failed to load settings file: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the interactive wizard
fn run_wizard(
    catalog: Catalog,
    settings: &Settings,
    target: &LogTarget,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| SkipHireError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(SkipHireError::terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        ))
        .into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| SkipHireError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::with_catalog(catalog, settings);
            app.run(&mut terminal)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );

    if let Err(ref e) = result {
        error!("Wizard exited with error: {}", e);
        if let LogTarget::File(path) = target {
            eprintln!("See {} for details", path.display());
        }
    }

    result.map_err(Into::into)
}
