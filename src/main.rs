//! Kestrel - print ranked launcher entries for a query
//!
//! Usage: `kestrel [QUERY] [TYPE]` where TYPE is one of the filter labels
//! (All, System, Nix-Sys, Nix-Home, Flatpak, Games, Other).

use std::process::ExitCode;

use tracing::{error, info};

use kestrel::shared::logging;
use kestrel::{AppType, CompositionRoot, Config};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kestrel: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("kestrel: {e}");
    }

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    let app_type = match args.next().map(|label| label.parse::<AppType>()) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            eprintln!("kestrel: {e}");
            return ExitCode::FAILURE;
        }
        None => AppType::All,
    };

    match run(config, &query, app_type) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Launcher core failed");
            eprintln!("kestrel: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config, query: &str, app_type: AppType) -> Result<(), kestrel::domain::DomainError> {
    let page_size = config.application.items_per_page;
    let mut root = CompositionRoot::new(config)?;
    let catalog = &mut root.catalog;

    catalog.scan()?;
    let counts = catalog.app_type_counts();
    info!(?counts, "Scan complete");

    let results = catalog.filter(query, app_type);
    for entry in results.iter().take(page_size) {
        let kind = entry.app_type();
        if entry.comment.is_empty() {
            println!("{:<10} {}", kind.label(), entry.name);
        } else {
            println!("{:<10} {} - {}", kind.label(), entry.name, entry.comment);
        }
    }
    if results.len() > page_size {
        println!("... {} more", results.len() - page_size);
    }

    catalog.finish_maintenance();
    catalog.save_favorites()
}
