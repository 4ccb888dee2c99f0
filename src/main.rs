mod cli;
mod runtime;
mod view;

use anyhow::{Context, Result};
use clap::Parser;

use goto_marker::host::MemoryHost;

use cli::Cli;
use runtime::StartupOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    goto_marker::tracing::init();

    let mut host = if cli.no_document {
        MemoryHost::without_document()
    } else {
        let path = cli
            .file
            .clone()
            .context("FILE is required unless --no-document is given")?;
        MemoryHost::from_file(&path)?
    };

    for &line in &cli.markers {
        host.add_marker(line);
    }
    tracing::info!(
        "Opening picker with {} markers",
        host.marked_lines().len()
    );

    let options = StartupOptions {
        width: cli.width,
        height: cli.height,
        filter: cli.filter.clone(),
        theme: cli.theme.clone(),
    };

    let navigated = runtime::run(Box::new(host), options)?;

    if let Some(line) = navigated {
        if let Some(file) = &cli.file {
            println!("{}:{}", file.display(), line);
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
