use clap::Parser;
use sheet_fill::cli::commands::{cmd_export, cmd_fill, cmd_serve};
use sheet_fill::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Fill {
            page,
            data,
            repeat,
            output,
            trace,
        } => {
            cmd_fill(
                &page,
                &data,
                repeat,
                output.as_deref(),
                trace.as_deref(),
                cli.verbose,
                &config,
            )?;
        }
        Commands::Export {
            page,
            format,
            output,
        } => {
            cmd_export(
                &page,
                format.as_deref(),
                output.as_deref(),
                cli.verbose,
                &config,
            )?;
        }
        Commands::Serve { page, trace } => {
            cmd_serve(&page, trace.as_deref(), cli.verbose, &config)?;
        }
    }

    Ok(())
}
