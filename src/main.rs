//! Clipsmith CLI - Offline Audio Sample Transforms
//!
//! Command-line front end for the Clipsmith transform engine.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use clipsmith::cli::{commands, Cli, Commands};
use clipsmith::engine::render::{FadeSpec, Range};
use clipsmith::engine::EditParams;

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    debug!("clipsmith v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Info { input } => commands::info(&input)
            .with_context(|| format!("failed to inspect {}", input.display()))?,

        Commands::Render {
            input,
            output,
            start,
            end,
            fade_in,
            fade_in_shape,
            fade_out,
            fade_out_shape,
            volume,
            pitch,
            filter,
            filter_amount,
            params,
        } => {
            let edit = match params {
                Some(path) => commands::load_params(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => EditParams {
                    range: Range::new(start, end)?,
                    fade_in: FadeSpec::new(fade_in, fade_in_shape.into()),
                    fade_out: FadeSpec::new(fade_out, fade_out_shape.into()),
                    volume,
                    pitch,
                    filter: clipsmith::dsp::FilterSpec::new(filter.into(), filter_amount),
                },
            };
            commands::render(&input, &output, &edit)
                .with_context(|| format!("failed to render {}", input.display()))?
        }

        Commands::Normalize { input, output } => commands::normalize(&input, &output)
            .with_context(|| format!("failed to normalize {}", input.display()))?,

        Commands::Reverse { input, output } => commands::reverse(&input, &output)
            .with_context(|| format!("failed to reverse {}", input.display()))?,

        Commands::Crush {
            input,
            output,
            bits,
        } => commands::crush(&input, &output, bits)
            .with_context(|| format!("failed to crush {}", input.display()))?,
    }

    Ok(())
}
