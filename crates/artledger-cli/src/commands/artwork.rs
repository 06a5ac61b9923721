// crates/artledger-cli/src/commands/artwork.rs
//
// `artledger artwork {register, show, count}`: artwork records.

use clap::Subcommand;

use artledger_core::NewArtwork;

use super::Context;
use crate::output::{format_json, render, OutputFormat};

/// Artwork subcommands.
#[derive(Debug, Subcommand)]
pub enum ArtworkCmd {
    /// Register an artwork attributed to the caller (verified artists only).
    Register {
        #[arg(long)]
        title: String,
        /// Year of creation; negative for BCE.
        #[arg(long, allow_hyphen_values = true)]
        creation_date: i64,
        #[arg(long)]
        medium: String,
        #[arg(long)]
        dimensions: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Show an artwork by ID.
    Show {
        id: u64,
    },
    /// Number of registered artworks.
    Count,
}

/// Run the artwork subcommand.
pub fn run(cmd: &ArtworkCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = ctx.open_registry()?;

    match cmd {
        ArtworkCmd::Register {
            title,
            creation_date,
            medium,
            dimensions,
            description,
        } => {
            let caller = ctx.caller()?;
            let id = registry.register_artwork(
                &caller,
                NewArtwork {
                    title: title.clone(),
                    creation_date: *creation_date,
                    medium: medium.clone(),
                    dimensions: dimensions.clone(),
                    description: description.clone(),
                },
            )?;
            match ctx.format {
                OutputFormat::Json => println!("{}", format_json(&serde_json::json!({ "id": id }))),
                OutputFormat::Table => println!("Artwork registered with ID {}", id),
            }
        }
        ArtworkCmd::Show { id } => {
            let record = registry.get_artwork(*id)?;
            println!("{}", render(record.as_ref(), ctx.format));
        }
        ArtworkCmd::Count => {
            let count = registry.get_artwork_count()?;
            match ctx.format {
                OutputFormat::Json => {
                    println!("{}", format_json(&serde_json::json!({ "count": count })))
                }
                OutputFormat::Table => println!("{}", count),
            }
        }
    }

    Ok(())
}
