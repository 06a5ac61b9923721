// crates/artledger-cli/src/commands/artist.rs
//
// `artledger artist {register, verify, show}`: artist records.

use clap::Subcommand;

use super::{parse_principal, Context};
use crate::output::render;

/// Artist subcommands.
#[derive(Debug, Subcommand)]
pub enum ArtistCmd {
    /// Register the caller as an artist (unverified until the owner verifies).
    Register {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        biography: String,
    },
    /// Owner only: verify a registered artist.
    Verify {
        /// Hex principal of the artist.
        #[arg(value_parser = parse_principal)]
        artist: artledger_core::Principal,
    },
    /// Show an artist record.
    Show {
        /// Hex principal of the artist.
        #[arg(value_parser = parse_principal)]
        artist: artledger_core::Principal,
    },
}

/// Run the artist subcommand.
pub fn run(cmd: &ArtistCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = ctx.open_registry()?;

    match cmd {
        ArtistCmd::Register { name, biography } => {
            let caller = ctx.caller()?;
            registry.register_artist(&caller, name.as_str(), biography.as_str())?;
            println!("Artist registered: {}", caller);
            println!("  Awaiting verification by the registry owner.");
        }
        ArtistCmd::Verify { artist } => {
            let caller = ctx.caller()?;
            registry.verify_artist(&caller, artist)?;
            println!("Artist verified: {}", artist);
        }
        ArtistCmd::Show { artist } => {
            let record = registry.get_artist(artist)?;
            println!("{}", render(record.as_ref(), ctx.format));
        }
    }

    Ok(())
}
