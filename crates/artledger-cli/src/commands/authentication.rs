// crates/artledger-cli/src/commands/authentication.rs
//
// `artledger authenticate <id>` and `artledger authentication show <id>`.

use std::fs;

use clap::{Args, Subcommand, ValueEnum};

use artledger_core::crypto::{hash_bytes, parse_hash_hex};
use artledger_core::{Assessment, EvidenceHash};

use super::Context;
use crate::output::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verdict {
    Authentic,
    NotAuthentic,
}

/// Record an authenticity assessment (verified authenticators only).
#[derive(Debug, Args)]
pub struct AuthenticateCmd {
    /// Artwork ID being assessed.
    pub artwork_id: u64,

    #[arg(long, value_enum)]
    pub verdict: Verdict,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// File whose SHA-256 becomes the evidence hash.
    #[arg(long, conflicts_with = "evidence_hash", required_unless_present = "evidence_hash")]
    pub evidence_file: Option<String>,

    /// Precomputed evidence hash (64 hex chars).
    #[arg(long)]
    pub evidence_hash: Option<String>,
}

/// Authentication query subcommands.
#[derive(Debug, Subcommand)]
pub enum AuthenticationCmd {
    /// Show the assessment recorded for an artwork ID.
    Show {
        artwork_id: u64,
    },
}

impl AuthenticateCmd {
    fn evidence(&self) -> Result<EvidenceHash, Box<dyn std::error::Error>> {
        match (&self.evidence_file, &self.evidence_hash) {
            (Some(path), _) => Ok(hash_bytes(&fs::read(path)?)),
            (None, Some(digest)) => Ok(parse_hash_hex(digest)?),
            (None, None) => Err("Pass --evidence-file or --evidence-hash".into()),
        }
    }
}

/// Run `artledger authenticate`.
pub fn authenticate(cmd: &AuthenticateCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let evidence_hash = cmd.evidence()?;
    let mut registry = ctx.open_registry()?;
    let caller = ctx.caller()?;

    registry.authenticate_artwork(
        &caller,
        Assessment {
            artwork_id: cmd.artwork_id,
            is_authentic: cmd.verdict == Verdict::Authentic,
            notes: cmd.notes.clone(),
            evidence_hash,
        },
    )?;

    println!("Assessment recorded for artwork {}", cmd.artwork_id);
    println!("  Evidence hash: {}", hex::encode(evidence_hash));
    Ok(())
}

/// Run the authentication subcommand.
pub fn run(cmd: &AuthenticationCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ctx.open_registry()?;

    match cmd {
        AuthenticationCmd::Show { artwork_id } => {
            let record = registry.get_authentication(*artwork_id)?;
            println!("{}", render(record.as_ref(), ctx.format));
        }
    }

    Ok(())
}
