// crates/artledger-cli/src/commands/authenticator.rs
//
// `artledger authenticator {register, verify, show}`: authenticator records.

use clap::Subcommand;

use super::{parse_principal, Context};
use crate::output::render;

/// Authenticator subcommands.
#[derive(Debug, Subcommand)]
pub enum AuthenticatorCmd {
    /// Register the caller as an authenticator (unverified until the owner verifies).
    Register {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        credentials: String,
    },
    /// Owner only: verify a registered authenticator.
    Verify {
        /// Hex principal of the authenticator.
        #[arg(value_parser = parse_principal)]
        authenticator: artledger_core::Principal,
    },
    /// Show an authenticator record.
    Show {
        /// Hex principal of the authenticator.
        #[arg(value_parser = parse_principal)]
        authenticator: artledger_core::Principal,
    },
}

/// Run the authenticator subcommand.
pub fn run(cmd: &AuthenticatorCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = ctx.open_registry()?;

    match cmd {
        AuthenticatorCmd::Register { name, credentials } => {
            let caller = ctx.caller()?;
            registry.register_authenticator(&caller, name.as_str(), credentials.as_str())?;
            println!("Authenticator registered: {}", caller);
            println!("  Awaiting verification by the registry owner.");
        }
        AuthenticatorCmd::Verify { authenticator } => {
            let caller = ctx.caller()?;
            registry.verify_authenticator(&caller, authenticator)?;
            println!("Authenticator verified: {}", authenticator);
        }
        AuthenticatorCmd::Show { authenticator } => {
            let record = registry.get_authenticator(authenticator)?;
            println!("{}", render(record.as_ref(), ctx.format));
        }
    }

    Ok(())
}
