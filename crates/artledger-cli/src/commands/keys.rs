// crates/artledger-cli/src/commands/keys.rs
//
// `artledger keygen` and `artledger whoami`: caller key management.

use std::fs;
use std::path::Path;

use artledger_core::crypto::Keypair;
use artledger_core::Principal;

const SECRET_FILE: &str = "principal.secret";
const PUBLIC_FILE: &str = "principal.pub";

/// Generate a keypair and save it to `keys_dir`. Refuses to overwrite.
pub fn keygen(keys_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let secret_path = keys_dir.join(SECRET_FILE);
    if secret_path.exists() {
        return Err(format!("Key already exists at {}", secret_path.display()).into());
    }

    let keypair = Keypair::generate();
    fs::create_dir_all(keys_dir)?;
    fs::write(&secret_path, hex::encode(keypair.signing_key.to_bytes()))?;
    let pub_path = keys_dir.join(PUBLIC_FILE);
    fs::write(&pub_path, keypair.principal().to_hex())?;

    println!("Keypair created.");
    println!("  Principal: {}", keypair.principal());
    println!("  Saved to:  {}", pub_path.display());
    println!();
    println!("IMPORTANT: Back up your secret key file securely.");
    println!("  Secret key: {}", secret_path.display());

    Ok(())
}

/// Read the caller principal from `keys_dir`.
///
/// Uses the public key file; derives it from the secret key only when the
/// public file is missing.
pub fn load_principal(keys_dir: &Path) -> Result<Principal, Box<dyn std::error::Error>> {
    let pub_path = keys_dir.join(PUBLIC_FILE);
    if pub_path.exists() {
        return Ok(fs::read_to_string(&pub_path)?.trim().parse()?);
    }

    let secret_path = keys_dir.join(SECRET_FILE);
    if secret_path.exists() {
        let bytes = hex::decode(fs::read_to_string(&secret_path)?.trim())?;
        let secret: [u8; 32] = bytes
            .try_into()
            .map_err(|_| "Expected 64-character hex-encoded secret key")?;
        tracing::debug!(path = %secret_path.display(), "No public key file; deriving principal");
        return Ok(Keypair::from_secret_bytes(&secret).principal());
    }

    Err(format!(
        "No caller identity. Pass --as <principal> or run `artledger keygen` (looked in {}).",
        keys_dir.display()
    )
    .into())
}

pub fn whoami(caller: &Principal) {
    println!("{}", caller);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a temporary directory path using UUID to avoid conflicts.
    fn temp_keys_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("artledger_keys_{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn test_keygen_then_load() {
        let dir = temp_keys_dir();
        keygen(&dir).unwrap();

        let principal = load_principal(&dir).unwrap();
        let on_disk: Principal = fs::read_to_string(dir.join(PUBLIC_FILE))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(principal, on_disk);

        // Second keygen must not clobber the first.
        assert!(keygen(&dir).is_err());
        assert_eq!(load_principal(&dir).unwrap(), principal);
    }

    #[test]
    fn test_public_key_file_names_the_caller() {
        let dir = temp_keys_dir();
        keygen(&dir).unwrap();

        let other = Principal::derive("someone-else");
        fs::write(dir.join(PUBLIC_FILE), other.to_hex()).unwrap();
        assert_eq!(load_principal(&dir).unwrap(), other);

        // Without the public file the secret key still identifies the caller.
        fs::remove_file(dir.join(PUBLIC_FILE)).unwrap();
        assert_ne!(load_principal(&dir).unwrap(), other);
    }

    #[test]
    fn test_missing_keys_is_an_error() {
        assert!(load_principal(&temp_keys_dir()).is_err());
    }
}
