//! crxid: derive and verify Chrome-style extension ids
//!
//! Commands:
//!   (none)   - verify the built-in key against its published id
//!   verify   - verify a key/expected-id pair (defaults: the built-in pair)
//!   derive   - print the id derived from a base64-encoded public key

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crxid_core::derive_id;

/// Base64 (DER) public key of the extension this tool was written to check.
const BUILTIN_KEY: &str = "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAhrVD7CDcpSScyKap8/eqO2LC7CbYucD8RmS/u/Iu1tKhDBvVmHnNtj/co6lGLPov/35Nx370HgSNWJcwAlk9qRTH9h+68QEGU3C4uO6os1YfkU/qoQuDgzyhrEFuawWN23M3I9A1u+hThDk59BnYaN4m/F8i1CX1PA66t45gf4RTKlQ/05msWj86vCTfiU3yB2VzfWslWO0RQr9OUTxyveCeGPoa2QuC14LbnOnmEJ1/XsqbZr2wsdQjGVD1vCxfzJWz+ScjVvu/TstKtzK9delfPSdS1FolFbI0y60a2P5iiWqqCOm7Dz1pEQEK5j4dycKH0FYp/s2ZRsQ1Pkvt1QIDAQAB";

/// Extension id published for [`BUILTIN_KEY`].
const BUILTIN_EXPECTED: &str = "donmkahapkohncialmknoofangooemjb";

#[derive(Parser, Debug)]
#[command(
    name = "crxid",
    version,
    about = "Derive and verify Chrome-style extension ids"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify that a key derives to an expected id
    Verify {
        /// Base64-encoded public key
        #[arg(long, env = "CRXID_KEY", default_value = BUILTIN_KEY)]
        key: String,
        /// Expected 32-character a-p identifier
        #[arg(long, env = "CRXID_EXPECTED", default_value = BUILTIN_EXPECTED)]
        expected: String,
    },
    /// Print the id derived from a base64-encoded public key
    Derive {
        /// Base64-encoded public key
        key: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => cmd_verify(BUILTIN_KEY, BUILTIN_EXPECTED),
        Some(Commands::Verify { key, expected }) => cmd_verify(&key, &expected),
        Some(Commands::Derive { key }) => cmd_derive(&key),
    }
}

/// Print the derived id next to the expected one and whether they match.
///
/// An undecodable key is rendered into the calculated slot so the report
/// still completes; the mismatch is visible in the last line.
fn cmd_verify(key: &str, expected: &str) -> Result<()> {
    debug!(expected, "verifying key");
    let calculated = match derive_id(key) {
        Ok(id) => id.to_string(),
        Err(e) => e.to_string(),
    };
    println!("Calculated ID: {calculated}");
    println!("Expected ID:   {expected}");
    println!(
        "Match:         {}",
        if calculated == expected { "True" } else { "False" }
    );
    Ok(())
}

fn cmd_derive(key: &str) -> Result<()> {
    let id = derive_id(key).context("deriving extension id")?;
    println!("{id}");
    Ok(())
}
