//! STARK Bridge CLI - Command-line access to the STARK curve primitives
//!
//! Every field element is given and printed in `0x`-prefixed big-endian hex.
//! Internally values travel through the same 32-byte wire contract as any
//! other caller of the bridge. Signatures are read and printed as the
//! usual `(r, s)`; the wire form carries `w = s^-1 mod n` instead of `s`.
//!
//! # Commands
//!
//! - `pedersen`, `pedersen-many`: Pedersen hash of two elements or a list
//! - `sign`, `verify`, `public-key`: ECDSA over the STARK curve
//! - `hades`: raw Poseidon permutation of three elements
//! - `poseidon`: Poseidon sponge hash of a list

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use stark_bridge_ops::{invert_mod_order, OperationBridge};
use stark_bridge_primitives::{FieldElement, PoseidonState, Signature, WireElement};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One value per line
    Text,
    /// A single JSON document
    Json,
}

/// STARK Bridge - Pedersen, ECDSA and Poseidon over the STARK curve
#[derive(Parser)]
#[command(name = "stark-bridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run STARK curve primitives over fixed-width field elements", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pedersen hash of two elements
    Pedersen {
        /// First element
        first: String,
        /// Second element
        second: String,
    },

    /// Pedersen hash of a list of elements (length-terminated chain)
    #[command(name = "pedersen-many")]
    PedersenMany {
        /// Elements to hash, in order
        elements: Vec<String>,
    },

    /// Sign a message hash
    Sign {
        /// Private key
        #[arg(short, long)]
        private_key: String,

        /// Message hash
        #[arg(short = 'm', long)]
        hash: String,

        /// Nonce; derived with RFC 6979 when omitted
        #[arg(short, long)]
        k: Option<String>,
    },

    /// Verify a signature
    Verify {
        /// Public key (x-coordinate)
        #[arg(short, long)]
        public_key: String,

        /// Message hash
        #[arg(short = 'm', long)]
        hash: String,

        /// Signature r
        #[arg(short, long)]
        r: String,

        /// Signature s
        #[arg(short, long)]
        s: String,
    },

    /// Derive the public key of a private key
    #[command(name = "public-key")]
    PublicKey {
        /// Private key
        private_key: String,
    },

    /// Apply the Hades permutation to three elements
    Hades {
        /// Exactly three state elements
        #[arg(num_args = 3, required = true)]
        state: Vec<String>,
    },

    /// Poseidon sponge hash of a list of elements
    Poseidon {
        /// Elements to hash, in order
        elements: Vec<String>,
    },
}

#[derive(Serialize)]
struct HashOutput {
    hash: FieldElement,
    elapsed_us: u128,
}

#[derive(Serialize)]
struct SignOutput {
    #[serde(flatten)]
    signature: Signature,
    s: FieldElement,
    /// 64-byte wire form, `r || w`
    wire_hex: String,
}

#[derive(Serialize)]
struct VerifyOutput {
    valid: bool,
}

#[derive(Serialize)]
struct PublicKeyOutput {
    public_key: FieldElement,
}

#[derive(Serialize)]
struct HadesOutput {
    state: Vec<FieldElement>,
    limbs: Vec<Vec<u64>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let bridge = OperationBridge::new();

    match cli.command {
        Commands::Pedersen { first, second } => {
            let first = parse_wire("first", &first)?;
            let second = parse_wire("second", &second)?;
            timed_hash(cli.format, || bridge.pedersen(&first, &second))
        }

        Commands::PedersenMany { elements } => {
            let elements = parse_all(&elements)?;
            timed_hash(cli.format, || bridge.pedersen_on_elements(&elements))
        }

        Commands::Sign { private_key, hash, k } => {
            sign(&bridge, cli.format, &private_key, &hash, k.as_deref())
        }

        Commands::Verify {
            public_key,
            hash,
            r,
            s,
        } => verify(&bridge, cli.format, &public_key, &hash, &r, &s),

        Commands::PublicKey { private_key } => {
            let private_key = parse_wire("private key", &private_key)?;
            let public_key = bridge
                .get_public_key(&private_key)
                .context("Failed to derive public key")?;
            let public_key = FieldElement::decode(&public_key);
            match cli.format {
                OutputFormat::Text => {
                    println!("{}", public_key);
                    Ok(())
                }
                OutputFormat::Json => emit(&PublicKeyOutput { public_key }),
            }
        }

        Commands::Hades { state } => hades(&bridge, cli.format, &state),

        Commands::Poseidon { elements } => {
            let elements = parse_all(&elements)?;
            timed_hash(cli.format, || bridge.poseidon_hash_many(&elements))
        }
    }
}

fn sign(
    bridge: &OperationBridge,
    format: OutputFormat,
    private_key: &str,
    hash: &str,
    k: Option<&str>,
) -> Result<()> {
    let private_key = parse_wire("private key", private_key)?;
    let hash = parse_wire("hash", hash)?;

    let wire = match k {
        Some(k) => {
            let k = parse_wire("k", k)?;
            bridge.sign(&private_key, &hash, &k)
        }
        None => bridge.sign_deterministic(&private_key, &hash, None),
    }
    .context("Failed to sign")?;

    let signature = Signature::decode(&wire);
    let s = invert_mod_order(&signature.w).context("Signature has no invertible w")?;
    match format {
        OutputFormat::Text => {
            println!("r: {}", signature.r);
            println!("s: {}", s);
            println!("w: {}", signature.w);
            Ok(())
        }
        OutputFormat::Json => emit(&SignOutput {
            signature,
            s,
            wire_hex: hex::encode(wire),
        }),
    }
}

fn verify(
    bridge: &OperationBridge,
    format: OutputFormat,
    public_key: &str,
    hash: &str,
    r: &str,
    s: &str,
) -> Result<()> {
    let public_key = parse_wire("public key", public_key)?;
    let hash = parse_wire("hash", hash)?;
    let r = parse_wire("r", r)?;
    let s = FieldElement::from_hex(s).with_context(|| format!("Invalid s: {}", s))?;

    // A zero s has no inverse and cannot verify
    let valid = match invert_mod_order(&s) {
        Some(w) => bridge.verify(&public_key, &hash, &r, &w.encode()),
        None => false,
    };
    match format {
        OutputFormat::Text => println!("{}", if valid { "VALID" } else { "INVALID" }),
        OutputFormat::Json => emit(&VerifyOutput { valid })?,
    }

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}

fn hades(bridge: &OperationBridge, format: OutputFormat, state: &[String]) -> Result<()> {
    let elements = state
        .iter()
        .map(|s| FieldElement::from_hex(s).with_context(|| format!("Invalid state element: {}", s)))
        .collect::<Result<Vec<_>>>()?;
    let grid: Vec<Vec<u64>> = elements.iter().map(|e| e.0.to_vec()).collect();

    let permuted = bridge.hades(&grid).context("Failed to permute state")?;
    let state = PoseidonState::from_grid(&permuted)
        .context("Permutation returned a malformed grid")?
        .elements()
        .to_vec();

    match format {
        OutputFormat::Text => {
            for elem in &state {
                println!("{}", elem);
            }
            Ok(())
        }
        OutputFormat::Json => emit(&HadesOutput {
            state,
            limbs: permuted,
        }),
    }
}

fn timed_hash<F>(format: OutputFormat, hash: F) -> Result<()>
where
    F: FnOnce() -> Result<WireElement, stark_bridge_ops::BridgeError>,
{
    let start = Instant::now();
    let wire = hash().context("Failed to hash")?;
    let elapsed = start.elapsed();

    let output = HashOutput {
        hash: FieldElement::decode(&wire),
        elapsed_us: elapsed.as_micros(),
    };
    match format {
        OutputFormat::Text => {
            eprintln!("Computed in {:?}", elapsed);
            println!("{}", output.hash);
            Ok(())
        }
        OutputFormat::Json => emit(&output),
    }
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_wire(name: &str, hex: &str) -> Result<WireElement> {
    let elem = FieldElement::from_hex(hex)
        .with_context(|| format!("Invalid {}: {}", name, hex))?;
    Ok(elem.encode())
}

fn parse_all(values: &[String]) -> Result<Vec<WireElement>> {
    values.iter().map(|v| parse_wire("element", v)).collect()
}
