//! ECIES command-line tool
//!
//! Generates key pairs, encrypts and decrypts files, and converts PEM ECDSA
//! keys into the hex key files the other commands read.

mod io;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ecies_nist_pke::{
    decrypt, encrypt, import_ecdsa_private_pem, import_ecdsa_public_pem, CurveId, PrivateKey,
    PublicKey,
};
use rand::rngs::OsRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// ECIES over NIST curves: ECDH, SHA-2 KDF, AES-CTR and Poly1305
#[derive(Parser)]
#[command(name = "ecies")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Curve and matching hash/cipher suite
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// P-256 with SHA-256 and AES-128
    #[value(name = "P256")]
    P256,
    /// P-521 with SHA-512 and AES-256
    #[value(name = "P521")]
    P521,
}

impl From<Mode> for CurveId {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::P256 => CurveId::P256,
            Mode::P521 => CurveId::P521,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a private/public key pair
    Keygen {
        #[arg(long, value_enum, default_value = "P256")]
        mode: Mode,

        /// Output file for the hex private scalar
        #[arg(long, default_value = "key.pem")]
        private: PathBuf,

        /// Output file for the hex uncompressed public point
        #[arg(long, default_value = "key.pub")]
        public: PathBuf,
    },

    /// Encrypt a file to a public key
    Encrypt {
        #[arg(long, value_enum, default_value = "P256")]
        mode: Mode,

        /// Recipient public key (hex)
        #[arg(long, default_value = "key.pub")]
        public: PathBuf,

        #[arg(short, long, default_value = "file.txt")]
        input: PathBuf,

        #[arg(short, long, default_value = "out.out")]
        output: PathBuf,

        /// Write the envelope as hex
        #[arg(long)]
        hex: bool,

        /// Key derivation context (hex)
        #[arg(long)]
        shared_info: Option<String>,

        /// Authenticated associated data (hex)
        #[arg(long)]
        associated_data: Option<String>,
    },

    /// Decrypt a file with a private key
    Decrypt {
        #[arg(long, value_enum, default_value = "P256")]
        mode: Mode,

        /// Private key (hex)
        #[arg(long, default_value = "key.pem")]
        private: PathBuf,

        #[arg(short, long, default_value = "file.txt")]
        input: PathBuf,

        #[arg(short, long, default_value = "out.out")]
        output: PathBuf,

        /// Read the envelope as hex
        #[arg(long)]
        hex: bool,

        /// Key derivation context (hex)
        #[arg(long)]
        shared_info: Option<String>,

        /// Authenticated associated data (hex)
        #[arg(long)]
        associated_data: Option<String>,
    },

    /// Convert PEM ECDSA P-256 keys into hex key files
    Import {
        /// SEC1 `EC PRIVATE KEY` PEM
        #[arg(long)]
        private_pem: PathBuf,

        /// SPKI public key PEM
        #[arg(long)]
        public_pem: PathBuf,

        #[arg(long, default_value = "key.pem")]
        private: PathBuf,

        #[arg(long, default_value = "key.pub")]
        public: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging, RUST_LOG wins over --verbose
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Keygen { mode, private, public } => {
            generate_keypair(mode.into(), &private, &public)?;
            println!(
                "Key successfully generated into {} and {}",
                private.display(),
                public.display()
            );
        }
        Commands::Encrypt {
            mode,
            public,
            input,
            output,
            hex,
            shared_info,
            associated_data,
        } => {
            let s1 = io::decode_hex_arg("shared-info", shared_info.as_deref())?;
            let s2 = io::decode_hex_arg("associated-data", associated_data.as_deref())?;
            let written = encrypt_file(
                mode.into(),
                &public,
                &input,
                &output,
                hex,
                s1.as_deref(),
                s2.as_deref(),
            )?;
            println!("Encrypted {} into {} ({} bytes)", input.display(), output.display(), written);
        }
        Commands::Decrypt {
            mode,
            private,
            input,
            output,
            hex,
            shared_info,
            associated_data,
        } => {
            let s1 = io::decode_hex_arg("shared-info", shared_info.as_deref())?;
            let s2 = io::decode_hex_arg("associated-data", associated_data.as_deref())?;
            let written = decrypt_file(
                mode.into(),
                &private,
                &input,
                &output,
                hex,
                s1.as_deref(),
                s2.as_deref(),
            )?;
            println!("Decrypted {} into {} ({} bytes)", input.display(), output.display(), written);
        }
        Commands::Import {
            private_pem,
            public_pem,
            private,
            public,
        } => {
            import_pem_keys(&private_pem, &public_pem, &private, &public)?;
            println!("Imported keys into {} and {}", private.display(), public.display());
        }
    }

    Ok(())
}

fn generate_keypair(curve: CurveId, private: &Path, public: &Path) -> anyhow::Result<()> {
    tracing::info!("Generating {} key pair", curve);
    let key = PrivateKey::generate(&mut OsRng, curve).context("key generation failed")?;

    io::write_hex_file(private, &key.to_scalar_bytes())?;
    io::write_hex_file(public, &key.public_key().to_encoded())?;
    Ok(())
}

fn encrypt_file(
    curve: CurveId,
    public: &Path,
    input: &Path,
    output: &Path,
    hex: bool,
    s1: Option<&[u8]>,
    s2: Option<&[u8]>,
) -> anyhow::Result<usize> {
    let recipient = PublicKey::from_encoded(curve, &io::read_hex_file(public)?)
        .with_context(|| format!("{} is not a {} public key", public.display(), curve))?;
    let plaintext = io::read_file(input)?;
    tracing::debug!(
        "Encrypting {} bytes for {} (shared info: {}, associated data: {})",
        plaintext.len(),
        curve,
        s1.is_some(),
        s2.is_some()
    );

    let envelope = encrypt(&mut OsRng, &recipient, &plaintext, s1, s2).context("encryption failed")?;
    if hex {
        io::write_hex_file(output, &envelope)?;
    } else {
        io::write_file(output, &envelope)?;
    }
    Ok(envelope.len())
}

fn decrypt_file(
    curve: CurveId,
    private: &Path,
    input: &Path,
    output: &Path,
    hex: bool,
    s1: Option<&[u8]>,
    s2: Option<&[u8]>,
) -> anyhow::Result<usize> {
    let recipient = PrivateKey::from_scalar(curve, &io::read_hex_file(private)?)
        .with_context(|| format!("{} is not a {} private key", private.display(), curve))?;
    let envelope = if hex {
        io::read_hex_file(input)?.to_vec()
    } else {
        io::read_file(input)?
    };
    tracing::debug!("Decrypting {} byte envelope with {}", envelope.len(), curve);

    let plaintext = decrypt(&recipient, &envelope, s1, s2).context("decryption failed")?;
    io::write_file(output, &plaintext)?;
    Ok(plaintext.len())
}

fn import_pem_keys(
    private_pem: &Path,
    public_pem: &Path,
    private: &Path,
    public: &Path,
) -> anyhow::Result<()> {
    let private_text = fs::read_to_string(private_pem)
        .with_context(|| format!("failed to read {}", private_pem.display()))?;
    let public_text = fs::read_to_string(public_pem)
        .with_context(|| format!("failed to read {}", public_pem.display()))?;

    let private_key = import_ecdsa_private_pem(&private_text)
        .with_context(|| format!("failed to import {}", private_pem.display()))?;
    let public_key = import_ecdsa_public_pem(&public_text)
        .with_context(|| format!("failed to import {}", public_pem.display()))?;
    if private_key.public_key() != &public_key {
        tracing::warn!("{} does not match {}", public_pem.display(), private_pem.display());
    }

    io::write_hex_file(private, &private_key.to_scalar_bytes())?;
    io::write_hex_file(public, &public_key.to_encoded())?;
    Ok(())
}
