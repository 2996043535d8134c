//! `ledger-json` command-line tool.
//!
//! Decodes wire documents through the same typed boundary a node uses and
//! prints the re-encoded object, or emits a genesis transaction.
//!
//! # Usage
//!
//! ```bash
//! # Check that a block document is well formed
//! ledger-json decode block block.json
//!
//! # Same for a query read from stdin, with debug logging
//! cat query.json | ledger-json -v decode query
//!
//! # Genesis transaction for a two-peer network
//! ledger-json genesis \
//!     --peer 10.0.0.1:10001=<pubkey hex> \
//!     --peer 10.0.0.2:10001=<pubkey hex> \
//!     --admin-key <pubkey hex> --user-key <pubkey hex>
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use ledger_json::converters::{json_block, json_query, json_transaction};
use ledger_json::generators::{now_millis, TransactionGenerator};
use ledger_json::model::{Peer, PubKey};
use ledger_json_blob::BlobError;
use ledger_json_document::{parse_with_limits, render, ConfigError, DocumentError, DocumentLimits};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ledger-json", version, about = "Decode and generate ledger JSON documents")]
struct Cli {
    /// TOML file with a `[limits]` table.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log decoder rejections (`RUST_LOG` takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Decode a document and print it re-encoded.
    Decode {
        kind: Kind,
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Print a genesis transaction.
    Genesis {
        /// Peer as ADDRESS=PUBKEY_HEX. Repeatable.
        #[arg(long = "peer", value_name = "ADDRESS=PUBKEY_HEX")]
        peers: Vec<String>,
        #[arg(long, value_name = "HEX")]
        admin_key: String,
        #[arg(long, value_name = "HEX")]
        user_key: String,
        /// Creation time in milliseconds; now when omitted.
        #[arg(long, value_name = "MS")]
        timestamp: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Block,
    Transaction,
    Query,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Block => "block",
            Kind::Transaction => "transaction",
            Kind::Query => "query",
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("malformed {kind}")]
    Malformed { kind: &'static str },
    #[error("invalid peer {0:?}: expected ADDRESS=PUBKEY_HEX")]
    InvalidPeer(String),
    #[error("invalid key: {0}")]
    InvalidKey(#[from] BlobError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        CliCommand::Decode { kind, file } => {
            let limits = load_limits(cli.config.as_deref())?;
            let text = read_input(file.as_deref())?;
            decode(kind, &text, &limits)
        }
        CliCommand::Genesis {
            peers,
            admin_key,
            user_key,
            timestamp,
        } => {
            let peers = peers
                .iter()
                .map(|arg| parse_peer(arg))
                .collect::<Result<Vec<_>, _>>()?;
            let admin_key: PubKey = admin_key.parse()?;
            let user_key: PubKey = user_key.parse()?;
            let tx = TransactionGenerator.generate_genesis_transaction(
                timestamp.unwrap_or_else(now_millis),
                &peers,
                admin_key,
                user_key,
            );
            Ok(json_transaction::transaction_to_string(&tx))
        }
    }
}

fn load_limits(path: Option<&Path>) -> Result<DocumentLimits, CliError> {
    let Some(path) = path else {
        return Ok(DocumentLimits::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let limits = DocumentLimits::from_toml_str(&text)?;
    tracing::debug!(
        max_document_bytes = limits.max_document_bytes,
        max_depth = limits.max_depth,
        "loaded limits"
    );
    Ok(limits)
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(text)
        }
    }
}

fn decode(kind: Kind, text: &str, limits: &DocumentLimits) -> Result<String, CliError> {
    let document = parse_with_limits(text, limits)?;
    let encoded: Option<Value> = match kind {
        Kind::Block => json_block::from_json(&document).map(|b| json_block::to_json(&b)),
        Kind::Transaction => {
            json_transaction::from_json(&document).map(|tx| json_transaction::to_json(&tx))
        }
        Kind::Query => json_query::from_json(&document).map(|q| json_query::to_json(&q)),
    };
    encoded
        .map(|value| render(&value))
        .ok_or(CliError::Malformed { kind: kind.name() })
}

fn parse_peer(arg: &str) -> Result<Peer, CliError> {
    let (address, key) = arg
        .split_once('=')
        .filter(|(address, _)| !address.is_empty())
        .ok_or_else(|| CliError::InvalidPeer(arg.to_string()))?;
    Ok(Peer::new(address, key.parse()?))
}
