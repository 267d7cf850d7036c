//! CLI for modelsum repository checksum verification.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelsum_core::{config, ValueFormat};
use std::path::PathBuf;

use commands::{run_algorithms, run_hash, run_verify, VerifyArgs};

/// Top-level CLI for modelsum.
#[derive(Debug, Parser)]
#[command(name = "modelsum")]
#[command(about = "modelsum: verify model repository files against declared checksums", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify a repository directory against its checksum parameters.
    Verify {
        /// Repository root; declared paths are relative to it.
        dir: PathBuf,

        /// TOML manifest with a [parameters] table (default: <DIR>/checksums.toml if present).
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Extra checksum parameter, e.g. `md5:1/model.onnx=<digest>`. Checked after the manifest.
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Value format: "bare" or "sum-line" (default from config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<ValueFormat>,
    },

    /// Print the digest of a file, md5sum style.
    Hash {
        /// Path to the file.
        path: PathBuf,

        /// Algorithm identifier (default from config, normally md5).
        #[arg(short, long, value_name = "ID")]
        algorithm: Option<String>,
    },

    /// List supported checksum algorithms.
    Algorithms,
}

/// Split `KEY=VALUE` on the first '='; keys cannot contain one.
fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    Ok((key.to_string(), value.to_string()))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verify {
                dir,
                manifest,
                params,
                format,
            } => run_verify(
                &cfg,
                VerifyArgs {
                    dir,
                    manifest,
                    params,
                    format,
                },
            )?,
            CliCommand::Hash { path, algorithm } => {
                let algorithm = algorithm.unwrap_or_else(|| cfg.default_algorithm.clone());
                run_hash(&path, &algorithm)?;
            }
            CliCommand::Algorithms => run_algorithms(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
