//! `modelsum verify <dir>` – run the load-time checksum check on a repository.

use anyhow::Result;
use modelsum_core::config::ModelsumConfig;
use modelsum_core::manifest::Manifest;
use modelsum_core::{Action, ChecksumAgent, Location, ValueFormat};
use std::path::PathBuf;

#[derive(Debug)]
pub struct VerifyArgs {
    pub dir: PathBuf,
    pub manifest: Option<PathBuf>,
    pub params: Vec<(String, String)>,
    pub format: Option<ValueFormat>,
}

/// Collect the ordered parameter list: manifest entries first, then `--param` flags.
///
/// Without `--manifest`, `<dir>/<manifest_name>` is used when it exists.
pub fn collect_parameters(cfg: &ModelsumConfig, args: &VerifyArgs) -> Result<Vec<(String, String)>> {
    let manifest_path = match &args.manifest {
        Some(path) => Some(path.clone()),
        None => {
            let default = args.dir.join(&cfg.manifest_name);
            default.is_file().then_some(default)
        }
    };

    let mut params = match manifest_path {
        Some(path) => {
            tracing::debug!(manifest = %path.display(), "loading checksum manifest");
            Manifest::load(&path)?.parameters
        }
        None => Vec::new(),
    };
    params.extend(args.params.iter().cloned());
    Ok(params)
}

pub fn run_verify(cfg: &ModelsumConfig, args: VerifyArgs) -> Result<()> {
    let params = collect_parameters(cfg, &args)?;
    let format = args.format.unwrap_or(cfg.value_format);
    let count = params.len();
    if count == 0 {
        tracing::warn!(repo = %args.dir.display(), "no checksum parameters declared");
    }

    let agent = ChecksumAgent::new(format);
    let location = Location::Filesystem(args.dir.clone());
    agent.handle(Action::Load, &location, params).into_result()?;

    println!("OK  {} file(s) verified in {}", count, args.dir.display());
    Ok(())
}
