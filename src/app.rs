use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::context::{COPYRIGHT, LICENSE, PackageContext};
use crate::error::AppError;
use crate::utils::lsdirs;
use crate::version::{VersionStatus, check_version};

pub(crate) fn run(cli: &Cli, context: &PackageContext) -> Result<(), AppError> {
    match &cli.command {
        Commands::Version { check } => handle_version(cli, context, *check),
        Commands::BidsVersion => handle_bids_version(cli, context),
        Commands::Dirs { folder, pattern } => handle_dirs(cli, folder, pattern),
        Commands::Paths => handle_paths(cli, context),
    }
}

fn handle_version(cli: &Cli, context: &PackageContext, check: bool) -> Result<(), AppError> {
    if !check {
        if cli.json {
            let json = serde_json::json!({
                "version": context.version,
                "license": LICENSE,
                "copyright": COPYRIGHT,
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap());
        } else {
            println!("bidskit {}", context.version);
        }
        return Ok(());
    }

    let status = if cli.offline {
        VersionStatus::Unknown {
            reason: "offline mode".to_string(),
        }
    } else {
        check_version(&context.version, cli.registry_url())
    };

    if cli.json {
        let json = serde_json::json!({
            "local": context.version,
            "remote": status.remote_version(),
            "status": status.as_str(),
            "message": status.message(),
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap());
    } else {
        println!("{}", status.message());
    }
    Ok(())
}

fn handle_bids_version(cli: &Cli, context: &PackageContext) -> Result<(), AppError> {
    let bids_version = context.bids_version()?;
    if cli.json {
        let json = serde_json::json!({ "bids_version": bids_version });
        println!("{}", serde_json::to_string_pretty(&json).unwrap());
    } else {
        println!("{bids_version}");
    }
    Ok(())
}

fn handle_dirs(cli: &Cli, folder: &Path, pattern: &str) -> Result<(), AppError> {
    let dirs = lsdirs(folder, pattern)?;
    if cli.json {
        let paths: Vec<String> = dirs.iter().map(|p| p.display().to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&paths).unwrap());
    } else {
        for dir in dirs {
            println!("{}", dir.display());
        }
    }
    Ok(())
}

fn handle_paths(cli: &Cli, context: &PackageContext) -> Result<(), AppError> {
    if cli.json {
        let json = serde_json::json!({
            "root": context.root.display().to_string(),
            "schema": context.schema_folder.display().to_string(),
            "heuristics": context.heuristics_folder.display().to_string(),
            "plugins": context.plugin_folder.display().to_string(),
            "bidsmap_template": context.bidsmap_template.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap());
    } else {
        println!("root:             {}", context.root.display());
        println!("schema:           {}", context.schema_folder.display());
        println!("heuristics:       {}", context.heuristics_folder.display());
        println!("plugins:          {}", context.plugin_folder.display());
        println!("bidsmap template: {}", context.bidsmap_template.display());
    }
    Ok(())
}
