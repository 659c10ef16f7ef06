use crate::cli::Cli;
use crate::config::FileConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use defectgen::{
    core::io::{poscar::PoscarFile, traits::StructureFormat},
    engine::{config::DefectSpec, progress::ProgressReporter, substitution::DefectOutcome},
    workflows,
};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_INPUT: &str = "POSCAR";

pub fn run(args: &Cli) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let input = resolve_input(args, &file_config);
    info!("Loading input structure from {:?}", &input);
    let (mut structure, mut metadata) =
        PoscarFile::read_from_path(&input).map_err(|e| CliError::FileParsing {
            path: input.clone(),
            source: e.into(),
        })?;

    let spec = build_spec(args, &file_config)?;
    let reporter = ProgressReporter::with_callback(CliProgressHandler::callback());

    let outcome = workflows::defect::run(&mut structure, &mut metadata, &spec, &reporter)?;

    let output = resolve_output(args, &file_config, &outcome);
    PoscarFile::write_to_path(&structure, &metadata, &output).map_err(|e| {
        CliError::FileWriting {
            path: output.clone(),
            source: e.into(),
        }
    })?;
    info!("Written updated structure to {:?}", &output);

    let removed = outcome.removed();
    println!(
        "({} → {}, [{}, {}, {}])",
        outcome.substitution(),
        outcome.site(),
        removed.x,
        removed.y,
        removed.z
    );
    println!("✓ Defect structure written to: {}", output.display());

    Ok(())
}

fn build_spec(args: &Cli, file_config: &FileConfig) -> Result<DefectSpec> {
    let mut builder = DefectSpec::builder()
        .substitution(&args.substitution)
        .site(&args.site);
    if let Some(target) = args.target_coordinate().or(file_config.defect.target) {
        builder = builder.target(target);
    }
    Ok(builder.build()?)
}

fn resolve_input(args: &Cli, file_config: &FileConfig) -> PathBuf {
    args.file
        .clone()
        .or_else(|| file_config.io.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

fn resolve_output(args: &Cli, file_config: &FileConfig, outcome: &DefectOutcome) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    let filename = outcome.default_filename();
    match &file_config.io.output_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}
