mod cli;
mod error;
mod input;
mod logging;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::input::{InputFile, StructureEntry};
use clap::Parser;
use gofield::core::forcefield::params::ForceFieldParams;
use gofield::core::io::forcefield_writer::write_forcefield;
use gofield::core::io::pdb::{read_pdb, PdbChain, PdbError};
use gofield::core::models::builder::carbon_alpha_group;
use gofield::core::models::group::Group;
use gofield::engine::generators::Generator;
use gofield::workflows::generate::generate_forcefield;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tracing::{error, info, warn};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, &cli.log_file) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = InputFile::load(&cli.input)?;
    let params = ForceFieldParams::load(&input.parameters)?;

    let generators = input
        .generators
        .iter()
        .map(|name| Generator::from_name(name, &params))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut groups = Vec::with_capacity(input.structures.len());
    let mut offset = 0;
    for entry in &input.structures {
        let group = load_group(entry, &params.masses, offset)?;
        info!(
            group = group.name(),
            chains = group.len(),
            beads = group.beads().count(),
            "built coarse-grained group"
        );
        offset += group.beads().count();
        groups.push(group);
    }

    let data = generate_forcefield(&generators, &groups)?;

    let out_path = cli.output.as_ref().unwrap_or(&input.output);
    let mut writer = BufWriter::new(File::create(out_path)?);
    write_forcefield(&mut writer, &data)?;
    info!(path = %out_path.display(), "wrote force field");
    Ok(())
}

fn load_group(
    entry: &StructureEntry,
    masses: &BTreeMap<String, f64>,
    index_offset: usize,
) -> Result<Group> {
    let file = File::open(&entry.file).map_err(|e| CliError::Structure {
        path: entry.file.clone(),
        source: PdbError::Io(e),
    })?;
    let chains = read_pdb(&mut BufReader::new(file)).map_err(|source| CliError::Structure {
        path: entry.file.clone(),
        source,
    })?;

    let selected: Vec<PdbChain> = match &entry.chains {
        Some(ids) => ids
            .iter()
            .map(|&id| {
                chains
                    .iter()
                    .find(|c| c.id == id)
                    .cloned()
                    .ok_or(CliError::MissingChain {
                        path: entry.file.clone(),
                        id,
                    })
            })
            .collect::<Result<_>>()?,
        None => chains,
    };

    let mut group = carbon_alpha_group(&entry.group_name(), &selected, masses, index_offset)?;
    for range in &entry.flexible {
        let marked = group.mark_flexible(range[0], range[1]);
        if marked == 0 {
            warn!(
                first = range[0],
                last = range[1],
                group = group.name(),
                "flexible range matched no beads"
            );
        }
    }
    Ok(group)
}
