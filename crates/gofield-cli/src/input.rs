//! The job description file: which structures to read, how to group their
//! chains, which regions are flexible, and which generators to run.
//!
//! ```toml
//! parameters = "aicg2plus.toml"
//! output     = "forcefield.toml"
//! generators = ["AICG2+", "ExcludedVolume"]
//!
//! [[structures]]
//! file     = "dimer.pdb"
//! group    = "complex"
//! chains   = ["A", "B"]
//! flexible = [[120, 135]]
//! ```

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, PartialEq)]
pub struct InputFile {
    /// Path of the force-field parameter bundle.
    pub parameters: PathBuf,
    /// Path the generated force field is written to.
    pub output: PathBuf,
    /// Generator names, run in order.
    pub generators: Vec<String>,
    pub structures: Vec<StructureEntry>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct StructureEntry {
    pub file: PathBuf,
    /// Group name; defaults to the file stem.
    pub group: Option<String>,
    /// Chain identifiers to include; all chains when omitted.
    pub chains: Option<Vec<char>>,
    /// Inclusive global bead index ranges marked as flexible.
    #[serde(default)]
    pub flexible: Vec<[usize; 2]>,
}

impl StructureEntry {
    pub fn group_name(&self) -> String {
        match &self.group {
            Some(name) => name.clone(),
            None => self
                .file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| self.file.to_string_lossy().to_string()),
        }
    }
}

impl InputFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const INPUT: &str = r#"
parameters = "params.toml"
output = "ff.toml"
generators = ["AICG2+", "DebyeHuckel"]

[[structures]]
file = "dimer.pdb"
chains = ["A", "B"]
flexible = [[3, 7]]

[[structures]]
file = "ligand.pdb"
group = "partner"
"#;

    #[test]
    fn load_parses_the_job_description() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.toml");
        fs::write(&path, INPUT).unwrap();

        let input = InputFile::load(&path).unwrap();
        assert_eq!(input.generators, vec!["AICG2+", "DebyeHuckel"]);
        assert_eq!(input.structures.len(), 2);
        assert_eq!(input.structures[0].chains, Some(vec!['A', 'B']));
        assert_eq!(input.structures[0].flexible, vec![[3, 7]]);
        assert_eq!(input.structures[1].chains, None);
    }

    #[test]
    fn group_name_falls_back_to_the_file_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.toml");
        fs::write(&path, INPUT).unwrap();

        let input = InputFile::load(&path).unwrap();
        assert_eq!(input.structures[0].group_name(), "dimer");
        assert_eq!(input.structures[1].group_name(), "partner");
    }

    #[test]
    fn malformed_input_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.toml");
        fs::write(&path, "generators = 3").unwrap();

        let err = InputFile::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }
}
