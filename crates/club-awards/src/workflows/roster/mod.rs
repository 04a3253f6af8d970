//! Import of the range software's XML season export.

mod parser;

use crate::workflows::eligibility::Shooter;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("no XML export found in '{}'", dir.display())]
    NoExport { dir: PathBuf },
    #[error("invalid roster XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("<{element}> element is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("shooter {shooter_id} has an invalid {attribute} value '{value}'")]
    InvalidValue {
        shooter_id: String,
        attribute: &'static str,
        value: String,
    },
}

pub struct RosterImporter;

impl RosterImporter {
    /// Most recently modified `*.xml` file directly inside `dir`.
    pub fn newest_export<P: AsRef<Path>>(dir: P) -> Result<PathBuf, RosterImportError> {
        let dir = dir.as_ref();
        let mut newest: Option<(SystemTime, PathBuf)> = None;

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_xml = path.extension().is_some_and(|extension| extension == "xml");
            if !is_xml || !path.is_file() {
                continue;
            }

            let modified = std::fs::metadata(&path)?.modified()?;
            if newest
                .as_ref()
                .map_or(true, |(current, _)| modified > *current)
            {
                newest = Some((modified, path));
            }
        }

        newest
            .map(|(_, path)| path)
            .ok_or_else(|| RosterImportError::NoExport {
                dir: dir.to_path_buf(),
            })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Shooter>, RosterImportError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading roster export");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<Shooter>, RosterImportError> {
        let mut xml = String::new();
        reader.read_to_string(&mut xml)?;
        Self::from_xml(&xml)
    }

    pub fn from_xml(xml: &str) -> Result<Vec<Shooter>, RosterImportError> {
        let shooters = parser::parse_shooters(xml)?;
        info!(shooters = shooters.len(), "roster imported");
        Ok(shooters)
    }
}
