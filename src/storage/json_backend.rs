use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::{EngineError, Result},
    ledger::Ledger,
};

use super::StorageBackend;

const LEDGER_EXTENSION: &str = "json";

/// Stores each ledger as a pretty-printed JSON file under `<root>/ledgers`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    ledgers_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        let ledgers_dir = PathResolver::ledger_dir_in(&root);
        ensure_dir(&ledgers_dir)?;
        Ok(Self { root, ledgers_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn ledger_path(&self, name: &str) -> PathBuf {
        self.ledgers_dir
            .join(format!("{}.{LEDGER_EXTENSION}", canonical_name(name)))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()> {
        let path = self.ledger_path(name);
        debug!(path = %path.display(), "saving ledger");
        save_ledger_to_path(ledger, &path)
    }

    fn load(&self, name: &str) -> Result<Ledger> {
        let path = self.ledger_path(name);
        if !path.exists() {
            return Err(EngineError::Storage(format!("ledger `{name}` not found")));
        }
        load_ledger_from_path(&path)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.ledgers_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.ledger_path(name);
        if !path.exists() {
            return Err(EngineError::Storage(format!("ledger `{name}` not found")));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    write_atomic(path, &json)
}

/// Reads a ledger and re-expands any schedule that no longer matches its fields.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let mut ledger: Ledger = serde_json::from_str(&data)?;
    if ledger.schema_version > Ledger::schema_version_default() {
        return Err(EngineError::Storage(format!(
            "`{}` was written by a newer schema version ({})",
            path.display(),
            ledger.schema_version
        )));
    }
    let repaired = ledger.repair_schedules();
    if repaired > 0 {
        warn!(path = %path.display(), repaired, "ledger loaded with repaired schedules");
    }
    Ok(ledger)
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "ledger".into()
    } else {
        sanitized
    }
}
