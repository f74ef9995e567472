//! User preferences carried between runs.
//!
//! The preference value is constructed by the caller and passed where it
//! is needed; nothing here is global. A missing file simply yields the
//! defaults, so first runs need no setup.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Last-used inputs, persisted as a small JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    /// Dash-separated board string from the previous run.
    pub board: Option<String>,
    /// Strategy token from the previous run.
    pub algorithm: Option<String>,
}

impl Prefs {
    /// Read preferences, treating a missing file as empty defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading preferences from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("malformed preferences in {}", path.display()))
    }

    /// Write preferences back out as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing preferences to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("npuzzle-prefs-test-{name}-{}", std::process::id()));
        p
    }

    #[test]
    fn missing_file_yields_defaults() {
        let prefs = Prefs::load(Path::new("/nonexistent/npuzzle.json")).unwrap();
        assert_eq!(prefs, Prefs::default());
    }

    #[test]
    fn round_trip() {
        let path = temp_path("round-trip");
        let prefs = Prefs {
            board: Some("1-2-3-4-5-6-7- -8".into()),
            algorithm: Some("AS".into()),
        };
        prefs.save(&path).unwrap();
        let back = Prefs::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(back, prefs);
    }
}
