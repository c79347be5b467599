use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use form_spec::{FormDocument, ensure_unique_ids};

pub fn load(path: &Path) -> Result<FormDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read form {}", path.display()))?;
    let document: FormDocument = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse form {}", path.display()))?;
    ensure_unique_ids(&document.fields)
        .with_context(|| format!("form {} has conflicting fields", path.display()))?;
    Ok(document)
}

pub fn save(path: &Path, document: &FormDocument) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let payload = document.to_json_pretty()?;
    fs::write(path, payload).with_context(|| format!("failed to write form {}", path.display()))
}
