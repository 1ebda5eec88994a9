use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::state::DietForm;

/// Load a form draft from a JSON file.
pub fn load_form<P: AsRef<Path>>(path: P) -> Result<DietForm> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let form: DietForm = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded form");
    Ok(form)
}

/// Save a form draft to a JSON file.
pub fn save_form<P: AsRef<Path>>(path: P, form: &DietForm) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(form)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved form");
    Ok(())
}
