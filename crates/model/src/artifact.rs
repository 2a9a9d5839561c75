//! Model artifact persistence
//!
//! The model is fitted offline and shipped as a JSON file. Loading validates
//! the deserialized parameters before handing the model out.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{ModelError, Result};
use crate::seasonal::SeasonalTrendModel;

/// Load a model from a JSON artifact file.
pub fn load_model(path: &Path) -> Result<SeasonalTrendModel> {
    let file = File::open(path).map_err(|e| ModelError::Io(e.to_string()))?;
    let model: SeasonalTrendModel =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| ModelError::Malformed(e.to_string()))?;
    model.validate()?;
    Ok(model)
}

/// Write a model to a JSON artifact file.
pub fn save_model(path: &Path, model: &SeasonalTrendModel) -> Result<()> {
    model.validate()?;
    let file = File::create(path).map_err(|e| ModelError::Io(e.to_string()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), model)
        .map_err(|e| ModelError::Malformed(e.to_string()))?;
    Ok(())
}
