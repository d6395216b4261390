//! JSON persistence of the configuration and learned bundle.

use std::{fs, path::Path};

use pricefeat_primitives::{FeatureArtifacts, FeatureConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{EngineerError, FeatureEngineer};

#[derive(Serialize)]
struct ArtifactDocumentRef<'a> {
    config: &'a FeatureConfig,
    #[serde(flatten)]
    artifacts: &'a FeatureArtifacts,
}

#[derive(Deserialize)]
struct ArtifactDocument {
    config: FeatureConfig,
    #[serde(flatten)]
    artifacts: FeatureArtifacts,
}

impl FeatureEngineer {
    /// Serialize the configuration and learned bundle to a JSON document.
    ///
    /// Sets are written as sorted arrays and maps with sorted keys, so equal
    /// learners always produce identical bytes.
    ///
    /// # Errors
    /// Returns `EngineerError::Estimator` with `NotFitted` before fit or load.
    pub fn to_json(&self) -> Result<String, EngineerError> {
        let artifacts = self.fitted_artifacts()?;
        let document = ArtifactDocumentRef { config: self.config(), artifacts };
        serde_json::to_string(&document).map_err(EngineerError::Serialize)
    }

    /// Restore a fitted learner from a JSON document written by [`Self::to_json`].
    ///
    /// # Errors
    /// Returns `EngineerError::CorruptArtifact` if a structural key is missing,
    /// a value has the wrong type, the configuration is invalid, or the two
    /// brand rarity sets overlap.
    pub fn from_json(json: &str) -> Result<Self, EngineerError> {
        let document: ArtifactDocument =
            serde_json::from_str(json).map_err(|e| EngineerError::CorruptArtifact(e.to_string()))?;

        if document.artifacts.rarity_sets_overlap() {
            return Err(EngineerError::CorruptArtifact(
                "rare_low_brands and rare_mid_brands overlap".to_string(),
            ));
        }
        document
            .config
            .validate()
            .map_err(|e| EngineerError::CorruptArtifact(e.to_string()))?;

        Self::from_parts(document.config, document.artifacts)
    }

    /// Write the learned state to `path`.
    ///
    /// # Errors
    /// Returns `NotFitted` before fit or load; filesystem errors propagate
    /// unchanged as `EngineerError::Io`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EngineerError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, &json)?;
        info!(path = %path.display(), bytes = json.len(), "saved listing feature artifacts");
        Ok(())
    }

    /// Read a learner previously written with [`Self::save`].
    ///
    /// # Errors
    /// Filesystem errors propagate unchanged as `EngineerError::Io`; malformed
    /// documents fail with `EngineerError::CorruptArtifact`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineerError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let engineer = Self::from_json(&json)?;
        info!(path = %path.display(), "loaded listing feature artifacts");
        Ok(engineer)
    }
}
