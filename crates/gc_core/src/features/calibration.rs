//! Fitted normalization parameters.
//!
//! The training pipeline exports per-model standardization (mean/scale per
//! input field) as a JSON artifact. It is loaded once at process start and
//! treated as read-only afterwards; the projector only ever applies it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{CoachError, Result};
use crate::features::ModelKind;

/// Elementwise affine transform for one model: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ModelScaler {
    /// Pass-through scaler of the given dimension.
    pub fn identity(dim: usize) -> Self {
        Self {
            mean: vec![0.0; dim],
            scale: vec![1.0; dim],
        }
    }

    fn check(&self, kind: ModelKind) -> Result<()> {
        let dim = kind.input_dim();
        if self.mean.len() != dim || self.scale.len() != dim {
            return Err(CoachError::Calibration(format!(
                "scaler for {} has dims {}/{}, model expects {}",
                kind,
                self.mean.len(),
                self.scale.len(),
                dim
            )));
        }
        if let Some(pos) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(CoachError::Calibration(format!(
                "scaler for {} has zero scale at index {}",
                kind, pos
            )));
        }
        Ok(())
    }

    pub fn transform(&self, values: &mut [f64]) -> Result<()> {
        if values.len() != self.mean.len() {
            return Err(CoachError::Calibration(format!(
                "feature vector length {} does not match scaler dimension {}",
                values.len(),
                self.mean.len()
            )));
        }
        for (i, v) in values.iter_mut().enumerate() {
            *v = (*v - self.mean[i]) / self.scale[i];
        }
        Ok(())
    }
}

/// On-disk artifact shape.
#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    schema_version: u8,
    scalers: HashMap<ModelKind, ModelScaler>,
}

const ARTIFACT_SCHEMA_VERSION: u8 = 1;

/// The full calibration set, one scaler per fitted model.
///
/// Models without a fitted scaler simply cannot be projected; the projector
/// reports that as a calibration error rather than falling back.
#[derive(Debug, Clone, Default)]
pub struct ScalerSet {
    scalers: HashMap<ModelKind, ModelScaler>,
}

impl ScalerSet {
    /// Identity scalers for all five models. Used by the baseline models,
    /// demos, and tests, where features are consumed unscaled.
    pub fn identity() -> Self {
        let mut scalers = HashMap::new();
        for kind in ModelKind::all() {
            scalers.insert(kind, ModelScaler::identity(kind.input_dim()));
        }
        Self { scalers }
    }

    /// Parse an exported artifact, validating every scaler against its
    /// model's input dimension. Shape problems surface here at load time,
    /// never during a live projection.
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ScalerArtifact = serde_json::from_str(json)?;
        if artifact.schema_version != ARTIFACT_SCHEMA_VERSION {
            return Err(CoachError::Calibration(format!(
                "unsupported artifact schema_version {}, expected {}",
                artifact.schema_version, ARTIFACT_SCHEMA_VERSION
            )));
        }
        for (kind, scaler) in &artifact.scalers {
            scaler.check(*kind)?;
        }
        Ok(Self {
            scalers: artifact.scalers,
        })
    }

    /// Like [`from_json`](Self::from_json), but first verifies the raw
    /// artifact bytes against an expected SHA-256 digest (hex), as recorded
    /// by the exporter's metadata.
    pub fn from_json_verified(json: &str, expected_sha256_hex: &str) -> Result<Self> {
        let digest = Sha256::digest(json.as_bytes());
        let mut hex = String::with_capacity(digest.len() * 2);
        for b in digest {
            hex.push_str(&format!("{:02x}", b));
        }
        if !hex.eq_ignore_ascii_case(expected_sha256_hex) {
            return Err(CoachError::Calibration(format!(
                "artifact checksum mismatch: found {}, expected {}",
                hex, expected_sha256_hex
            )));
        }
        Self::from_json(json)
    }

    pub fn scaler(&self, kind: ModelKind) -> Option<&ModelScaler> {
        self.scalers.get(&kind)
    }
}
