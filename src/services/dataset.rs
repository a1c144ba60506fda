use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use crate::models::NeighborhoodRecord;

/// Seattle neighborhoods shipped with the binary
const BUILTIN_NEIGHBORHOODS: &str = include_str!("../../data/neighborhoods.json");

/// Errors that can occur while loading neighborhood data
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Dataset is empty")]
    Empty,

    #[error("Duplicate neighborhood id: {0}")]
    DuplicateId(String),

    #[error("Invalid neighborhood {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Read-only neighborhood reference data
///
/// Loaded once at startup and shared between workers behind an `Arc`.
/// Nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct NeighborhoodDataset {
    neighborhoods: Vec<NeighborhoodRecord>,
}

impl NeighborhoodDataset {
    /// Build a dataset from records, validating them first
    pub fn new(neighborhoods: Vec<NeighborhoodRecord>) -> Result<Self, DatasetError> {
        validate(&neighborhoods)?;
        Ok(Self { neighborhoods })
    }

    /// The compiled-in dataset
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_NEIGHBORHOODS)
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let neighborhoods: Vec<NeighborhoodRecord> = serde_json::from_str(json)?;
        Self::new(neighborhoods)
    }

    /// Load a JSON array of records from disk
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&json)
    }

    pub fn get(&self, id: &str) -> Option<&NeighborhoodRecord> {
        self.neighborhoods.iter().find(|n| n.id == id)
    }

    pub fn all(&self) -> &[NeighborhoodRecord] {
        &self.neighborhoods
    }

    pub fn len(&self) -> usize {
        self.neighborhoods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty()
    }
}

fn validate(neighborhoods: &[NeighborhoodRecord]) -> Result<(), DatasetError> {
    if neighborhoods.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut seen = HashSet::with_capacity(neighborhoods.len());
    for record in neighborhoods {
        if !seen.insert(record.id.as_str()) {
            return Err(DatasetError::DuplicateId(record.id.clone()));
        }

        if let Some((category, score)) = record.scores.iter().find(|(_, s)| **s > 100) {
            return Err(DatasetError::InvalidRecord {
                id: record.id.clone(),
                reason: format!("{:?} score {} is above 100", category, score),
            });
        }

        if record.housing.average_rent == 0 {
            return Err(DatasetError::InvalidRecord {
                id: record.id.clone(),
                reason: "average rent must be positive".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_loads() {
        let dataset = NeighborhoodDataset::builtin().unwrap();
        assert_eq!(dataset.len(), 8);

        let fremont = dataset.get("2").unwrap();
        assert_eq!(fremont.name, "Fremont");
        assert_eq!(fremont.scores.family_friendly, 80);
        assert_eq!(fremont.housing.average_rent, 2400);
    }

    #[test]
    fn test_unknown_id() {
        let dataset = NeighborhoodDataset::builtin().unwrap();
        assert!(dataset.get("999").is_none());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(NeighborhoodDataset::from_json("[]"), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = NeighborhoodDataset::builtin().unwrap().all().to_vec();
        records[1].id = records[0].id.clone();
        assert!(matches!(NeighborhoodDataset::new(records), Err(DatasetError::DuplicateId(_))));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let mut records = NeighborhoodDataset::builtin().unwrap().all().to_vec();
        records[0].scores.safety = 140;
        assert!(matches!(
            NeighborhoodDataset::new(records),
            Err(DatasetError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_zero_rent_rejected() {
        let mut records = NeighborhoodDataset::builtin().unwrap().all().to_vec();
        records[0].housing.average_rent = 0;
        assert!(matches!(
            NeighborhoodDataset::new(records),
            Err(DatasetError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            NeighborhoodDataset::from_json("{\"id\": 1}"),
            Err(DatasetError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = NeighborhoodDataset::from_path("does/not/exist.json").await;
        assert!(matches!(result, Err(DatasetError::IoError(_))));
    }
}
