use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{CalculationInputs, SavedCalculation};
use crate::core::{
    CalculationResult, CostError, check_financing, check_save_details, check_vehicle,
    validation_failure,
};

/// Ordered list of saved calculations, oldest first.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationStore {
    records: Vec<SavedCalculation>,
}

impl CalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the order they were saved.
    pub fn list(&self) -> &[SavedCalculation] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&SavedCalculation> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a new snapshot.
    ///
    /// `title` and `car_model` must not be blank and the inputs must pass the
    /// range checks. The id is the millisecond timestamp of `now`, bumped
    /// until it is unique in this store.
    pub fn save(
        &mut self,
        title: &str,
        car_model: &str,
        inputs: CalculationInputs,
        results: CalculationResult,
        now: DateTime<Utc>,
    ) -> Result<&SavedCalculation, CostError> {
        let mut errors = check_save_details(title, car_model);
        errors.extend(check_vehicle(&inputs.vehicle));
        errors.extend(check_financing(&inputs.financing));
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }

        let mut millis = now.timestamp_millis();
        while self.get(&millis.to_string()).is_some() {
            millis += 1;
        }

        let record = SavedCalculation {
            id: millis.to_string(),
            title: title.trim().to_string(),
            vehicle_description: format!(
                "{} ({})",
                car_model.trim(),
                inputs.vehicle.production_year
            ),
            saved_date: now.date_naive(),
            inputs,
            results,
        };
        log::debug!("saving calculation {} ({})", record.id, record.title);
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// [`save`](Self::save) stamped with the current time.
    pub fn save_now(
        &mut self,
        title: &str,
        car_model: &str,
        inputs: CalculationInputs,
        results: CalculationResult,
    ) -> Result<&SavedCalculation, CostError> {
        self.save(title, car_model, inputs, results, Utc::now())
    }

    /// Remove a record, returning it if it existed.
    pub fn delete(&mut self, id: &str) -> Option<SavedCalculation> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        log::debug!("deleting calculation {id}");
        Some(self.records.remove(pos))
    }

    pub fn to_json(&self) -> Result<String, CostError> {
        serde_json::to_string_pretty(self).map_err(|e| CostError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CostError> {
        serde_json::from_str(json).map_err(|e| CostError::Serialization(e.to_string()))
    }

    /// Read a store from `path`. A missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CostError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no saved calculations at {}", path.display());
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(CostError::Storage(format!(
                    "reading {}: {e}",
                    path.display()
                )));
            }
        };
        let store = Self::from_json(&json)?;
        log::debug!(
            "loaded {} saved calculations from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Write the whole store to `path`, replacing its previous content.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<(), CostError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| CostError::Storage(format!("writing {}: {e}", path.display())))?;
        log::debug!("persisted {} saved calculations to {}", self.len(), path.display());
        Ok(())
    }
}
