//! Prioritization weights for downstream allocation tooling.
//!
//! Six named sliders, conventionally 0-100 but unbounded by contract. Like
//! the business rules, weights are captured and exported, never executed
//! here.

use serde::{Deserialize, Serialize};

/// The six weight sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizationWeights {
    pub priority_level: f64,
    pub fulfillment: f64,
    pub fairness: f64,
    pub efficiency: f64,
    pub cost: f64,
    pub speed: f64,
}

impl Default for PrioritizationWeights {
    fn default() -> Self {
        Self {
            priority_level: 50.0,
            fulfillment: 30.0,
            fairness: 20.0,
            efficiency: 40.0,
            cost: 25.0,
            speed: 35.0,
        }
    }
}

/// Addressable weight keys, for single-slider updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightKey {
    PriorityLevel,
    Fulfillment,
    Fairness,
    Efficiency,
    Cost,
    Speed,
}

impl PrioritizationWeights {
    pub fn get(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::PriorityLevel => self.priority_level,
            WeightKey::Fulfillment => self.fulfillment,
            WeightKey::Fairness => self.fairness,
            WeightKey::Efficiency => self.efficiency,
            WeightKey::Cost => self.cost,
            WeightKey::Speed => self.speed,
        }
    }

    pub fn set(&mut self, key: WeightKey, value: f64) {
        match key {
            WeightKey::PriorityLevel => self.priority_level = value,
            WeightKey::Fulfillment => self.fulfillment = value,
            WeightKey::Fairness => self.fairness = value,
            WeightKey::Efficiency => self.efficiency = value,
            WeightKey::Cost => self.cost = value,
            WeightKey::Speed => self.speed = value,
        }
    }

    /// The built-in quick-preset profiles.
    pub fn presets() -> [WeightPreset; 4] {
        [
            WeightPreset {
                name: "Maximize Fulfillment",
                description: "Prioritize completing all client requests",
                weights: PrioritizationWeights {
                    priority_level: 40.0,
                    fulfillment: 80.0,
                    fairness: 30.0,
                    efficiency: 50.0,
                    cost: 20.0,
                    speed: 40.0,
                },
            },
            WeightPreset {
                name: "Fair Distribution",
                description: "Ensure balanced workload across workers",
                weights: PrioritizationWeights {
                    priority_level: 30.0,
                    fulfillment: 50.0,
                    fairness: 80.0,
                    efficiency: 40.0,
                    cost: 30.0,
                    speed: 30.0,
                },
            },
            WeightPreset {
                name: "Minimize Workload",
                description: "Reduce worker stress and burnout",
                weights: PrioritizationWeights {
                    priority_level: 20.0,
                    fulfillment: 40.0,
                    fairness: 70.0,
                    efficiency: 60.0,
                    cost: 40.0,
                    speed: 20.0,
                },
            },
            WeightPreset {
                name: "Cost Optimized",
                description: "Minimize operational costs",
                weights: PrioritizationWeights {
                    priority_level: 30.0,
                    fulfillment: 50.0,
                    fairness: 40.0,
                    efficiency: 70.0,
                    cost: 80.0,
                    speed: 30.0,
                },
            },
        ]
    }
}

/// A named weight profile selectable as a starting point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub weights: PrioritizationWeights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_store_state() {
        let w = PrioritizationWeights::default();
        assert_eq!(w.priority_level, 50.0);
        assert_eq!(w.fulfillment, 30.0);
        assert_eq!(w.fairness, 20.0);
        assert_eq!(w.efficiency, 40.0);
        assert_eq!(w.cost, 25.0);
        assert_eq!(w.speed, 35.0);
    }

    #[test]
    fn set_by_key() {
        let mut w = PrioritizationWeights::default();
        w.set(WeightKey::Cost, 90.0);
        assert_eq!(w.get(WeightKey::Cost), 90.0);
        assert_eq!(w.get(WeightKey::Speed), 35.0);
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(PrioritizationWeights::default()).unwrap();
        assert_eq!(value["priorityLevel"], 50.0);
        assert!(value.get("priority_level").is_none());
    }

    #[test]
    fn preset_profiles_carry_expected_vectors() {
        let presets = PrioritizationWeights::presets();
        assert_eq!(presets.len(), 4);
        let fulfillment = &presets[0];
        assert_eq!(fulfillment.name, "Maximize Fulfillment");
        assert_eq!(fulfillment.weights.fulfillment, 80.0);
        let cost = &presets[3];
        assert_eq!(cost.name, "Cost Optimized");
        assert_eq!(cost.weights.cost, 80.0);
    }
}
