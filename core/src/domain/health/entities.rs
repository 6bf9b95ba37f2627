use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::suitability::model::ModelFamily;

/// The six chronic conditions the model predicts for, in label order.
///
/// `ALL` carries the order shared by training labels and inference output;
/// it must never be reordered independently of persisted artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum HealthCondition {
    Diabetes,
    Hypertension,
    HeartDisease,
    HighCholesterol,
    Obesity,
    KidneyDisease,
}

impl HealthCondition {
    pub const COUNT: usize = 6;

    pub const ALL: [HealthCondition; HealthCondition::COUNT] = [
        HealthCondition::Diabetes,
        HealthCondition::Hypertension,
        HealthCondition::HeartDisease,
        HealthCondition::HighCholesterol,
        HealthCondition::Obesity,
        HealthCondition::KidneyDisease,
    ];

    /// Position in the label vector.
    pub fn index(self) -> usize {
        match self {
            HealthCondition::Diabetes => 0,
            HealthCondition::Hypertension => 1,
            HealthCondition::HeartDisease => 2,
            HealthCondition::HighCholesterol => 3,
            HealthCondition::Obesity => 4,
            HealthCondition::KidneyDisease => 5,
        }
    }

    /// Wire key used in health profiles and response maps.
    pub fn key(self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "diabetes",
            HealthCondition::Hypertension => "hypertension",
            HealthCondition::HeartDisease => "heartDisease",
            HealthCondition::HighCholesterol => "highCholesterol",
            HealthCondition::Obesity => "obesity",
            HealthCondition::KidneyDisease => "kidneyDisease",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

/// Boolean condition flags of a user's health profile.
///
/// Unknown condition names sent by older or newer clients land in `other`:
/// they still show up in the resolved active-condition list but contribute
/// nothing to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionFlags {
    pub diabetes: bool,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub high_cholesterol: bool,
    pub obesity: bool,
    pub kidney_disease: bool,
    #[serde(flatten)]
    pub other: BTreeMap<String, bool>,
}

impl ConditionFlags {
    pub fn is_set(&self, condition: HealthCondition) -> bool {
        match condition {
            HealthCondition::Diabetes => self.diabetes,
            HealthCondition::Hypertension => self.hypertension,
            HealthCondition::HeartDisease => self.heart_disease,
            HealthCondition::HighCholesterol => self.high_cholesterol,
            HealthCondition::Obesity => self.obesity,
            HealthCondition::KidneyDisease => self.kidney_disease,
        }
    }

    /// Active condition names: the known six in label order, then any
    /// unrecognized flags in key order.
    pub fn active(&self) -> Vec<String> {
        let mut active: Vec<String> = HealthCondition::ALL
            .iter()
            .filter(|condition| self.is_set(**condition))
            .map(|condition| condition.key().to_string())
            .collect();
        active.extend(
            self.other
                .iter()
                .filter(|(_, set)| **set)
                .map(|(key, _)| key.clone()),
        );
        active
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthProfile {
    pub conditions: ConditionFlags,
}

/// Readiness snapshot of the serving process.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelHealthStatus {
    pub models_loaded: bool,
    pub family: Option<ModelFamily>,
    pub trained_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_keeps_label_order_for_known_conditions() {
        let flags = ConditionFlags {
            kidney_disease: true,
            diabetes: true,
            ..Default::default()
        };
        assert_eq!(flags.active(), vec!["diabetes", "kidneyDisease"]);
    }

    #[test]
    fn unknown_flags_are_reported_but_not_resolvable() {
        let mut flags = ConditionFlags {
            diabetes: true,
            ..Default::default()
        };
        flags.other.insert("gout".to_string(), true);
        flags.other.insert("anemia".to_string(), false);

        assert_eq!(flags.active(), vec!["diabetes", "gout"]);
        assert_eq!(HealthCondition::from_key("gout"), None);
    }

    #[test]
    fn condition_keys_round_trip() {
        for condition in HealthCondition::ALL {
            assert_eq!(HealthCondition::from_key(condition.key()), Some(condition));
        }
        assert_eq!(
            HealthCondition::from_key("heartDisease"),
            Some(HealthCondition::HeartDisease)
        );
    }
}
