use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TEMP_SAFE_RANGE: (f64, f64) = (18.0, 32.0);
pub const PH_SAFE_RANGE: (f64, f64) = (7.5, 8.6);
pub const OXYGEN_CRITICAL: f64 = 4.0;
pub const OXYGEN_LOW: f64 = 5.0;
pub const TURBIDITY_CRITICAL: f64 = 8.0;
pub const LIGHT_LOW: f64 = 80.0;
pub const CHANGE_FACTOR_HIGH: f64 = 4.0;

/// Number of triggered criteria needed to assign a label.
pub const TRIGGER_THRESHOLD: u8 = 2;

/// Risk label for a dive site, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SiteStatus {
    Stable,
    Unstable,
    Dangerous,
}

impl SiteStatus {
    pub const ALL: [SiteStatus; 3] = [
        SiteStatus::Stable,
        SiteStatus::Unstable,
        SiteStatus::Dangerous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Stable => "Stable",
            SiteStatus::Unstable => "Unstable",
            SiteStatus::Dangerous => "Dangerous",
        }
    }

    /// Output index of the inference model: 0 = Stable, 1 = Unstable, 2 = Dangerous.
    pub fn class_index(&self) -> usize {
        *self as usize
    }

    pub fn from_class_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown site status label '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for SiteStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// The six readings the rule set looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierInput {
    pub temp_c: f64,
    pub ph: f64,
    pub dissolved_oxygen: f64,
    pub turbidity: f64,
    pub light_intensity: f64,
    pub change_factor: f64,
}

/// Maps readings to a site status.
pub trait SiteClassifier {
    fn classify(&self, input: &ClassifierInput) -> SiteStatus;
}

/// Threshold rule set. Danger criteria take precedence over instability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn danger_score(input: &ClassifierInput) -> u8 {
        let temp_out = input.temp_c < TEMP_SAFE_RANGE.0 || input.temp_c > TEMP_SAFE_RANGE.1;
        let ph_out = input.ph < PH_SAFE_RANGE.0 || input.ph > PH_SAFE_RANGE.1;
        let hypoxic = input.dissolved_oxygen < OXYGEN_CRITICAL;
        let murky = input.turbidity > TURBIDITY_CRITICAL;
        [temp_out, ph_out, hypoxic, murky]
            .iter()
            .filter(|&&hit| hit)
            .count() as u8
    }

    pub fn instability_score(input: &ClassifierInput) -> u8 {
        let dark = input.light_intensity < LIGHT_LOW;
        let volatile = input.change_factor > CHANGE_FACTOR_HIGH;
        let low_oxygen = input.dissolved_oxygen < OXYGEN_LOW;
        [dark, volatile, low_oxygen]
            .iter()
            .filter(|&&hit| hit)
            .count() as u8
    }
}

impl SiteClassifier for RuleClassifier {
    fn classify(&self, input: &ClassifierInput) -> SiteStatus {
        if Self::danger_score(input) >= TRIGGER_THRESHOLD {
            SiteStatus::Dangerous
        } else if Self::instability_score(input) >= TRIGGER_THRESHOLD {
            SiteStatus::Unstable
        } else {
            SiteStatus::Stable
        }
    }
}

/// Classifies raw readings with the default rule set.
pub fn classify(
    temp_c: f64,
    ph: f64,
    dissolved_oxygen: f64,
    turbidity: f64,
    light_intensity: f64,
    change_factor: f64,
) -> SiteStatus {
    RuleClassifier.classify(&ClassifierInput {
        temp_c,
        ph,
        dissolved_oxygen,
        turbidity,
        light_intensity,
        change_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_danger_triggers_are_dangerous() {
        assert_eq!(classify(15.0, 9.0, 6.0, 1.0, 500.0, 1.0), SiteStatus::Dangerous);
    }

    #[test]
    fn two_instability_triggers_are_unstable() {
        assert_eq!(classify(25.0, 8.1, 6.0, 1.0, 50.0, 5.0), SiteStatus::Unstable);
    }

    #[test]
    fn no_triggers_is_stable() {
        assert_eq!(classify(25.0, 8.1, 6.0, 1.0, 500.0, 1.0), SiteStatus::Stable);
    }

    #[test]
    fn boundary_values_do_not_trigger() {
        assert_eq!(classify(18.0, 8.1, 6.0, 1.0, 500.0, 1.0), SiteStatus::Stable);
        assert_eq!(classify(32.0, 7.5, 6.0, 1.0, 500.0, 1.0), SiteStatus::Stable);
        assert_eq!(classify(25.0, 8.6, 4.0, 8.0, 80.0, 4.0), SiteStatus::Stable);
    }

    #[test]
    fn single_danger_falls_through_to_instability() {
        // oxygen 3.5 counts once for danger and once for instability; dim light adds a second.
        let input = ClassifierInput {
            temp_c: 25.0,
            ph: 8.1,
            dissolved_oxygen: 3.5,
            turbidity: 1.0,
            light_intensity: 60.0,
            change_factor: 0.5,
        };
        assert_eq!(RuleClassifier::danger_score(&input), 1);
        assert_eq!(RuleClassifier::instability_score(&input), 2);
        assert_eq!(RuleClassifier.classify(&input), SiteStatus::Unstable);
    }

    #[test]
    fn danger_takes_precedence() {
        let input = ClassifierInput {
            temp_c: 35.0,
            ph: 8.1,
            dissolved_oxygen: 3.0,
            turbidity: 9.0,
            light_intensity: 10.0,
            change_factor: 12.0,
        };
        assert_eq!(RuleClassifier::danger_score(&input), 3);
        assert_eq!(RuleClassifier::instability_score(&input), 3);
        assert_eq!(RuleClassifier.classify(&input), SiteStatus::Dangerous);
    }

    #[test]
    fn labels_parse_and_order_by_severity() {
        assert_eq!("Unstable".parse::<SiteStatus>().unwrap(), SiteStatus::Unstable);
        assert!("stable".parse::<SiteStatus>().is_err());
        assert!(SiteStatus::Stable < SiteStatus::Unstable);
        assert!(SiteStatus::Unstable < SiteStatus::Dangerous);
        assert_eq!(SiteStatus::from_class_index(2), Some(SiteStatus::Dangerous));
        assert_eq!(SiteStatus::from_class_index(3), None);
        assert_eq!(SiteStatus::Unstable.class_index(), 1);
    }
}
