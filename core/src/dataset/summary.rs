use super::record::ReadingRecord;
use crate::classifier::SiteStatus;
use crate::math::StatsHelper;
use serde::{Deserialize, Serialize};

/// Aggregate view of a generated dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub stable: usize,
    pub unstable: usize,
    pub dangerous: usize,
    pub mean_temp_c: f64,
    pub mean_ph: f64,
    pub mean_dissolved_oxygen: f64,
    pub max_change_factor: f64,
}

impl DatasetSummary {
    pub fn from_records(records: &[ReadingRecord]) -> Self {
        let count = |status: SiteStatus| {
            records
                .iter()
                .filter(|r| r.site_status() == status)
                .count()
        };
        let column = |f: fn(&ReadingRecord) -> f64| records.iter().map(f).collect::<Vec<_>>();

        let max_change_factor = StatsHelper::range(&column(|r| r.change_factor()))
            .map(|(_, hi)| hi)
            .unwrap_or(0.0);

        Self {
            records: records.len(),
            stable: count(SiteStatus::Stable),
            unstable: count(SiteStatus::Unstable),
            dangerous: count(SiteStatus::Dangerous),
            mean_temp_c: StatsHelper::mean(&column(|r| r.temp_c())),
            mean_ph: StatsHelper::mean(&column(|r| r.ph())),
            mean_dissolved_oxygen: StatsHelper::mean(&column(|r| r.dissolved_oxygen())),
            max_change_factor,
        }
    }

    pub fn count(&self, status: SiteStatus) -> usize {
        match status {
            SiteStatus::Stable => self.stable,
            SiteStatus::Unstable => self.unstable,
            SiteStatus::Dangerous => self.dangerous,
        }
    }
}
