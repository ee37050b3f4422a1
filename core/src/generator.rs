use crate::classifier::{ClassifierInput, RuleClassifier, SiteClassifier};
use crate::dataset::{ReadingRecord, RecordAssembler};
use crate::environment::{NoiseInjector, SeasonalProfile};
use crate::prelude::{GenerationResult, GeneratorConfig, MONTHS_PER_YEAR};
use crate::sampling::{sample_depth, sample_instant, CoordinateSampler, GeoPoint};
use crate::state::RunningState;
use crate::telemetry::{LogManager, MetricsRecorder};
use rand::{rngs::StdRng, SeedableRng};

/// Sequential dataset generator.
///
/// Owns the random source and the running state. Every record's change
/// factor is measured against the record generated immediately before it,
/// so samples must be drawn one at a time in month order.
pub struct DatasetGenerator<C: SiteClassifier = RuleClassifier> {
    config: GeneratorConfig,
    rng: StdRng,
    sampler: CoordinateSampler,
    state: RunningState,
    classifier: C,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> GenerationResult<Self> {
        Self::with_classifier(config, RuleClassifier)
    }
}

impl<C: SiteClassifier> DatasetGenerator<C> {
    pub fn with_classifier(config: GeneratorConfig, classifier: C) -> GenerationResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sampler = CoordinateSampler::new(
            GeoPoint {
                latitude: config.base_latitude,
                longitude: config.base_longitude,
            },
            config.max_offset,
        );

        Ok(Self {
            config,
            rng,
            sampler,
            state: RunningState::default(),
            classifier,
            metrics: MetricsRecorder::new(),
            logger: LogManager::new("generator"),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Reading the next record will be diffed against.
    pub fn state(&self) -> RunningState {
        self.state
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Draws, labels and returns one record for `month`, then advances the running state.
    pub fn generate_sample(&mut self, month: u32) -> GenerationResult<ReadingRecord> {
        let timestamp = sample_instant(&mut self.rng, self.config.year, month)?;
        let profile = SeasonalProfile::for_month(month)?;
        let position = self.sampler.sample(&mut self.rng);
        let depth_m = sample_depth(&mut self.rng);

        let bases = profile.bases(depth_m);
        let measurements = NoiseInjector::apply(&mut self.rng, &bases, depth_m).rounded();

        // Unrounded; the assembler rounds it for output.
        let change_factor = self.state.change_factor(
            measurements.temp_c,
            measurements.ph,
            measurements.dissolved_oxygen,
        );
        let site_status = self.classifier.classify(&ClassifierInput {
            temp_c: measurements.temp_c,
            ph: measurements.ph,
            dissolved_oxygen: measurements.dissolved_oxygen,
            turbidity: measurements.turbidity,
            light_intensity: measurements.light_intensity,
            change_factor,
        });

        let record = RecordAssembler::assemble(
            timestamp,
            position,
            depth_m,
            &measurements,
            change_factor,
            site_status,
        );
        self.state.record(record.temp_c(), record.ph(), record.dissolved_oxygen());
        self.metrics.record_status(site_status);
        Ok(record)
    }

    pub fn generate_month(
        &mut self,
        month: u32,
        count: usize,
    ) -> GenerationResult<Vec<ReadingRecord>> {
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.generate_sample(month)?);
        }
        Ok(records)
    }

    /// Generates the full year: `total_samples / 12` records per month, months 1 to 12.
    pub fn generate(&mut self) -> GenerationResult<Vec<ReadingRecord>> {
        let per_month = self.config.samples_per_month();
        let dropped = self.config.dropped_remainder();
        if dropped > 0 {
            self.logger.warn(&format!(
                "{} requested samples do not divide across {} months; dropping {}",
                self.config.total_samples, MONTHS_PER_YEAR, dropped
            ));
        }

        let mut records = Vec::with_capacity(self.config.expected_records());
        for month in 1..=MONTHS_PER_YEAR as u32 {
            let batch = self.generate_month(month, per_month)?;
            records.extend(batch);
            let counts = self.metrics.snapshot();
            self.logger.record(&format!(
                "month {:>2} done: {} records (stable {}, unstable {}, dangerous {})",
                month,
                counts.total(),
                counts.stable,
                counts.unstable,
                counts.dangerous
            ));
        }
        Ok(records)
    }
}

/// Generates a complete dataset with the default rule classifier.
pub fn generate_dataset(config: GeneratorConfig) -> GenerationResult<Vec<ReadingRecord>> {
    DatasetGenerator::new(config)?.generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::SiteStatus;
    use crate::environment::noise::LIGHT_FLOOR;
    use crate::math::RoundHelper;
    use crate::prelude::GenerationError;

    fn seeded(total_samples: usize, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            total_samples,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn record_count_truncates_remainder() {
        let records = generate_dataset(seeded(100, 1)).unwrap();
        assert_eq!(records.len(), (100 / 12) * 12);

        let tiny = generate_dataset(seeded(11, 1)).unwrap();
        assert!(tiny.is_empty());
    }

    #[test]
    fn zero_samples_is_a_configuration_error() {
        assert!(matches!(
            DatasetGenerator::new(seeded(0, 1)),
            Err(GenerationError::EmptySampleCount)
        ));
    }

    #[test]
    fn records_are_grouped_by_month_in_generation_order() {
        let records = generate_dataset(seeded(120, 9)).unwrap();
        for (index, chunk) in records.chunks(10).enumerate() {
            for record in chunk {
                assert_eq!(record.month(), index as u32 + 1);
                assert_eq!(record.timestamp().format("%Y").to_string(), "2024");
            }
        }
    }

    #[test]
    fn generated_values_respect_physical_bounds() {
        let records = generate_dataset(seeded(2_400, 77)).unwrap();
        for record in &records {
            assert!(record.turbidity() >= 0.0);
            assert!(record.light_intensity() >= LIGHT_FLOOR);
            assert!((2.0..=40.0).contains(&record.depth_m()));
            assert!((400.0..=500.0).contains(&record.co2_ppm()));
            assert!((36.0..=38.0).contains(&record.salinity()));
            assert!((record.latitude() - 31.31).abs() <= 0.0100005);
            assert!((record.longitude() - 29.90).abs() <= 0.0100005);
        }
    }

    #[test]
    fn labels_are_reproducible_from_written_fields() {
        // Written readings are exactly what the state chain saw, so replaying
        // the chain recovers the unrounded change each label was drawn from.
        let records = generate_dataset(seeded(1_200, 5)).unwrap();
        let mut state = RunningState::default();
        for record in &records {
            let change =
                state.change_factor(record.temp_c(), record.ph(), record.dissolved_oxygen());
            let input = ClassifierInput {
                change_factor: change,
                ..record.classifier_input()
            };
            assert_eq!(RuleClassifier.classify(&input), record.site_status());
            state.record(record.temp_c(), record.ph(), record.dissolved_oxygen());
        }
    }

    #[test]
    fn change_factor_chains_through_generation_order() {
        let mut generator = DatasetGenerator::new(seeded(120, 21)).unwrap();
        let mut expected = RunningState::default();
        for record in generator.generate().unwrap() {
            let (temp, ph, oxygen) = (record.temp_c(), record.ph(), record.dissolved_oxygen());
            let change = expected.change_factor(temp, ph, oxygen);
            assert_eq!(record.change_factor(), RoundHelper::to_places(change, 2));
            expected.record(temp, ph, oxygen);
        }
        assert_eq!(generator.state(), expected);
    }

    #[test]
    fn first_record_of_month_diffs_against_previous_month() {
        let mut generator = DatasetGenerator::new(seeded(120, 33)).unwrap();
        let january = generator.generate_month(1, 10).unwrap();
        let last = january.last().unwrap();
        let carried = generator.state();
        assert_eq!(carried.previous_temp, last.temp_c());
        assert_eq!(carried.previous_ph, last.ph());
        assert_eq!(carried.previous_oxygen, last.dissolved_oxygen());

        let february = generator.generate_sample(2).unwrap();
        let change = carried.change_factor(
            february.temp_c(),
            february.ph(),
            february.dissolved_oxygen(),
        );
        assert_eq!(february.change_factor(), RoundHelper::to_places(change, 2));
    }

    #[test]
    fn oversized_offset_is_rejected_before_sampling() {
        let cfg = GeneratorConfig {
            max_offset: 1e308,
            ..seeded(12, 1)
        };
        assert!(matches!(
            generate_dataset(cfg),
            Err(GenerationError::InvalidOffset(_))
        ));
    }

    #[test]
    fn same_seed_yields_same_dataset() {
        let a = generate_dataset(seeded(240, 1234)).unwrap();
        let b = generate_dataset(seeded(240, 1234)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn metrics_track_generated_labels() {
        let mut generator = DatasetGenerator::new(seeded(600, 8)).unwrap();
        let records = generator.generate().unwrap();
        let counts = generator.metrics().snapshot();
        assert_eq!(counts.total(), records.len());
        let dangerous = records
            .iter()
            .filter(|r| r.site_status() == SiteStatus::Dangerous)
            .count();
        assert_eq!(counts.dangerous, dangerous);
    }

    #[test]
    fn custom_classifier_is_used() {
        struct AlwaysDangerous;
        impl SiteClassifier for AlwaysDangerous {
            fn classify(&self, _input: &ClassifierInput) -> SiteStatus {
                SiteStatus::Dangerous
            }
        }

        let mut generator =
            DatasetGenerator::with_classifier(seeded(24, 2), AlwaysDangerous).unwrap();
        let records = generator.generate().unwrap();
        assert_eq!(records.len(), 24);
        assert!(records.iter().all(|r| r.site_status() == SiteStatus::Dangerous));
    }

    #[test]
    fn invalid_month_fails_without_touching_state() {
        let mut generator = DatasetGenerator::new(seeded(12, 4)).unwrap();
        assert!(matches!(
            generator.generate_sample(13),
            Err(GenerationError::InvalidMonth(13))
        ));
        assert_eq!(generator.state(), RunningState::default());
    }
}
