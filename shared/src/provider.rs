//! Analysis providers
//!
//! The pipelines talk to an [`AnalysisProvider`] and never to a concrete
//! classifier, so an external inference service can replace the mock without
//! touching rendering. The mock draws its results from a seeded RNG after an
//! artificial delay.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::PipelineDelays;
use crate::error::AnalysisResult;
use crate::models::{
    score_soil, CropLabel, CropResult, PestDetection, PestResult, SoilInput, SoilResult,
    DEFAULT_CROP_NOTE, PEST_CATALOG,
};
use crate::types::{ImageUpload, PipelineKind};
use crate::validation::{validate_soil_input, SoilBounds};

/// Timer used for the artificial compute delay
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Resolves immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Request/response contract of the analysis backends
#[allow(async_fn_in_trait)]
pub trait AnalysisProvider {
    /// Submit an image, receive a crop health classification
    async fn classify_crop(&self, image: &ImageUpload) -> AnalysisResult<CropResult>;

    /// Submit an image, receive the detected pests
    async fn detect_pests(&self, image: &ImageUpload) -> AnalysisResult<PestResult>;

    /// Submit slider readings, receive a soil condition score
    async fn assess_soil(&self, input: &SoilInput) -> AnalysisResult<SoilResult>;
}

/// Local stand-in for the inference services
pub struct MockAnalysisProvider<D> {
    delay: D,
    delays: PipelineDelays,
    bounds: SoilBounds,
    rng: RefCell<StdRng>,
}

impl<D: Delay> MockAnalysisProvider<D> {
    pub fn new(delay: D, delays: PipelineDelays, seed: u64) -> Self {
        Self {
            delay,
            delays,
            bounds: SoilBounds::default(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Use the bounds of the sliders on the page
    pub fn with_bounds(mut self, bounds: SoilBounds) -> Self {
        self.bounds = bounds;
        self
    }

    async fn simulate_latency(&self, kind: PipelineKind) {
        self.delay.wait(self.delays.for_pipeline(kind)).await;
    }
}

impl<D: Delay> AnalysisProvider for MockAnalysisProvider<D> {
    async fn classify_crop(&self, image: &ImageUpload) -> AnalysisResult<CropResult> {
        self.simulate_latency(PipelineKind::Crop).await;
        let result = mock_crop_result(&mut *self.rng.borrow_mut());
        tracing::debug!(file = %image.file_name, label = %result.label, "Mock crop classification");
        Ok(result)
    }

    async fn detect_pests(&self, image: &ImageUpload) -> AnalysisResult<PestResult> {
        self.simulate_latency(PipelineKind::Pest).await;
        let result = mock_pest_result(&mut *self.rng.borrow_mut());
        tracing::debug!(
            file = %image.file_name,
            detections = result.detections.len(),
            "Mock pest detection"
        );
        Ok(result)
    }

    async fn assess_soil(&self, input: &SoilInput) -> AnalysisResult<SoilResult> {
        self.simulate_latency(PipelineKind::Soil).await;
        validate_soil_input(input, &self.bounds)?;
        Ok(score_soil(input))
    }
}

/// Label uniform over both classes, confidence uniform in `[0.85, 0.99)`
pub fn mock_crop_result<R: Rng + ?Sized>(rng: &mut R) -> CropResult {
    let label = if rng.gen_bool(0.5) {
        CropLabel::Healthy
    } else {
        CropLabel::Diseased
    };
    CropResult::new(label, rng.gen_range(0.85..0.99), DEFAULT_CROP_NOTE)
}

/// One to three detections, each a catalog species with confidence in `[0.6, 1.0)`
pub fn mock_pest_result<R: Rng + ?Sized>(rng: &mut R) -> PestResult {
    let count = rng.gen_range(1..=3);
    let detections = (0..count)
        .map(|_| {
            let species = &PEST_CATALOG[rng.gen_range(0..PEST_CATALOG.len())];
            PestDetection::from_species(species, rng.gen_range(0.6..1.0))
        })
        .collect();
    PestResult::new(detections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::models::Nutrient;
    use crate::validation::SliderBounds;

    fn provider(seed: u64) -> MockAnalysisProvider<NoDelay> {
        MockAnalysisProvider::new(NoDelay, PipelineDelays::none(), seed)
    }

    #[test]
    fn test_crop_results_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let result = mock_crop_result(&mut rng);
            assert!((0.85..0.99).contains(&result.confidence));
            assert_eq!(result.note, DEFAULT_CROP_NOTE);
        }
    }

    #[test]
    fn test_pest_results_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_counts = [false; 4];
        for _ in 0..500 {
            let result = mock_pest_result(&mut rng);
            let count = result.detections.len();
            assert!((1..=3).contains(&count));
            seen_counts[count] = true;
            for detection in &result.detections {
                assert!((0.6..1.0).contains(&detection.confidence));
                assert!(PEST_CATALOG.iter().any(|s| s.name == detection.species));
            }
        }
        assert_eq!(seen_counts, [false, true, true, true]);
    }

    #[test]
    fn test_same_seed_same_results() {
        let image = ImageUpload::new("leaf.png", 2048, None);
        let a = tokio_test::block_on(provider(42).classify_crop(&image)).unwrap();
        let b = tokio_test::block_on(provider(42).classify_crop(&image)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_soil_rejects_out_of_bounds_reading() {
        let err = tokio_test::block_on(provider(1).assess_soil(&SoilInput::new(10.0, 10.0, 10.0, 140.0)))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::OutOfBounds { .. }));
    }

    #[test]
    fn test_soil_uses_page_slider_bounds() {
        let mut bounds = SoilBounds::default();
        bounds.set(Nutrient::Moisture, SliderBounds::new(0.0, 40.0));
        let provider = provider(1).with_bounds(bounds);

        let over = SoilInput::new(45.0, 10.0, 10.0, 10.0);
        let err = tokio_test::block_on(provider.assess_soil(&over)).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::OutOfBounds {
                nutrient: Nutrient::Moisture,
                value: 45.0,
                min: 0.0,
                max: 40.0
            }
        );
        let at_limit = SoilInput::new(40.0, 10.0, 10.0, 10.0);
        assert!(tokio_test::block_on(provider.assess_soil(&at_limit)).is_ok());
    }
}
