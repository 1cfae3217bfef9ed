//! Capture → compute → render pipelines
//!
//! Every run shows its busy indicator, hides the previous result, awaits the
//! provider once, then renders either the result or a generic failure notice.
//! The indicator is hidden exactly once when the run ends, whatever the outcome.
//!
//! Runs are never cancelled or serialized. If a pipeline is re-triggered while
//! an earlier run is still waiting, both complete and the one that finishes
//! last owns the display and the stored state.

use std::future::Future;

use crate::error::AnalysisResult;
use crate::models::{AnalysisStore, CropResult, PestResult, SoilInput, SoilResult};
use crate::provider::AnalysisProvider;
use crate::types::{ImageUpload, PipelineKind};

/// Display surface the pipelines render into
pub trait PipelineView {
    fn show_busy(&self, kind: PipelineKind);
    fn hide_busy(&self, kind: PipelineKind);

    /// Hide whatever the previous run rendered
    fn clear_result(&self, kind: PipelineKind);

    fn render_crop(&self, result: &CropResult);
    fn render_pest(&self, result: &PestResult);
    fn render_soil(&self, result: &SoilResult);

    fn show_error(&self, kind: PipelineKind, message: &str);
}

/// Shows the busy indicator on creation and hides it on drop
struct BusyIndicator<'a, V: PipelineView> {
    view: &'a V,
    kind: PipelineKind,
}

impl<'a, V: PipelineView> BusyIndicator<'a, V> {
    fn show(view: &'a V, kind: PipelineKind) -> Self {
        view.show_busy(kind);
        Self { view, kind }
    }
}

impl<V: PipelineView> Drop for BusyIndicator<'_, V> {
    fn drop(&mut self) {
        self.view.hide_busy(self.kind);
    }
}

/// Runs the three pipelines against one provider, view and store
pub struct PipelineRunner<P, V> {
    provider: P,
    view: V,
    store: AnalysisStore,
}

impl<P: AnalysisProvider, V: PipelineView> PipelineRunner<P, V> {
    pub fn new(provider: P, view: V) -> Self {
        Self {
            provider,
            view,
            store: AnalysisStore::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &AnalysisStore {
        &self.store
    }

    /// Classify the selected image. Without a file the run is skipped.
    pub async fn run_crop(&self, upload: Option<ImageUpload>) -> Option<CropResult> {
        let image = upload?;
        self.run(
            PipelineKind::Crop,
            self.provider.classify_crop(&image),
            |result| {
                self.view.render_crop(result);
                self.store.record_crop(result.clone());
            },
        )
        .await
    }

    /// Detect pests in the selected image. Without a file the run is skipped.
    pub async fn run_pest(&self, upload: Option<ImageUpload>) -> Option<PestResult> {
        let image = upload?;
        self.run(
            PipelineKind::Pest,
            self.provider.detect_pests(&image),
            |result| {
                self.view.render_pest(result);
                self.store.record_pest(result.clone());
            },
        )
        .await
    }

    /// Score the current slider readings
    pub async fn run_soil(&self, input: SoilInput) -> Option<SoilResult> {
        self.run(
            PipelineKind::Soil,
            self.provider.assess_soil(&input),
            |result| {
                self.view.render_soil(result);
                self.store.record_soil(result.clone());
            },
        )
        .await
    }

    async fn run<T, F>(&self, kind: PipelineKind, compute: F, complete: impl FnOnce(&T)) -> Option<T>
    where
        F: Future<Output = AnalysisResult<T>>,
    {
        let _busy = BusyIndicator::show(&self.view, kind);
        self.view.clear_result(kind);
        tracing::info!(pipeline = %kind, "Analysis started");

        match compute.await {
            Ok(result) => {
                complete(&result);
                tracing::info!(pipeline = %kind, "Analysis completed");
                Some(result)
            }
            Err(err) => {
                tracing::error!(pipeline = %kind, error = %err, "Analysis failed");
                self.view.show_error(kind, kind.failure_notice());
                None
            }
        }
    }
}
