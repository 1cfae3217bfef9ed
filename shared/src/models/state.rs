//! Latest analysis results for the current page session

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use super::{CropResult, PestResult, SoilResult};

/// Most recent result of each pipeline, absent until its first completed run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisState {
    pub crop: Option<CropResult>,
    pub pest: Option<PestResult>,
    pub soil: Option<SoilResult>,
}

/// Single-threaded store holding the [`AnalysisState`].
///
/// Each pipeline writes only its own field. Writes are last-write-wins: when
/// two runs of the same pipeline overlap, whichever finishes last is kept,
/// regardless of which was triggered first.
#[derive(Debug, Default)]
pub struct AnalysisStore {
    state: RefCell<AnalysisState>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_crop(&self, result: CropResult) {
        self.state.borrow_mut().crop = Some(result);
    }

    pub fn record_pest(&self, result: PestResult) {
        self.state.borrow_mut().pest = Some(result);
    }

    pub fn record_soil(&self, result: SoilResult) {
        self.state.borrow_mut().soil = Some(result);
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AnalysisState {
        self.state.borrow().clone()
    }

    pub fn latest_crop(&self) -> Option<CropResult> {
        self.state.borrow().crop.clone()
    }

    pub fn latest_pest(&self) -> Option<PestResult> {
        self.state.borrow().pest.clone()
    }

    pub fn latest_soil(&self) -> Option<SoilResult> {
        self.state.borrow().soil.clone()
    }
}
