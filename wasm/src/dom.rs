//! Page controls, resolved once at startup
//!
//! Every control the pipelines touch is looked up before any listener is
//! attached, so a page missing one fails immediately with the control's
//! selector instead of breaking on first use.

use shared::{Nutrient, PipelineKind, SliderBounds, SoilBounds, SoilInput};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::error::{UiError, UiResult};

/// Upload zone and the file input behind it
#[derive(Clone)]
pub struct UploadControls {
    pub zone: HtmlElement,
    pub input: HtmlInputElement,
}

/// One soil slider with its value label and result bar
#[derive(Clone)]
pub struct SliderControls {
    pub nutrient: Nutrient,
    pub slider: HtmlInputElement,
    pub value_label: HtmlElement,
    pub progress: HtmlElement,
    pub score: HtmlElement,
}

impl SliderControls {
    /// Bounds from the slider's `min`/`max`, falling back to the range input defaults
    pub fn bounds(&self) -> SliderBounds {
        let defaults = SliderBounds::default();
        SliderBounds::new(
            self.slider.min().parse().unwrap_or(defaults.min),
            self.slider.max().parse().unwrap_or(defaults.max),
        )
    }

    /// Current reading; an unparsable value reads as NaN and fails validation
    pub fn reading(&self) -> f64 {
        self.slider.value().trim().parse().unwrap_or(f64::NAN)
    }
}

/// Crop health card
#[derive(Clone)]
pub struct CropControls {
    pub upload: UploadControls,
    pub result: HtmlElement,
    pub result_card: HtmlElement,
    pub loading: HtmlElement,
    pub status: HtmlElement,
    pub class: HtmlElement,
    pub confidence: HtmlElement,
    pub details: HtmlElement,
}

/// Pest detection card
#[derive(Clone)]
pub struct PestControls {
    pub upload: UploadControls,
    pub results: HtmlElement,
    pub loading: HtmlElement,
    pub count: HtmlElement,
}

/// Soil condition card
#[derive(Clone)]
pub struct SoilControls {
    pub sliders: Vec<SliderControls>,
    pub analyze: HtmlElement,
    pub results: HtmlElement,
    pub loading: HtmlElement,
    pub grade: HtmlElement,
    pub overall_circle: HtmlElement,
    pub overall_score: HtmlElement,
}

impl SoilControls {
    pub fn input(&self) -> SoilInput {
        let reading = |nutrient: Nutrient| {
            self.sliders
                .iter()
                .find(|s| s.nutrient == nutrient)
                .map(SliderControls::reading)
                .unwrap_or(f64::NAN)
        };
        SoilInput::new(
            reading(Nutrient::Moisture),
            reading(Nutrient::Nitrogen),
            reading(Nutrient::Phosphorus),
            reading(Nutrient::Potassium),
        )
    }

    pub fn bounds(&self) -> SoilBounds {
        let mut bounds = SoilBounds::default();
        for slider in &self.sliders {
            bounds.set(slider.nutrient, slider.bounds());
        }
        bounds
    }
}

/// Navigation chrome
#[derive(Clone)]
pub struct NavControls {
    pub navbar: HtmlElement,
    pub sidebar: HtmlElement,
    pub sidebar_toggle: HtmlElement,
    pub close_sidebar: HtmlElement,
}

/// All controls the page must provide
#[derive(Clone)]
pub struct Elements {
    pub document: Document,
    pub crop: CropControls,
    pub pest: PestControls,
    pub soil: SoilControls,
    pub nav: NavControls,
}

impl Elements {
    pub fn resolve(document: &Document) -> UiResult<Self> {
        let crop_result: HtmlElement = by_id(document, "crop-result")?;
        let crop = CropControls {
            upload: UploadControls {
                zone: by_id(document, "crop-upload")?,
                input: by_id(document, "crop-file")?,
            },
            result_card: query_within(&crop_result, ".result-card")?,
            result: crop_result,
            loading: by_id(document, &PipelineKind::Crop.loading_id())?,
            status: by_id(document, "crop-status")?,
            class: by_id(document, "crop-class")?,
            confidence: by_id(document, "crop-confidence")?,
            details: by_id(document, "crop-details")?,
        };

        let pest = PestControls {
            upload: UploadControls {
                zone: by_id(document, "pest-upload")?,
                input: by_id(document, "pest-file")?,
            },
            results: by_id(document, "pest-results")?,
            loading: by_id(document, &PipelineKind::Pest.loading_id())?,
            count: by_id(document, "pest-count")?,
        };

        let sliders = Nutrient::ALL
            .into_iter()
            .map(|nutrient| -> UiResult<SliderControls> {
                let id = nutrient.id();
                Ok(SliderControls {
                    nutrient,
                    slider: by_id(document, id)?,
                    value_label: by_id(document, &format!("{}-value", id))?,
                    progress: by_id(document, &format!("{}-progress", id))?,
                    score: by_id(document, &format!("{}-score", id))?,
                })
            })
            .collect::<UiResult<Vec<_>>>()?;

        let soil = SoilControls {
            sliders,
            analyze: by_id(document, "analyze-soil")?,
            results: by_id(document, "soil-results")?,
            loading: by_id(document, &PipelineKind::Soil.loading_id())?,
            grade: by_id(document, "soil-grade")?,
            overall_circle: by_id(document, "overall-circle")?,
            overall_score: by_id(document, "overall-score")?,
        };

        let nav = NavControls {
            navbar: query_document(document, ".navbar")?,
            sidebar: by_id(document, "sidebar")?,
            sidebar_toggle: by_id(document, "sidebar-toggle")?,
            close_sidebar: by_id(document, "close-sidebar")?,
        };

        Ok(Self {
            document: document.clone(),
            crop,
            pest,
            soil,
            nav,
        })
    }

    pub fn loading(&self, kind: PipelineKind) -> &HtmlElement {
        match kind {
            PipelineKind::Crop => &self.crop.loading,
            PipelineKind::Pest => &self.pest.loading,
            PipelineKind::Soil => &self.soil.loading,
        }
    }

    pub fn result_region(&self, kind: PipelineKind) -> &HtmlElement {
        match kind {
            PipelineKind::Crop => &self.crop.result,
            PipelineKind::Pest => &self.pest.results,
            PipelineKind::Soil => &self.soil.results,
        }
    }
}

/// Look up an element by id and check its type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> UiResult<T> {
    let selector = format!("#{}", id);
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement {
            selector: selector.clone(),
        })?;
    cast(element, selector)
}

/// First element in the document matching `selector`
pub fn query_document<T: JsCast>(document: &Document, selector: &str) -> UiResult<T> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| UiError::MissingElement {
            selector: selector.to_string(),
        })?;
    cast(element, selector.to_string())
}

/// First descendant of `parent` matching `selector`
pub fn query_within<T: JsCast>(parent: &Element, selector: &str) -> UiResult<T> {
    let element = parent
        .query_selector(selector)?
        .ok_or_else(|| UiError::MissingElement {
            selector: selector.to_string(),
        })?;
    cast(element, selector.to_string())
}

/// Every element in the document matching `selector`
pub fn query_all(document: &Document, selector: &str) -> UiResult<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn cast<T: JsCast>(element: Element, selector: String) -> UiResult<T> {
    element
        .dyn_into::<T>()
        .map_err(|_| UiError::WrongElementType {
            selector,
            expected: std::any::type_name::<T>(),
        })
}
