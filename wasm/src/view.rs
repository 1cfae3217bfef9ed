//! Renders pipeline results into the page

use std::rc::Rc;

use shared::{
    CropResult, Nutrient, PestResult, PipelineKind, PipelineView, SoilResult, UiConfig,
};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::dom::Elements;
use crate::effects::{hide_element, show_element};
use crate::timer;

/// One rendered row of the pest list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PestEntry {
    pub icon_class: String,
    pub title: String,
    pub subtitle: String,
    /// The reassuring "nothing found" row
    pub all_clear: bool,
}

/// Rows for a pest result, in detector order. An empty result gets a single notice row.
pub fn pest_entries(result: &PestResult) -> Vec<PestEntry> {
    if result.is_clear() {
        return vec![PestEntry {
            icon_class: "fas fa-check-circle".to_string(),
            title: "No Pests Detected".to_string(),
            subtitle: "Your crops look healthy!".to_string(),
            all_clear: true,
        }];
    }

    result
        .detections
        .iter()
        .map(|detection| PestEntry {
            icon_class: detection.icon().to_string(),
            title: detection.species.clone(),
            subtitle: format!("{}% confidence", detection.confidence_percent()),
            all_clear: false,
        })
        .collect()
}

/// `--score-angle` value for the overall score circle
pub fn score_angle(result: &SoilResult) -> String {
    format!("{}deg", result.score_angle_degrees())
}

/// [`PipelineView`] backed by the page's DOM
pub struct DomView {
    elements: Rc<Elements>,
    ui: UiConfig,
}

impl DomView {
    pub fn new(elements: Rc<Elements>, ui: UiConfig) -> Self {
        Self { elements, ui }
    }

    fn reveal(&self, element: &HtmlElement, animation: &'static str) {
        show_element(element, Some(animation), self.ui.animation_ms);
    }
}

impl PipelineView for DomView {
    fn show_busy(&self, kind: PipelineKind) {
        self.reveal(self.elements.loading(kind), "fade-in");
    }

    fn hide_busy(&self, kind: PipelineKind) {
        hide_element(self.elements.loading(kind));
    }

    fn clear_result(&self, kind: PipelineKind) {
        hide_element(self.elements.result_region(kind));
    }

    fn render_crop(&self, result: &CropResult) {
        let crop = &self.elements.crop;
        let label = result.label.to_string();
        let style = result.label.css_class();

        crop.class.set_text_content(Some(&label));
        crop.confidence
            .set_text_content(Some(&format!("{}%", result.confidence_percent())));
        crop.details.set_text_content(Some(result.display_note()));

        crop.status.set_text_content(Some(&label));
        crop.status.set_class_name(&format!("status-indicator {}", style));
        crop.result_card.set_class_name(&format!("result-card {}", style));

        self.reveal(&crop.result, "slide-up");
    }

    fn render_pest(&self, result: &PestResult) {
        let pest = &self.elements.pest;
        pest.count.set_text_content(Some(&result.count_label()));
        pest.results.set_inner_html("");

        for entry in pest_entries(result) {
            if let Err(err) = append_pest_entry(&self.elements.document, &pest.results, &entry) {
                tracing::warn!(?err, species = %entry.title, "Could not render detection");
            }
        }

        self.reveal(&pest.results, "fade-in");
    }

    fn render_soil(&self, result: &SoilResult) {
        let soil = &self.elements.soil;
        soil.grade.set_text_content(Some(&result.condition.to_string()));
        soil.grade
            .set_class_name(&format!("soil-grade {}", result.condition.css_class()));

        if let Err(err) = soil
            .overall_circle
            .style()
            .set_property("--score-angle", &score_angle(result))
        {
            tracing::warn!(?err, "Could not set score angle");
        }
        soil.overall_score
            .set_text_content(Some(&result.overall_score.to_string()));

        for controls in &soil.sliders {
            let value = format!("{}%", result.nutrient_scores.get(controls.nutrient));
            let progress = controls.progress.clone();
            let score = controls.score.clone();
            let nutrient: Nutrient = controls.nutrient;
            timer::after(self.ui.progress_fill_ms, move || {
                if let Err(err) = progress.style().set_property("width", &value) {
                    tracing::warn!(?err, %nutrient, "Could not fill progress bar");
                }
                score.set_text_content(Some(&value));
            });
        }

        self.reveal(&soil.results, "slide-up");
    }

    fn show_error(&self, kind: PipelineKind, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(&format!("{} error: {}", kind, message)));
    }
}

fn append_pest_entry(
    document: &Document,
    container: &HtmlElement,
    entry: &PestEntry,
) -> Result<(), JsValue> {
    let item = document.create_element("div")?;
    item.set_class_name("detection-item");

    let icon = document.create_element("i")?;
    icon.set_class_name(&entry.icon_class);
    if entry.all_clear {
        icon.set_attribute("style", "color: var(--primary-green);")?;
    }

    let title = document.create_element("h4")?;
    title.set_text_content(Some(&entry.title));

    let subtitle = document.create_element("p")?;
    subtitle.set_class_name("confidence");
    subtitle.set_text_content(Some(&entry.subtitle));

    item.append_child(&icon)?;
    item.append_child(&title)?;
    item.append_child(&subtitle)?;
    container.append_child(&item)?;
    Ok(())
}
