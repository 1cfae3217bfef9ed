//! Page startup: resolves controls, builds the pipeline runner and attaches listeners

use std::cell::RefCell;
use std::rc::Rc;

use shared::{AnalysisState, AssistantConfig, ImageUpload, MockAnalysisProvider, PipelineRunner};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::dom::Elements;
use crate::effects::{
    bind_nav_links, bind_navbar, bind_scroll_reveal, bind_sidebar, bind_sliders, listen,
};
use crate::error::{UiError, UiResult};
use crate::timer::TimerDelay;
use crate::upload::bind_upload;
use crate::view::DomView;

/// Id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "agri-config";

pub type AppRunner = PipelineRunner<MockAnalysisProvider<TimerDelay>, DomView>;

thread_local! {
    static APP: RefCell<Option<Rc<AppRunner>>> = const { RefCell::new(None) };
}

/// Start now, or once the document has finished parsing
pub fn start_when_ready() -> UiResult<()> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return start(&document);
    }

    let ready = document.clone();
    listen(&document, "DOMContentLoaded", move |_| {
        if let Err(err) = start(&ready) {
            tracing::error!(%err, "Agriculture assistant failed to start");
        }
    })
}

fn start(document: &Document) -> UiResult<()> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let config = AssistantConfig::load(config_overrides(document).as_deref())?;
    let elements = Rc::new(Elements::resolve(document)?);

    let provider = MockAnalysisProvider::new(TimerDelay, config.delays.clone(), browser_seed())
        .with_bounds(elements.soil.bounds());
    let view = DomView::new(elements.clone(), config.ui.clone());
    let runner = Rc::new(PipelineRunner::new(provider, view));

    {
        let runner = runner.clone();
        bind_upload(
            &elements.crop.upload,
            Rc::new(move |upload: Option<ImageUpload>| {
                let runner = runner.clone();
                spawn_local(async move {
                    runner.run_crop(upload).await;
                });
            }),
        )?;
    }

    {
        let runner = runner.clone();
        bind_upload(
            &elements.pest.upload,
            Rc::new(move |upload: Option<ImageUpload>| {
                let runner = runner.clone();
                spawn_local(async move {
                    runner.run_pest(upload).await;
                });
            }),
        )?;
    }

    {
        let runner = runner.clone();
        let soil = elements.soil.clone();
        listen(&elements.soil.analyze, "click", move |_| {
            let runner = runner.clone();
            let input = soil.input();
            spawn_local(async move {
                runner.run_soil(input).await;
            });
        })?;
    }

    bind_sliders(&elements.soil.sliders)?;
    bind_nav_links(document)?;
    bind_scroll_reveal(document, &config.ui)?;
    bind_navbar(&window, &elements.nav.navbar, &config.ui)?;
    bind_sidebar(&elements.nav)?;

    APP.with(|app| *app.borrow_mut() = Some(runner));
    tracing::info!("Agriculture assistant ready");
    Ok(())
}

/// Latest results, or `None` before startup
pub fn latest_analysis() -> Option<AnalysisState> {
    APP.with(|app| app.borrow().as_ref().map(|runner| runner.store().snapshot()))
}

pub fn document() -> UiResult<Document> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

fn config_overrides(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}

fn browser_seed() -> u64 {
    let entropy = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    entropy ^ (js_sys::Date::now() as u64).rotate_left(32)
}
