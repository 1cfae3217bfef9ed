//! File pick and drag-and-drop wiring for the upload zones

use std::rc::Rc;

use shared::ImageUpload;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};

use crate::dom::UploadControls;
use crate::effects::{forward_click, listen};
use crate::error::UiResult;

const DRAGOVER_CLASS: &str = "dragover";

/// Metadata of the first selected file. Extra files are ignored, like a
/// single-file input.
pub fn first_upload(input: &HtmlInputElement) -> Option<ImageUpload> {
    let file = input.files()?.get(0)?;
    Some(ImageUpload::new(
        file.name(),
        file.size().max(0.0) as u64,
        Some(file.type_()),
    ))
}

/// Route manual picks and drops on `controls` to `on_file`
pub fn bind_upload(
    controls: &UploadControls,
    on_file: Rc<dyn Fn(Option<ImageUpload>)>,
) -> UiResult<()> {
    forward_click(&controls.zone, &controls.input)?;

    {
        let input = controls.input.clone();
        let on_file = on_file.clone();
        listen(&controls.input, "change", move |_| on_file(first_upload(&input)))?;
    }

    {
        let zone = controls.zone.clone();
        listen(&controls.zone, "dragover", move |event| {
            event.prevent_default();
            let _ = zone.class_list().add_1(DRAGOVER_CLASS);
        })?;
    }

    {
        let zone = controls.zone.clone();
        listen(&controls.zone, "dragleave", move |_| {
            let _ = zone.class_list().remove_1(DRAGOVER_CLASS);
        })?;
    }

    let zone = controls.zone.clone();
    let input = controls.input.clone();
    listen(&controls.zone, "drop", move |event| {
        event.prevent_default();
        let _ = zone.class_list().remove_1(DRAGOVER_CLASS);

        let Some(files) = event
            .dyn_ref::<DragEvent>()
            .and_then(DragEvent::data_transfer)
            .and_then(|transfer| transfer.files())
        else {
            return;
        };
        if files.length() > 0 {
            input.set_files(Some(&files));
            on_file(first_upload(&input));
        }
    })
}
