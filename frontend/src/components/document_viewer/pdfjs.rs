//! Bindings to the global `pdfjsLib` loaded from `index.html`.

use js_sys::{Object, Promise};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Starts loading the document at `src`. Throws when pdf.js is absent.
    #[wasm_bindgen(catch, js_namespace = pdfjsLib, js_name = getDocument)]
    pub fn get_document(src: &str) -> Result<PdfLoadingTask, JsValue>;

    pub type PdfLoadingTask;

    #[wasm_bindgen(method, getter)]
    pub fn promise(this: &PdfLoadingTask) -> Promise;

    #[derive(Clone)]
    pub type PdfDocument;

    #[wasm_bindgen(method, getter, js_name = numPages)]
    pub fn num_pages(this: &PdfDocument) -> u32;

    /// Resolves to a `PdfPage`; page numbers start at 1.
    #[wasm_bindgen(method, js_name = getPage)]
    pub fn get_page(this: &PdfDocument, page_number: u32) -> Promise;

    pub type PdfPage;

    #[wasm_bindgen(method, catch, js_name = getViewport)]
    pub fn get_viewport(this: &PdfPage, params: &Object) -> Result<PdfViewport, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn render(this: &PdfPage, params: &Object) -> Result<PdfRenderTask, JsValue>;

    pub type PdfViewport;

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &PdfViewport) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &PdfViewport) -> f64;

    pub type PdfRenderTask;

    #[wasm_bindgen(method, getter)]
    pub fn promise(this: &PdfRenderTask) -> Promise;
}
