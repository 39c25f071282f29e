//! Loading overlay and toast notice.
//!
//! Both share one stylesheet that is injected into `<head>` the first time
//! [`ensure_overlay_styles`] runs; later calls find it by id and return.

mod loading;
mod toast;

pub use loading::loading_overlay;
pub use toast::{show_toast, ToastKind};

const STYLE_ELEMENT_ID: &str = "induction-overlay-styles";

const OVERLAY_CSS: &str = r#"
.loading-overlay {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 255, 255, 0.85);
    z-index: 10000;
}
.loading-overlay .spin {
    width: 48px;
    height: 48px;
    border: 6px solid #ccc;
    border-top-color: #1976d2;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
.toast {
    position: fixed;
    bottom: 20px;
    left: 50%;
    transform: translateX(-50%);
    padding: 10px 20px;
    border-radius: 4px;
    color: #fff;
    font-family: Arial, sans-serif;
    z-index: 10001;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}
.toast.show { opacity: 1; }
.toast.success { background: #2e7d32; }
.toast.error { background: #c62828; }
"#;

pub fn ensure_overlay_styles() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(OVERLAY_CSS));
        head.append_child(&style).ok();
    }
}
