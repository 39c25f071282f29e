use std::cell::Cell;

use web_sys::Element;

const TOAST_ID: &str = "toast";
const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

thread_local! {
    // Bumped for every toast so an older timer never hides a newer message.
    static TOAST_GENERATION: Cell<u32> = const { Cell::new(0) };
}

/// Shows `message` at the bottom of the screen for a few seconds.
///
/// A single toast element is created on first use and reused afterwards; a
/// new message replaces whatever is currently shown.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(toast) = toast_element() else {
        return;
    };
    toast.set_text_content(Some(message));
    let classes = toast.class_list();
    classes.remove_2("success", "error").ok();
    classes.add_2(kind.class(), "show").ok();

    let generation = TOAST_GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        if TOAST_GENERATION.with(Cell::get) == generation {
            toast.class_list().remove_1("show").ok();
        }
    });
}

fn toast_element() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    if let Some(existing) = document.get_element_by_id(TOAST_ID) {
        return Some(existing);
    }
    super::ensure_overlay_styles();
    let toast = document.create_element("div").ok()?;
    toast.set_id(TOAST_ID);
    toast.set_class_name("toast");
    toast.set_attribute("role", "alert").ok();
    document.body()?.append_child(&toast).ok()?;
    Some(toast)
}
