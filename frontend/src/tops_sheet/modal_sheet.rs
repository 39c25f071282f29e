use web_sys::HtmlElement;
use yew::prelude::*;

/// Full-screen backdrop hosting a dialog.
///
/// The sheet stays mounted and is toggled with the `show` class so that
/// children keep their DOM nodes (and canvas contents) between openings.
/// Clicking the backdrop itself, not a child, emits `on_dismiss`.
pub struct ModalSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_dismiss: Callback<()>,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_dismiss = props.on_dismiss.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            if event.target() == event.current_target() {
                on_dismiss.emit(());
            }
        });
        let class = if props.open { "modal-sheet show" } else { "modal-sheet" };

        html! {
            <div class={class} {onclick} aria-hidden={(!props.open).to_string()}>
                { props.children.clone() }
            </div>
        }
    }
}

/// Stops the page behind an open sheet from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let body: Option<HtmlElement> = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        body.style().set_property("overflow", value).ok();
    }
}
