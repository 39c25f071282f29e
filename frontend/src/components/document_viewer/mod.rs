//! Paginated terms document shown above the signature pad.
//!
//! Pages are rasterised by pdf.js into an offscreen canvas and copied onto
//! the visible one only if the render is still the newest request, so quick
//! page or zoom changes never leave an outdated page on screen.

mod pdfjs;

use common::viewer::{fit_to_width, RenderRequest, ViewerPhase, ViewerState, MAX_ZOOM, MIN_ZOOM};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::signature::context_2d;
use crate::error::ClientError;

use pdfjs::{get_document, PdfDocument, PdfPage};

/// Delay before measuring the container, letting the dialog finish layout.
const LAYOUT_SETTLE_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct DocumentViewerProps {
    pub url: AttrValue,
}

pub enum Msg {
    Load,
    Loaded {
        ticket: u64,
        document: PdfDocument,
        page_width: f64,
    },
    LoadFailed {
        ticket: u64,
        message: String,
    },
    Rendered {
        ticket: u64,
        page: RenderedPage,
    },
    RenderFailed {
        ticket: u64,
        message: String,
    },
    Navigate(i32),
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Offscreen raster of one page.
pub struct RenderedPage {
    canvas: HtmlCanvasElement,
    css_width: f64,
    css_height: f64,
}

pub struct DocumentViewer {
    state: ViewerState,
    document: Option<PdfDocument>,
    canvas_ref: NodeRef,
    container_ref: NodeRef,
}

impl Component for DocumentViewer {
    type Message = Msg;
    type Properties = DocumentViewerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ViewerState::default(),
            document: None,
            canvas_ref: NodeRef::default(),
            container_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.url != ctx.props().url {
            self.state.reset();
            self.document = None;
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(LAYOUT_SETTLE_MS).await;
                link.send_message(Msg::Load);
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let Some(ticket) = self.state.begin_load() else {
                    return false;
                };
                let url = ctx.props().url.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match open_document(&url).await {
                        Ok((document, page_width)) => link.send_message(Msg::Loaded {
                            ticket,
                            document,
                            page_width,
                        }),
                        Err(err) => link.send_message(Msg::LoadFailed {
                            ticket,
                            message: err.to_string(),
                        }),
                    }
                });
                true
            }
            Msg::Loaded {
                ticket,
                document,
                page_width,
            } => {
                let container_width = self
                    .container_ref
                    .cast::<HtmlElement>()
                    .map(|container| f64::from(container.client_width()))
                    .unwrap_or(page_width);
                let base_scale = fit_to_width(container_width, page_width);
                if !self
                    .state
                    .finish_load(ticket, document.num_pages(), base_scale)
                {
                    return false;
                }
                self.document = Some(document);
                let request = self.state.request_render();
                self.start_render(ctx, request);
                true
            }
            Msg::LoadFailed { ticket, message } => {
                gloo_console::error!("Error loading terms document:", message.clone());
                self.state
                    .fail_load(ticket, format!("Unable to load the document. {}", message))
            }
            Msg::Rendered { ticket, page } => {
                if !self.state.is_current_render(ticket) {
                    return false;
                }
                if let Err(err) = self.present(&page) {
                    gloo_console::error!("Error presenting document page:", err.to_string());
                    self.state.fail_render(ticket, "Unable to display this page.");
                }
                true
            }
            Msg::RenderFailed { ticket, message } => {
                gloo_console::error!("Error rendering document page:", message);
                self.state
                    .fail_render(ticket, "Unable to display this page.")
            }
            Msg::Navigate(delta) => {
                let request = self.state.go_to_page(delta);
                self.start_render(ctx, request)
            }
            Msg::ZoomIn => {
                let request = self.state.zoom_in();
                self.start_render(ctx, request)
            }
            Msg::ZoomOut => {
                let request = self.state.zoom_out();
                self.start_render(ctx, request)
            }
            Msg::ResetZoom => {
                let request = self.state.reset_zoom();
                self.start_render(ctx, request)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let position = self.state.position().copied();
        let canvas_style = if position.is_some() {
            "display:block;margin:0 auto;"
        } else {
            "display:none;"
        };

        html! {
            <div class="document-viewer">
                {
                    if let Some(position) = position {
                        html! {
                            <div class="viewer-toolbar">
                                <button type="button" disabled={!position.has_previous()}
                                    onclick={link.callback(|_| Msg::Navigate(-1))}>{"‹ Prev"}</button>
                                <span class="viewer-page-info">
                                    { format!("Page {} of {}", position.page, position.total_pages) }
                                </span>
                                <button type="button" disabled={!position.has_next()}
                                    onclick={link.callback(|_| Msg::Navigate(1))}>{"Next ›"}</button>
                                <button type="button" disabled={position.zoom <= MIN_ZOOM}
                                    onclick={link.callback(|_| Msg::ZoomOut)}>{"−"}</button>
                                <span class="viewer-zoom">{ format!("{}%", (position.zoom * 100.0).round()) }</span>
                                <button type="button" disabled={position.zoom >= MAX_ZOOM}
                                    onclick={link.callback(|_| Msg::ZoomIn)}>{"+"}</button>
                                <button type="button" onclick={link.callback(|_| Msg::ResetZoom)}>{"Reset"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="viewer-page" ref={self.container_ref.clone()}>
                    {
                        match self.state.phase() {
                            ViewerPhase::Unloaded | ViewerPhase::Loading => html! {
                                <div class="viewer-status">{"Loading document..."}</div>
                            },
                            ViewerPhase::Error(message) => html! {
                                <div class="viewer-error">{ message.clone() }</div>
                            },
                            ViewerPhase::Ready(_) => html! {},
                        }
                    }
                    <canvas ref={self.canvas_ref.clone()} style={canvas_style}></canvas>
                </div>
            </div>
        }
    }
}

impl DocumentViewer {
    /// Spawns the render for `request`, if any. Returns whether anything
    /// changed and the view should refresh.
    fn start_render(&self, ctx: &Context<Self>, request: Option<RenderRequest>) -> bool {
        let (Some(request), Some(document)) = (request, self.document.clone()) else {
            return false;
        };
        let pixel_ratio = web_sys::window()
            .map(|window| window.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(1.0);
        let link = ctx.link().clone();
        spawn_local(async move {
            let ticket = request.ticket;
            match render_page(document, request.page, request.scale, pixel_ratio).await {
                Ok(page) => link.send_message(Msg::Rendered { ticket, page }),
                Err(err) => link.send_message(Msg::RenderFailed {
                    ticket,
                    message: err.to_string(),
                }),
            }
        });
        true
    }

    /// Copies a finished raster onto the visible canvas.
    fn present(&self, page: &RenderedPage) -> Result<(), ClientError> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| ClientError::Dom("document canvas is not mounted".to_string()))?;
        canvas.set_width(page.canvas.width());
        canvas.set_height(page.canvas.height());
        let style = canvas.style();
        style.set_property("width", &format!("{}px", page.css_width.floor()))?;
        style.set_property("height", &format!("{}px", page.css_height.floor()))?;
        context_2d(&canvas)?.draw_image_with_html_canvas_element(&page.canvas, 0.0, 0.0)?;
        Ok(())
    }
}

fn scale_params(scale: f64) -> Result<Object, ClientError> {
    let params = Object::new();
    Reflect::set(&params, &JsValue::from_str("scale"), &JsValue::from_f64(scale))?;
    Ok(params)
}

/// Loads the document and measures page 1 at scale 1.
async fn open_document(url: &str) -> Result<(PdfDocument, f64), ClientError> {
    let task = get_document(url)?;
    let document: PdfDocument = JsFuture::from(task.promise()).await?.unchecked_into();
    let first: PdfPage = JsFuture::from(document.get_page(1)).await?.unchecked_into();
    let viewport = first.get_viewport(&scale_params(1.0)?)?;
    Ok((document, viewport.width()))
}

async fn render_page(
    document: PdfDocument,
    page_number: u32,
    scale: f64,
    pixel_ratio: f64,
) -> Result<RenderedPage, ClientError> {
    let page: PdfPage = JsFuture::from(document.get_page(page_number))
        .await?
        .unchecked_into();
    let viewport = page.get_viewport(&scale_params(scale)?)?;

    let canvas: HtmlCanvasElement = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ClientError::Dom("document unavailable".to_string()))?
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| ClientError::Dom("unexpected element type".to_string()))?;
    canvas.set_width((viewport.width() * pixel_ratio).floor() as u32);
    canvas.set_height((viewport.height() * pixel_ratio).floor() as u32);
    let context = context_2d(&canvas)?;

    let params = Object::new();
    Reflect::set(&params, &JsValue::from_str("canvasContext"), &context)?;
    Reflect::set(&params, &JsValue::from_str("viewport"), &viewport)?;
    if pixel_ratio != 1.0 {
        let transform = Array::new();
        for value in [pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0] {
            transform.push(&JsValue::from_f64(value));
        }
        Reflect::set(&params, &JsValue::from_str("transform"), &transform)?;
    }
    JsFuture::from(page.render(&params)?.promise()).await?;

    Ok(RenderedPage {
        canvas,
        css_width: viewport.width(),
        css_height: viewport.height(),
    })
}
