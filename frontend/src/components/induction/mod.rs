//! Site induction page: root component wiring state, update logic, and view.
//!
//! Responsibilities
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, run the startup chain: client configuration, then site
//!   data (awaited in full), then the induction fragment populated from it.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::InductionPage;

use crate::config::{load_client_config, requested_site};
use crate::overlays::ensure_overlay_styles;
use crate::services::content::load_induction_content;
use crate::services::site_data::fetch_site_data;

impl Component for InductionPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        InductionPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.started {
            self.started = true;
            ensure_overlay_styles();

            let link = ctx.link().clone();
            spawn_local(async move {
                let config = load_client_config().await;
                let site = requested_site(&config);
                let site_data_url = config.site_data_url.clone();
                link.send_message(Msg::ConfigLoaded(config));

                let site_data = fetch_site_data(&site_data_url, &site).await;
                let induction_data = site_data.induction_data.clone();
                link.send_message(Msg::SiteDataLoaded(site_data));

                let content = match load_induction_content(induction_data).await {
                    Ok(html) => Some(html),
                    Err(err) => {
                        gloo_console::error!("Error loading induction content:", err.to_string());
                        None
                    }
                };
                link.send_message(Msg::InductionContentLoaded(content));
            });
        }
    }
}
