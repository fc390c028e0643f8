use std::{cell::RefCell, rc::Rc};

use anyhow::{anyhow, Context};
use remark_client::{
    api::PostId, CommentStore, Config, Controller, Repository, Stamper, SystemClock, UuidIds,
};

mod dialogs;
mod nav;
mod storage;
mod ui;
mod util;

const CONFIG_ELEMENT_ID: &str = "remark-config";

fn main() {
    tracing_wasm::set_as_global_default();
    if let Err(e) = start() {
        tracing::error!("failed starting the comment widget: {e:?}");
    }
}

fn load_config(document: &web_sys::Document) -> Config {
    let json = match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|elt| elt.text_content())
    {
        None => return Config::default(),
        Some(json) => json,
    };
    Config::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid widget configuration, using the defaults");
        Config::default()
    })
}

fn start() -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document to attach to"))?;
    let config = load_config(&document);

    match nav::install(&document, &config.nav_link_selector) {
        Ok(links) => tracing::debug!(links, "navigation ready"),
        Err(e) => tracing::warn!("failed setting up navigation: {e:?}"),
    }

    let mounts = document
        .query_selector_all(&config.mount_selector)
        .map_err(util::js_err)
        .with_context(|| format!("looking up mount points {:?}", config.mount_selector))?;
    let mounts = util::elements(&mounts)
        .filter_map(|elt| match elt.get_attribute(&config.post_id_attribute) {
            Some(id) if !id.trim().is_empty() => Some((PostId(id.trim().to_string()), elt)),
            _ => {
                tracing::warn!(
                    attribute = %config.post_id_attribute,
                    "mount point without a post id"
                );
                None
            }
        })
        .collect::<Vec<_>>();

    let store = CommentStore::new(storage::LocalBackend, config.storage_key.clone());
    let stamper = Stamper::new(Box::new(SystemClock), util::local_tz(), &config);
    let mut controller = Controller::new(
        Repository::new(store, stamper),
        Box::new(UuidIds),
        config.messages.clone(),
    );
    let posts = mounts.iter().map(|(p, _)| p.clone()).collect::<Vec<_>>();
    controller.load(&posts);

    let controller = ui::SharedController(Rc::new(RefCell::new(controller)));
    for (post_id, root) in mounts {
        yew::Renderer::<ui::CommentSection>::with_root_and_props(
            root,
            ui::CommentSectionProps {
                post_id,
                controller: controller.clone(),
            },
        )
        .render();
    }
    Ok(())
}
