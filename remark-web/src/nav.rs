use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::util;

const ACTIVE_CLASS: &str = "active";

/// Id of the section an in-page link points to: `#posts` gives `posts`
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Makes in-page navigation links scroll smoothly and highlight themselves.
/// Returns how many links got wired.
pub fn install(document: &Document, selector: &str) -> anyhow::Result<usize> {
    let links = document.query_selector_all(selector).map_err(util::js_err)?;
    let mut installed = 0;
    for link in util::elements(&links) {
        let href = match link.get_attribute("href") {
            Some(href) if anchor_target(&href).is_some() => href,
            _ => continue,
        };
        let document = document.clone();
        let selector = selector.to_string();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
            let target = anchor_target(&href).and_then(|id| document.get_element_by_id(id));
            if let Some(target) = target {
                e.prevent_default();
                let mut options = ScrollIntoViewOptions::new();
                options.behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
                set_active(&document, &selector, &href);
            }
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(util::js_err)?;
        // handlers live as long as the page
        on_click.forget();
        installed += 1;
    }
    Ok(installed)
}

fn set_active(document: &Document, selector: &str, href: &str) {
    let links = match document.query_selector_all(selector) {
        Ok(links) => links,
        Err(e) => {
            tracing::warn!("failed listing navigation links: {e:?}");
            return;
        }
    };
    for link in util::elements(&links) {
        let is_active = link.get_attribute("href").as_deref() == Some(href);
        if let Err(e) = link.class_list().toggle_with_force(ACTIVE_CLASS, is_active) {
            tracing::warn!("failed toggling active navigation link: {e:?}");
        }
    }
}
