//! Smooth scrolling for the result region.

use leptos::html::Section;
use leptos::prelude::*;

/// Scroll the referenced section into view with smooth behavior.
pub fn smooth_into_view(target: NodeRef<Section>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = target.get_untracked() {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}
