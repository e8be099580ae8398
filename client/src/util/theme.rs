//! Theme class application.
//!
//! Applies the active theme as a class on `<body>` and removes the other one.
//! No preference is persisted; a reload starts from the default theme.

use crate::state::ui::Theme;

/// Put `theme`'s class on the body and drop the opposite class.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let classes = body.class_list();
            let _ = classes.toggle_with_force(theme.class_name(), true);
            let _ = classes.toggle_with_force(theme.opposite().class_name(), false);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the theme selected by the toggle and apply it.
pub fn toggle(checked: bool) -> Theme {
    let next = Theme::from_checked(checked);
    apply(next);
    next
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
