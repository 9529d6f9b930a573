//! Dropdown component using the popover API
//!
//! Uses a `manual` popover for:
//! - Top-layer rendering (no z-index needed)
//! - Showing/hiding driven entirely by the `is_open` signal
//!
//! A small script evaluated on open:
//! - Anchors the popover to the trigger element, flipping above it when
//!   there is no room below and shifting it back inside the viewport
//! - Installs the dismiss listeners (pointer down outside, Escape) and
//!   reports the dismissal back through the eval channel

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

/// Counter for generating unique dropdown IDs
static DROPDOWN_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reason sent back by the dismiss listeners when we closed it ourselves
const CLOSED_BY_OWNER: &str = "closed";

/// Placement relative to the anchor element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Top,
    TopStart,
    TopEnd,
}

impl Placement {
    fn side(&self) -> &'static str {
        match self {
            Self::Bottom | Self::BottomStart | Self::BottomEnd => "bottom",
            Self::Top | Self::TopStart | Self::TopEnd => "top",
        }
    }

    fn align(&self) -> &'static str {
        match self {
            Self::Bottom | Self::Top => "center",
            Self::BottomStart | Self::TopStart => "start",
            Self::BottomEnd | Self::TopEnd => "end",
        }
    }
}

/// Show the popover, position it and arm the dismiss listeners.
fn show_script(anchor_id: &str, popover_id: &str, placement: Placement, offset: f64) -> String {
    format!(
        r#"
        const anchor = document.getElementById('{anchor_id}');
        const floating = document.getElementById('{popover_id}');
        if (!anchor || !floating) {{ return; }}

        window.__dropdownDismiss = window.__dropdownDismiss || {{}};
        const previous = window.__dropdownDismiss['{popover_id}'];
        if (previous) {{ previous('{closed}'); }}
        if (!floating.matches(':popover-open')) {{ floating.showPopover(); }}

        const side = '{side}';
        const align = '{align}';
        const a = anchor.getBoundingClientRect();
        const f = floating.getBoundingClientRect();
        const below = a.bottom + {offset};
        const above = a.top - f.height - {offset};
        let top = side === 'bottom' ? below : above;
        if (side === 'bottom' && below + f.height > window.innerHeight && above >= 0) {{ top = above; }}
        if (side === 'top' && above < 0) {{ top = below; }}
        let left = a.left + (a.width - f.width) / 2;
        if (align === 'start') {{ left = a.left; }}
        if (align === 'end') {{ left = a.right - f.width; }}
        left = Math.max(4, Math.min(left, window.innerWidth - f.width - 4));
        floating.style.cssText = `position: fixed; inset: auto; top: ${{top}}px; left: ${{left}}px; margin: 0; opacity: 1;`;

        const onPointerDown = (e) => {{
            if (!floating.contains(e.target) && !anchor.contains(e.target)) {{ finish('outside'); }}
        }};
        const onKeyDown = (e) => {{
            if (e.key === 'Escape') {{ finish('escape'); }}
        }};
        const finish = (reason) => {{
            document.removeEventListener('pointerdown', onPointerDown, true);
            document.removeEventListener('keydown', onKeyDown, true);
            delete window.__dropdownDismiss['{popover_id}'];
            if (floating.isConnected && floating.matches(':popover-open')) {{ floating.hidePopover(); }}
            dioxus.send(reason);
        }};
        window.__dropdownDismiss['{popover_id}'] = finish;
        document.addEventListener('pointerdown', onPointerDown, true);
        document.addEventListener('keydown', onKeyDown, true);
        "#,
        closed = CLOSED_BY_OWNER,
        side = placement.side(),
        align = placement.align(),
    )
}

/// Hide the popover and tear down its listeners, if any are armed.
fn hide_script(popover_id: &str) -> String {
    format!(
        r#"
        const dismiss = window.__dropdownDismiss && window.__dropdownDismiss['{popover_id}'];
        if (dismiss) {{ dismiss('{closed}'); }}
        const floating = document.getElementById('{popover_id}');
        if (floating && floating.matches(':popover-open')) {{ floating.hidePopover(); }}
        "#,
        closed = CLOSED_BY_OWNER,
    )
}

/// Dropdown component that positions content relative to an anchor element
#[component]
pub fn Dropdown(
    /// ID of the anchor element to position relative to
    anchor_id: String,
    /// Controls whether the dropdown is visible
    is_open: ReadSignal<bool>,
    /// Called when the user dismisses the dropdown (click outside, Escape)
    on_close: EventHandler<()>,
    /// Placement relative to anchor (default: Bottom)
    #[props(default)]
    placement: Placement,
    /// Offset from anchor in pixels (default: 4)
    #[props(default = 4.0)]
    offset: f64,
    /// Dropdown content
    children: Element,
    /// Optional CSS class for the dropdown container
    #[props(default)]
    class: Option<String>,
) -> Element {
    let popover_id = use_hook(|| {
        let id = DROPDOWN_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("dropdown-{}", id)
    });
    let popover_id_effect = popover_id.clone();
    let popover_id_drop = popover_id.clone();

    use_effect(move || {
        let is_open_val = is_open();
        let popover_id = popover_id_effect.clone();

        if !is_open_val {
            document::eval(&hide_script(&popover_id));
            return;
        }

        let mut eval = document::eval(&show_script(&anchor_id, &popover_id, placement, offset));
        spawn(async move {
            match eval.recv::<String>().await {
                Ok(reason) if reason == CLOSED_BY_OWNER => {}
                Ok(reason) => {
                    tracing::debug!("{popover_id} dismissed ({reason})");
                    on_close.call(());
                }
                Err(e) => tracing::warn!("{popover_id} dismiss channel failed: {e:?}"),
            }
        });
    });

    use_drop(move || {
        document::eval(&hide_script(&popover_id_drop));
    });

    let dropdown_class = class.unwrap_or_default();

    rsx! {
        div {
            id: "{popover_id}",
            popover: "manual",
            class: "{dropdown_class}",
            style: "position: fixed; inset: auto; top: 0; left: 0; margin: 0; opacity: 0;",
            {children}
        }
    }
}
