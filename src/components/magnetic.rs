//! Magnetic hover hook.
//!
//! Tracks the pointer over a mounted element and exposes the resulting
//! `--mag-x` / `--mag-y` custom properties plus the hover class.

use std::rc::Rc;

use dioxus::prelude::*;
use guidedir_core::effects::MAGNETIC_HOVER_CLASS;
use guidedir_core::{Bounds, MagneticEffect, MagneticOffset};

#[derive(Clone, Copy, PartialEq)]
pub struct Magnetic {
    effect: MagneticEffect,
    element: Signal<Option<Rc<MountedData>>>,
    offset: Signal<Option<MagneticOffset>>,
    hovering: Signal<bool>,
}

/// Attach with `onmounted`, `onmousemove` and `onmouseleave`.
pub fn use_magnetic(effect: MagneticEffect) -> Magnetic {
    let element = use_signal(|| None);
    let offset = use_signal(|| None);
    let hovering = use_signal(|| false);
    Magnetic {
        effect,
        element,
        offset,
        hovering,
    }
}

impl Magnetic {
    pub fn on_mounted(mut self, evt: MountedEvent) {
        self.element.set(Some(evt.data()));
    }

    pub fn on_move(mut self, evt: MouseEvent) {
        if !*self.hovering.peek() {
            self.hovering.set(true);
        }
        let point = evt.client_coordinates();
        let Some(element) = self.element.peek().clone() else {
            return;
        };
        let effect = self.effect;
        let mut offset = self.offset;
        let hovering = self.hovering;

        spawn(async move {
            match element.get_client_rect().await {
                Ok(rect) => {
                    let bounds = Bounds {
                        left: rect.origin.x,
                        top: rect.origin.y,
                        width: rect.size.width,
                        height: rect.size.height,
                    };
                    let next = effect.offset(point.x, point.y, bounds);
                    // A rect lookup can resolve after the pointer has left
                    if let Some(next) = settle_offset(*hovering.peek(), next) {
                        offset.set(Some(next));
                    }
                }
                Err(e) => tracing::debug!("No client rect for magnetic element: {:?}", e),
            }
        });
    }

    pub fn on_leave(mut self) {
        self.hovering.set(false);
        self.offset.set(None);
    }

    /// Custom properties for the inline style; empty when at rest.
    pub fn style(&self) -> String {
        self.offset.cloned().map(|o| o.css_vars()).unwrap_or_default()
    }

    pub fn class(&self) -> &'static str {
        hover_class(self.offset.read().is_some())
    }
}

fn settle_offset(hovering: bool, offset: MagneticOffset) -> Option<MagneticOffset> {
    hovering.then_some(offset)
}

fn hover_class(hovering: bool) -> &'static str {
    if hovering {
        MAGNETIC_HOVER_CLASS
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_class() {
        assert_eq!(hover_class(true), "is-magnetic-hover");
        assert_eq!(hover_class(false), "");
    }

    #[test]
    fn test_late_offset_after_leave_is_dropped() {
        let offset = MagneticOffset { x: 3.0, y: -1.5 };
        assert_eq!(settle_offset(true, offset), Some(offset));
        assert_eq!(settle_offset(false, offset), None);
    }
}
