//! Cosmetic interaction effects.
//!
//! Nothing here affects which guides are shown; these helpers only compute
//! the style values the front-end and the page builder apply.
//!
//! # Key Components
//!
//! - [`MagneticEffect`]: pointer-following displacement on hover
//! - [`list_stagger`]: entrance delay for rendered guide rows
//! - [`sidebar_entrance`]: entrance animation for guide page sidebar links

use std::time::Duration;

/// Class present while the pointer displaces an element.
pub const MAGNETIC_HOVER_CLASS: &str = "is-magnetic-hover";

/// Class carried by every rendered guide row.
pub const LIST_ITEM_ANIMATE_CLASS: &str = "list-item-animate";

pub const LIST_STAGGER_STEP: Duration = Duration::from_millis(30);
pub const SIDEBAR_STAGGER_STEP: Duration = Duration::from_millis(50);

/// Entrance delay for the guide row at `index`.
pub fn list_stagger(index: usize) -> Duration {
    LIST_STAGGER_STEP * index as u32
}

/// Inline style for the sidebar link at `index`: hidden until its
/// `textCreation` animation runs.
pub fn sidebar_entrance(index: usize) -> String {
    let delay = SIDEBAR_STAGGER_STEP * index as u32;
    format!(
        "opacity: 0; animation: textCreation 0.5s ease-out forwards {}ms;",
        delay.as_millis()
    )
}

/// Bounding box of an element in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Displacement applied through the `--mag-x` / `--mag-y` custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticOffset {
    pub x: f64,
    pub y: f64,
}

impl MagneticOffset {
    pub fn css_vars(&self) -> String {
        format!("--mag-x: {}px; --mag-y: {}px;", self.x, self.y)
    }
}

/// Pulls an element toward the pointer by a fraction of the pointer's
/// distance from the element's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticEffect {
    pub strength: f64,
}

impl MagneticEffect {
    pub const DEFAULT_STRENGTH: f64 = 0.5;
    pub const BUTTON_STRENGTH: f64 = 0.3;
    pub const SIDEBAR_STRENGTH: f64 = 0.2;
    pub const GUIDE_STRENGTH: f64 = 0.15;

    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    pub fn offset(&self, pointer_x: f64, pointer_y: f64, bounds: Bounds) -> MagneticOffset {
        let (cx, cy) = bounds.center();
        MagneticOffset {
            x: (pointer_x - cx) * self.strength,
            y: (pointer_y - cy) * self.strength,
        }
    }
}

impl Default for MagneticEffect {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STRENGTH)
    }
}

/// The effect every rendered guide row is decorated with.
pub fn guide_magnetic() -> MagneticEffect {
    MagneticEffect::new(MagneticEffect::GUIDE_STRENGTH)
}
