// File: crates/pump-chart/src/theme.rs
// Summary: Color presets for the area chart.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Line, markers and value pills.
    pub stroke: Color,
    /// Area under the line.
    pub fill: Color,
    /// Text inside value pills.
    pub pill_text: Color,
    /// X-axis tick labels.
    pub tick_label: Color,
}

impl Theme {
    pub fn violet() -> Self {
        Self {
            name: "violet",
            stroke: Color::rgb(0x6a, 0x5c, 0xff),
            fill: Color::rgba(106, 92, 255, 0.25),
            pill_text: Color::WHITE,
            tick_label: Color::rgb(0x8b, 0x90, 0xa0),
        }
    }

    pub fn emerald() -> Self {
        Self {
            name: "emerald",
            stroke: Color::rgb(0x16, 0xc7, 0x84),
            fill: Color::rgba(22, 199, 132, 0.25),
            pill_text: Color::WHITE,
            tick_label: Color::rgb(0x8b, 0x90, 0xa0),
        }
    }

    pub fn amber() -> Self {
        Self {
            name: "amber",
            stroke: Color::rgb(0xf5, 0x9e, 0x0b),
            fill: Color::rgba(245, 158, 11, 0.25),
            pill_text: Color::rgb(0x1f, 0x1f, 0x1f),
            tick_label: Color::rgb(0x8b, 0x90, 0xa0),
        }
    }

    pub fn slate() -> Self {
        Self {
            name: "slate",
            stroke: Color::rgb(0x47, 0x55, 0x69),
            fill: Color::rgba(71, 85, 105, 0.2),
            pill_text: Color::WHITE,
            tick_label: Color::rgb(0x64, 0x74, 0x8b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::violet()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::violet(), Theme::emerald(), Theme::amber(), Theme::slate()]
}

/// Find a theme by its `name`, falling back to violet.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::violet()
}
