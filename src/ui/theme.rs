use ratatui::style::Color;

/// Colors used across the presenter panes
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub heading: Color, // First text line of a slide
    pub dim: Color,     // Inactive cycle entries, help text
    pub accent: Color,  // Active cycle entry, selections
    pub warning: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color, // Status bar background
}

pub const MOON_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    heading: Color::Rgb(137, 180, 250), // Blue
    dim: Color::Rgb(108, 112, 134),
    accent: Color::Rgb(249, 226, 175), // Yellow
    warning: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    bar_bg: Color::Rgb(50, 50, 70),
};

pub const SAND_THEME: Theme = Theme {
    bg: Color::Rgb(46, 40, 30),
    fg: Color::Rgb(235, 225, 205),
    heading: Color::Rgb(250, 179, 135), // Orange
    dim: Color::Rgb(142, 130, 110),
    accent: Color::Rgb(250, 200, 120),
    warning: Color::Rgb(230, 110, 100),
    border_focused: Color::Rgb(250, 179, 135),
    border_normal: Color::Rgb(142, 130, 110),
    bar_bg: Color::Rgb(64, 56, 44),
};

pub const SEA_WAVE_THEME: Theme = Theme {
    bg: Color::Rgb(20, 34, 40),
    fg: Color::Rgb(200, 225, 230),
    heading: Color::Rgb(148, 226, 213), // Teal
    dim: Color::Rgb(95, 125, 130),
    accent: Color::Rgb(137, 220, 235),
    warning: Color::Rgb(235, 160, 120),
    border_focused: Color::Rgb(148, 226, 213),
    border_normal: Color::Rgb(95, 125, 130),
    bar_bg: Color::Rgb(32, 52, 60),
};

/// Look up a palette by its configured name; unknown names fall back to
/// the default "moon" palette
pub fn theme_by_name(name: &str) -> &'static Theme {
    match name {
        "sand" => &SAND_THEME,
        "sea-wave" => &SEA_WAVE_THEME,
        _ => &MOON_THEME,
    }
}
