use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub bar: Color,       // Unsorted bars
    pub compare: Color,
    pub swap: Color,
    pub overwrite: Color,
    pub sorted: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(148, 226, 213),        // Turquoise
    compare: Color::Rgb(243, 139, 168),    // Red
    swap: Color::Rgb(250, 179, 135),       // Orange
    overwrite: Color::Rgb(245, 194, 231),  // Pink
    sorted: Color::Rgb(166, 227, 161),     // Green
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    primary: Color::Rgb(30, 102, 245),
    secondary: Color::Rgb(254, 100, 11),
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    error: Color::Rgb(210, 15, 57),
    bar: Color::Rgb(23, 146, 153),
    compare: Color::Rgb(210, 15, 57),
    swap: Color::Rgb(254, 100, 11),
    overwrite: Color::Rgb(234, 118, 203),
    sorted: Color::Rgb(64, 160, 43),
    border_focused: Color::Rgb(223, 142, 29),
    border_normal: Color::Rgb(156, 160, 176),
    status_bg: Color::Rgb(220, 224, 232),
};

impl Theme {
    pub fn for_mode(dark: bool) -> &'static Theme {
        if dark {
            &DARK_THEME
        } else {
            &LIGHT_THEME
        }
    }
}
