use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,
    pub success: Color,
    pub error: Color,
    pub bar: Color,         // Resting bar color
    pub bar_compare: Color, // Pair under comparison
    pub bar_swap: Color,    // Pair mid-swap
    pub bar_settled: Color, // Final position reached
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub accent: Color, // Status badges and field labels
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(137, 180, 250),         // Blue
    bar_compare: Color::Rgb(249, 226, 175), // Yellow
    bar_swap: Color::Rgb(243, 139, 168),    // Red/pink
    bar_settled: Color::Rgb(166, 227, 161), // Green
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    accent: Color::Rgb(250, 179, 135), // Orange
};
