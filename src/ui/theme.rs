use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub highlight: Color, // Yellow for elements under the cursor
    pub pivot: Color,     // Pink for pivots and special markers
    pub path: Color,      // Teal for the reconstructed path
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    highlight: Color::Rgb(249, 226, 175),      // Yellow for active elements
    pivot: Color::Rgb(245, 194, 231),          // Pink for pivots
    path: Color::Rgb(148, 226, 213),           // Teal for paths
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),         // Slightly lighter BG for the status bar
};
