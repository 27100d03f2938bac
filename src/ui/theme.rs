use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub title: Color,    // Big header line
    pub hint: Color,     // Key-binding hint text
    pub compared: Color, // Source-like index of the last mutation
    pub placed: Color,   // Destination-like index of the last mutation
    pub border: Color,
    pub running: Color,       // Status-bar indicator while sorting
    pub gradient: [Color; 3], // Alternating shades for undistinguished bars
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(166, 227, 161),    // Green
    hint: Color::Rgb(147, 153, 178),     // Muted grey
    compared: Color::Rgb(166, 227, 161), // Green
    placed: Color::Rgb(243, 139, 168),   // Red/pink
    border: Color::Rgb(108, 112, 134),   // Grey border
    running: Color::Rgb(249, 226, 175),  // Yellow
    gradient: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
};
