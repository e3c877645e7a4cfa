use ratatui::style::Color;

// Accent colors
pub const ACCENT: Color = Color::Rgb(170, 130, 230);       // Lavender, focus + active toolbar button
pub const ACCENT_DIM: Color = Color::Rgb(120, 92, 168);    // Dimmed lavender
pub const ROW_BORDER: Color = Color::Rgb(214, 84, 84);     // Red outline around sidebar rows

// Text colors
pub const TEXT: Color = Color::Rgb(240, 240, 240);         // Primary text
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180); // Secondary text
pub const TEXT_MUTED: Color = Color::Rgb(144, 144, 144);   // Placeholders, hints

// Background colors
pub const BG_BASE: Color = Color::Rgb(44, 36, 56);         // Purple-tinted window background
pub const BG_MINT: Color = Color::Rgb(38, 58, 54);         // Mint-tinted sidebar + detail pane
pub const BG_MINT_SELECTED: Color = Color::Rgb(58, 96, 88); // Selected sidebar row
pub const BG_ELEVATED: Color = Color::Rgb(66, 60, 76);     // Toolbar, status bar badges
pub const BG_INPUT: Color = Color::Rgb(30, 44, 42);        // Text field

// Border colors
pub const BORDER: Color = Color::Rgb(86, 96, 94);          // Subtle border
pub const BORDER_FOCUS: Color = Color::Rgb(170, 130, 230); // Accent color for focus
