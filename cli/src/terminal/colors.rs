use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const YEAR: Color = Color::Cyan;
pub const MISSING: Color = Color::BrightRed;
pub const AUTHOR: Color = Color::Magenta;
