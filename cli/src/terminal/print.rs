use std::fmt::Display;

use crate::terminal::colors;
use crate::terminal::format::Detail;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
/// Width the labels of a detail tree are padded to.
const DETAIL_WIDTH: usize = 7;

/// Raw line through the print target; takes `format!` arguments.
#[macro_export]
macro_rules! sprint {
    () => {
        $crate::terminal::print::print("")
    };
    ($($arg:tt)+) => {
        $crate::terminal::print::print(&format!($($arg)+))
    };
}

/// Values that carry their own color keep it; plain text gets the default.
pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// A full-width line of `fill`, with `title` centred in it when given.
fn rule(fill: &str, title: Option<&str>) -> String {
    let Some(title) = title else {
        return fill.repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string();
    };
    let free: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(title));
    let left: usize = free / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        title,
        fill.repeat(free - left).color(colors::SEPARATOR)
    )
}

/// Dotted leader that pads `key` to `width` columns, then a colon.
fn leader(key: &str, width: usize) -> String {
    let dots: usize = width.saturating_sub(UnicodeWidthStr::width(key));
    format!("{}:", ".".repeat(dots)).color(colors::SEPARATOR).to_string()
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title = format!("⟦ SHELF v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    print(&rule("═", Some(&title.bright_green().bold().to_string())));
}

/// Section title for one command's output.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&rule("─", Some(&title.color(colors::ACCENT).to_string())));
}

pub fn fat_separator() {
    print(&rule("═", None));
}

/// `key....: value`, padding keys up to `key_width` display columns.
pub fn aligned_line<V>(key: &str, value: V, key_width: usize)
where
    V: Display + WithDefaultColor,
{
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!(
        "{}{} {}",
        key.color(colors::PRIMARY),
        leader(key, key_width + 1),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

/// `[idx] name`, the first line of a tree.
pub fn tree_head(idx: usize, name: &str) {
    let idx: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        idx.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Detail rows under a [`tree_head`].
pub fn as_tree_one_level(details: Vec<Detail>) {
    let last: usize = details.len().saturating_sub(1);
    for (i, (label, value)) in details.iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        print(&format!(
            " {} {}{} {}",
            branch.color(colors::SEPARATOR),
            label.color(colors::TEXT_DEFAULT),
            leader(label, DETAIL_WIDTH),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}{pad}"));
}

pub fn no_results(q_level: u8) {
    if q_level > 1 {
        return;
    }
    centerln(&"nothing to show".red().bold().to_string());
}

pub fn end_of_program(q_level: u8) {
    if q_level == 0 {
        fat_separator();
    }
}
