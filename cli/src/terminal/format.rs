use crate::terminal::colors;
use colored::*;
use shelf_common::value::Value;
use shelf_core::Record;

pub type Detail = (String, ColoredString);

pub fn record_to_details(record: &Record, unknown: &str) -> Vec<Detail> {
    let author: ColoredString = record.author().color(colors::AUTHOR);
    let year: ColoredString = match record.year() {
        Some(year) => year.to_string().color(colors::YEAR),
        None => unknown.color(colors::MISSING).italic(),
    };
    vec![
        (String::from("Author"), author),
        (String::from("Year"), year),
    ]
}

pub fn value_colored(value: &Value) -> ColoredString {
    match value {
        Value::Null => "null".color(colors::MISSING).italic(),
        Value::Bool(b) => bool_colored(*b),
        Value::Int(_) | Value::Float(_) => value.to_string().color(colors::YEAR),
        Value::Str(s) => format!("\"{s}\"").color(colors::TEXT_DEFAULT),
    }
}

pub fn bool_colored(b: bool) -> ColoredString {
    if b {
        "true".green().bold()
    } else {
        "false".red().bold()
    }
}

pub fn option_colored<T: ToString>(opt: Option<T>) -> ColoredString {
    match opt {
        Some(v) => v.to_string().color(colors::PRIMARY),
        None => "none".color(colors::MISSING).italic(),
    }
}
