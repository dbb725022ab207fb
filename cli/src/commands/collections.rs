use colored::*;

use crate::terminal::{colors, format, print};
use shelf_common::collections::{Queue, Stack};
use shelf_common::config::Config;

const KEY_WIDTH: usize = 8;

pub fn stack(values: Vec<String>, pops: usize, cfg: &Config) {
    print::header("stack", cfg.quiet);

    let mut stack: Stack<String> = Stack::new();
    for value in values {
        stack.push(value);
    }
    print::aligned_line("Pushed", joined(stack.iter()), KEY_WIDTH);

    for _ in 0..pops {
        print::aligned_line("Popped", format::option_colored(stack.pop()), KEY_WIDTH);
    }
    print::aligned_line("Left", joined(stack.iter()), KEY_WIDTH);
}

pub fn queue(values: Vec<String>, takes: usize, cfg: &Config) {
    print::header("queue", cfg.quiet);

    let mut queue: Queue<String> = values.into_iter().collect();
    print::aligned_line("Queued", joined(queue.iter()), KEY_WIDTH);

    for _ in 0..takes {
        print::aligned_line("Taken", format::option_colored(queue.dequeue()), KEY_WIDTH);
    }
    print::aligned_line("Left", joined(queue.iter()), KEY_WIDTH);
}

fn joined<'a>(items: impl Iterator<Item = &'a String>) -> ColoredString {
    let items: Vec<&str> = items.map(String::as_str).collect();
    if items.is_empty() {
        return "empty".color(colors::MISSING).italic();
    }
    format!("[{}]", items.join(", ")).normal()
}
