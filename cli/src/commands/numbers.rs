use anyhow::Context;

use crate::terminal::{format, print};
use shelf_common::config::Config;
use shelf_common::numbers::{self, Counter, FactorialCache};
use shelf_common::{info, warn};

use super::NumAction;

const KEY_WIDTH: usize = 10;

pub fn num(action: NumAction, input: &str, cfg: &Config) -> anyhow::Result<()> {
    print::header(&format!("{action:?}"), cfg.quiet);

    match action {
        NumAction::Prime => {
            let n: u64 = parse(input)?;
            print::aligned_line(&format!("prime({n})"), format::bool_colored(numbers::is_prime(n)), KEY_WIDTH);
        }
        NumAction::Fib => {
            let n: u32 = parse(input)?;
            let fib = numbers::fibonacci(n);
            if fib.is_none() {
                warn!("fib({n}) does not fit in 64 bits");
            }
            print::aligned_line(&format!("fib({n})"), format::option_colored(fib), KEY_WIDTH);
        }
        NumAction::Factorial => factorials(input)?,
        NumAction::Phone => {
            print::aligned_line("Phone", format::option_colored(numbers::format_phone(input.trim())), KEY_WIDTH);
        }
        NumAction::Count => {
            let n: usize = parse(input)?;
            for value in Counter::new().take(n) {
                print::print_status(value.to_string());
            }
        }
    }
    Ok(())
}

/// Runs every factorial in the comma separated list through one cache.
fn factorials(input: &str) -> anyhow::Result<()> {
    let mut cache = FactorialCache::new();

    for part in input.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let n: u32 = parse(part)?;
        let cached: bool = cache.contains(n);
        let value = cache.factorial(n);
        let key: String = format!("{n}!");
        print::aligned_line(&key, format::option_colored(value), KEY_WIDTH);
        if cached {
            info!("{key} came from the cache");
        }
    }
    Ok(())
}

fn parse<T>(input: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    input
        .trim()
        .parse::<T>()
        .with_context(|| format!("'{input}' is not a valid non-negative number"))
}
