use anyhow::Context;

use crate::terminal::{format, print};
use shelf_common::config::Config;
use shelf_common::validate;

use super::CheckKind;

pub fn check(kind: CheckKind, input: &str, cfg: &Config) -> anyhow::Result<()> {
    print::header(&format!("{kind:?} check"), cfg.quiet);

    let accepted: Option<String> = match kind {
        CheckKind::Email => validate::email(input).map(str::to_string),
        CheckKind::Name => validate::name(input).map(str::to_string),
        CheckKind::Age => {
            let age: i64 = input
                .trim()
                .parse()
                .with_context(|| format!("'{input}' is not a whole number"))?;
            validate::age(age).map(|age| age.to_string())
        }
    };

    print::aligned_line("Valid", format::bool_colored(accepted.is_some()), 6);
    print::aligned_line("Value", format::option_colored(accepted), 6);
    Ok(())
}
