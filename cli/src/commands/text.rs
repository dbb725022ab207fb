use crate::terminal::{format, print};
use shelf_common::config::Config;
use shelf_common::text;
use shelf_common::warn;

use super::TextAction;

const KEY_WIDTH: usize = 8;

pub fn text(action: TextAction, input: &[String], cfg: &Config) {
    print::header(&format!("{action:?}"), cfg.quiet);
    let joined: String = input.join(" ");

    match action {
        TextAction::TitleCase => print::print_status(text::title_case(&joined)),
        TextAction::FirstLast => {
            let pair = text::first_and_last_char(&joined).map(|(first, last)| format!("{first}{last}"));
            print::aligned_line("Ends", format::option_colored(pair), KEY_WIDTH);
        }
        TextAction::FullName => {
            let first: &str = input.first().map_or("", String::as_str);
            let last: String = input.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
            print::print_status(text::full_name(first, &last));
        }
        TextAction::FileName => print::print_status(text::file_name(&joined)),
        TextAction::Tags => print::print_status(text::tags_to_csv(input)),
        TextAction::SplitTags => {
            let tags: Vec<String> = text::csv_to_tags(&joined);
            for (idx, tag) in tags.iter().enumerate() {
                print::aligned_line(&idx.to_string(), tag.as_str(), KEY_WIDTH);
            }
        }
        TextAction::Url => print::print_status(text::search_query(&joined)),
        TextAction::Password => {
            let strong: bool = text::is_strong_password(&joined);
            print::aligned_line("Strong", format::bool_colored(strong), KEY_WIDTH);
            if !strong {
                warn!(
                    "Passwords need {} characters, a capital letter and a digit",
                    text::MIN_PASSWORD_LEN
                );
            }
        }
        TextAction::Emails => {
            let emails: Vec<&str> = text::extract_emails(&joined);
            if emails.is_empty() {
                print::no_results(cfg.quiet);
            }
            for email in emails {
                print::print_status(email);
            }
        }
        TextAction::Mask => print::print_status(text::mask_numbers(&joined)),
    }
}
