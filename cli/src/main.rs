mod commands;
mod terminal;

use commands::{CommandLine, Commands, books, check, collections, mapping, numbers, text};
use shelf_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        default_year: commands.default_year,
        unknown_year: commands.unknown_label,
        missing_year: commands.missing_year,
        quiet: commands.quiet,
    };
    let file = commands.file;
    let extra = commands.extra;
    let catalog = || books::load(file.as_deref(), &extra);

    print::banner(commands.no_banner, cfg.quiet);

    match commands.command {
        Commands::Titles => books::titles(&catalog()?, &cfg),
        Commands::HasAuthor { author } => books::has_author(&catalog()?, &author, &cfg),
        Commands::FillYears => books::fill_years(&catalog()?, &cfg),
        Commands::After { year } => books::after(&catalog()?, year, &cfg),
        Commands::Describe => books::describe(&catalog()?, &cfg),
        Commands::Sort => books::sort(&catalog()?, &cfg),
        Commands::Group { field } => books::group(&catalog()?, field, &cfg),
        Commands::Tour => books::tour(&catalog()?, &cfg),
        Commands::Stack { values, pops } => collections::stack(values, pops, &cfg),
        Commands::Queue { values, takes } => collections::queue(values, takes, &cfg),
        Commands::Map {
            entries,
            get,
            default,
        } => mapping::map(&entries, get.as_deref(), &default, &cfg),
        Commands::Text { action, input } => text::text(action, &input, &cfg),
        Commands::Num { action, input } => numbers::num(action, &input, &cfg)?,
        Commands::Check { kind, input } => check::check(kind, &input, &cfg)?,
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
