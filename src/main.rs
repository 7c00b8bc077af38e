use anyhow::Result;
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use std::process::ExitCode;
use zdiff::ColorChoice;
use zdiff::areas::comparison::Comparison;
use zdiff::areas::workspace::Workspace;
use zdiff::artifacts::core::logging::init_logging;
use zdiff::artifacts::core::{PagerWriter, should_page};
use zdiff::artifacts::diff::diff_algorithm::DiffGuard;
use zdiff::artifacts::diff::hunk::DEFAULT_CONTEXT;
use zdiff::artifacts::render::side_by_side::MIN_PANEL_WIDTH;
use zdiff::artifacts::render::style::Palette;
use zdiff::artifacts::render::{DEFAULT_PANEL_WIDTH, Layout, RenderOptions};
use zdiff::commands::diff::{DiffOptions, DiffOutcome};

const ERROR_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "zdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files and highlight the words that changed",
    long_about = "Compare two text files line by line, then highlight the exact words \
    that changed inside each modified line. Adjacent changes are merged into one block. \
    Output is unified by default or side by side with --side-by-side.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    file1: PathBuf,
    #[arg(index = 2, help = "The modified file")]
    file2: PathBuf,
    #[arg(
        short = 'c',
        long,
        default_value_t = DEFAULT_CONTEXT,
        help = "Number of context lines around each change"
    )]
    context: usize,
    #[arg(short = 'y', long, help = "Show old and new lines in two columns")]
    side_by_side: bool,
    #[arg(
        short = 'W',
        long,
        default_value_t = DEFAULT_PANEL_WIDTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_PANEL_WIDTH as u64..),
        help = "Width of each side-by-side panel in columns"
    )]
    width: usize,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to use colors")]
    color: ColorChoice,
    #[arg(long, help = "Disable colored output (same as --color never)")]
    no_color: bool,
    #[arg(long, help = "Write to stdout instead of a pager")]
    no_pager: bool,
}

impl Cli {
    fn options(&self) -> DiffOptions {
        let choice = if self.no_color {
            ColorChoice::Never
        } else {
            self.color
        };
        let color = choice.resolve(
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        );
        // keep colored's global switch in line with the palette
        colored::control::set_override(color);

        let layout = if self.side_by_side {
            Layout::SideBySide
        } else {
            Layout::Unified
        };

        DiffOptions::new(
            self.context,
            RenderOptions::new(layout, self.width, Palette::new(color)),
            DiffGuard::default(),
        )
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("zdiff: {err:#}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

fn run(cli: &Cli) -> Result<DiffOutcome> {
    let options = cli.options();
    let workspace = Workspace::new(std::env::current_dir()?.into_boxed_path());

    if !should_page(cli.no_pager) {
        let comparison = Comparison::open(
            &workspace,
            &cli.file1,
            &cli.file2,
            Box::new(std::io::stdout()),
        )?;
        return comparison.diff(&options);
    }

    let pager = Pager::new();
    pager.set_prompt(format!(
        "{} → {}",
        cli.file1.display(),
        cli.file2.display()
    ))?;

    let comparison = Comparison::open(
        &workspace,
        &cli.file1,
        &cli.file2,
        Box::new(PagerWriter::new(pager.clone())),
    )?;
    let outcome = comparison.diff(&options)?;
    drop(comparison);

    minus::page_all(pager)?;

    Ok(outcome)
}
