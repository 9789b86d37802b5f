use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};
use scanimate_core::{GenerateOptions, SlitRule};
use tracing::Level;

/// Interleave images into a barrier-grid composite and its slit mask.
#[derive(Parser, Debug)]
#[command(name = "scanimate", version)]
struct Cli {
    /// Bar width in pixels; must divide the image width.
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    bar_width: u32,

    /// Directory receiving the composite and mask.
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Slit count formula for the mask.
    #[arg(long, value_enum, default_value_t = SlitRuleChoice::Compat)]
    slit_rule: SlitRuleChoice,

    /// File name of the composite.
    #[arg(long, default_value = scanimate_core::DEFAULT_COMPOSITE_NAME)]
    composite_name: String,

    /// File name of the mask.
    #[arg(long, default_value = scanimate_core::DEFAULT_MASK_NAME)]
    mask_name: String,

    /// More log output (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Source images in animation order (at least two).
    #[arg(required = true, num_args = 2..)]
    images: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SlitRuleChoice {
    /// bar_count / bar_width slits, matching existing prints.
    Compat,
    /// One slit per interleave period.
    PerPeriod,
}

impl From<SlitRuleChoice> for SlitRule {
    fn from(choice: SlitRuleChoice) -> Self {
        match choice {
            SlitRuleChoice::Compat => SlitRule::Compat,
            SlitRuleChoice::PerPeriod => SlitRule::PerPeriod,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let options = GenerateOptions {
        bar_width: cli.bar_width,
        slit_rule: cli.slit_rule.into(),
        composite_name: cli.composite_name,
        mask_name: cli.mask_name,
    };

    let files = scanimate_core::generate_with(&cli.images, &cli.out, &options)
        .with_context(|| format!("generate animation in '{}'", cli.out.display()))?;

    eprintln!(
        "wrote {} and {} ({} images, {} bars)",
        files.composite.display(),
        files.mask.display(),
        files.layout.image_count,
        files.layout.bar_count
    );
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["scanimate", "-w", "10", "a.png", "b.png"]).unwrap();
        assert_eq!(cli.bar_width, 10);
        assert_eq!(cli.out, PathBuf::from("."));
        assert_eq!(cli.images.len(), 2);
        assert_eq!(cli.composite_name, "output.png");
        assert_eq!(cli.mask_name, "mask.png");
        assert_eq!(SlitRule::from(cli.slit_rule), SlitRule::Compat);
    }

    #[test]
    fn test_requires_two_images() {
        assert!(Cli::try_parse_from(["scanimate", "-w", "10", "a.png"]).is_err());
    }

    #[test]
    fn test_rejects_zero_bar_width() {
        assert!(Cli::try_parse_from(["scanimate", "-w", "0", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn test_slit_rule_flag() {
        let cli = Cli::try_parse_from([
            "scanimate",
            "-w",
            "2",
            "--slit-rule",
            "per-period",
            "a.png",
            "b.png",
        ])
        .unwrap();
        assert_eq!(SlitRule::from(cli.slit_rule), SlitRule::PerPeriod);
    }
}
