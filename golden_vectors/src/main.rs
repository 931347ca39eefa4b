use anyhow::{bail, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use golden_vectors::{generate, verify, Config, Layout, Scenario, Width, ITERATIONS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "golden_vectors",
    version,
    about = "Write or check MT19937 / MT19937-64 reference output files"
)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the scenario files, replacing any that exist
    Generate(RunArgs),
    /// Check existing scenario files against freshly generated output
    Verify(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Output root directory
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Values per file
    #[arg(long, default_value_t = ITERATIONS)]
    iterations: usize,

    #[arg(long, value_enum, default_value_t = WidthArg::All)]
    width: WidthArg,

    /// Scenario to include; repeat for several (default: all)
    #[arg(long = "scenario", value_enum)]
    scenarios: Vec<ScenarioArg>,

    /// nested: <out>/mt19937/default.txt, flat: <out>/expected_mt19937_default.txt
    #[arg(long, value_enum, default_value_t = LayoutArg::Nested)]
    layout: LayoutArg,

    /// Only report errors
    #[arg(long, short, action = ArgAction::SetTrue)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WidthArg {
    All,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScenarioArg {
    Default,
    #[value(name = "max_seed")]
    MaxSeed,
    Sequence,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Nested,
    Flat,
}

impl RunArgs {
    fn config(&self) -> Config {
        let widths = match self.width {
            WidthArg::All => Width::ALL.to_vec(),
            WidthArg::W32 => vec![Width::W32],
            WidthArg::W64 => vec![Width::W64],
        };
        let scenarios = if self.scenarios.is_empty() {
            Scenario::ALL.to_vec()
        } else {
            self.scenarios
                .iter()
                .map(|s| match s {
                    ScenarioArg::Default => Scenario::Default,
                    ScenarioArg::MaxSeed => Scenario::MaxSeed,
                    ScenarioArg::Sequence => Scenario::Sequence,
                })
                .collect()
        };
        let layout = match self.layout {
            LayoutArg::Nested => Layout::Nested,
            LayoutArg::Flat => Layout::Flat,
        };
        Config {
            out: self.out.clone(),
            iterations: self.iterations,
            widths,
            scenarios,
            layout,
        }
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    match opts.command {
        Command::Generate(args) => {
            for report in generate(&args.config())? {
                if !args.quiet {
                    eprintln!("wrote {} ({} values)", report.path.display(), report.count);
                }
            }
        }
        Command::Verify(args) => {
            let config = args.config();
            let mismatches = verify(&config)?;
            for mismatch in &mismatches {
                eprintln!("{}", mismatch);
            }
            if !mismatches.is_empty() {
                bail!("{} file(s) differ from the reference output", mismatches.len());
            }
            if !args.quiet {
                eprintln!(
                    "{} file(s) match",
                    config.widths.len() * config.scenarios.len()
                );
            }
        }
    }
    Ok(())
}
