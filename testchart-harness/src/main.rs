use clap::{Parser, Subcommand};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use testchart_harness::catalog::{self, ScenarioResult};

#[derive(Parser)]
#[command(name = "testchart-harness", about = "Chart transform verification harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run scenarios and report verdicts.
    Run {
        /// Filter by scenario name (substring match).
        #[arg(long)]
        scenario: Option<String>,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Only show failures.
        #[arg(long)]
        quiet: bool,
    },
    /// List available scenarios.
    List,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { scenario, format, quiet } => cmd_run(scenario, &format, quiet),
        Command::List => cmd_list(),
    }
}

fn cmd_run(filter: Option<String>, format: &str, quiet: bool) {
    let scenarios: Vec<_> = catalog::all()
        .into_iter()
        .filter(|s| filter.as_deref().map_or(true, |f| s.name.contains(f)))
        .collect();

    if scenarios.is_empty() {
        eprintln!("no scenarios match the filter");
        std::process::exit(2);
    }

    let results: Vec<ScenarioResult> = scenarios.into_par_iter().map(|s| s.run()).collect();
    let failures = results.iter().filter(|r| !r.verdict.pass).count();

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&results).expect("results serialize");
            println!("{json}");
        }
        _ => {
            for r in &results {
                if r.verdict.pass {
                    if !quiet {
                        println!("PASS  {}", r.name);
                    }
                } else {
                    println!("FAIL  {}", r.name);
                    for m in &r.verdict.mismatches {
                        println!("      {m}");
                    }
                }
            }
            println!("{} scenarios, {} failed", results.len(), failures);
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

fn cmd_list() {
    for s in catalog::all() {
        let transform = match s.crop {
            Some(rect) => format!("crop {},{} {}x{}", rect.x, rect.y, rect.width, rect.height),
            None => "full frame".to_string(),
        };
        println!("{:<24} {} ({} degradations)", s.name, transform, s.degradations.len());
    }
}
