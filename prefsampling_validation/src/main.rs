//! prefsampling validation CLI
//!
//! Screens the samplers against their closed-form laws with a chi-square test.

use clap::Parser;
use prefsampling_validation::scenarios::ScenarioId;
use prefsampling_validation::{
    DistributionValidator, PlotOptions, ScenarioResult, ValidationExport, ValidationRunner,
    DEFAULT_SIGNIFICANCE,
};
use serde_json::json;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "prefsampling-validate")]
#[command(about = "Check prefsampling samplers against their theoretical distributions", long_about = None)]
struct Args {
    /// Master seed; 0 picks one from the clock
    #[arg(short, long, default_value = "42")]
    seed: u64,
    
    /// Scenario name, or `all`
    #[arg(short = 'S', long, default_value = "all")]
    scenario: String,
    
    /// Samples drawn per scenario
    #[arg(short = 'n', long, default_value = "10000")]
    samples: usize,
    
    /// Consecutive seeds to screen, starting at --seed
    #[arg(long, default_value = "1")]
    seeds: usize,
    
    /// p-values below this fail the screening
    #[arg(long, default_value_t = DEFAULT_SIGNIFICANCE)]
    significance: f64,
    
    /// Log per-run detail
    #[arg(short, long)]
    verbose: bool,
    
    /// Print one JSON document instead of log lines
    #[arg(long)]
    json: bool,
    
    /// Write the plot data of a single scenario to this JSON file
    #[arg(long)]
    export: Option<String>,
}

/// Writes the observed and theoretical frequencies of `result` for plotting.
fn export_frequencies(scenario: ScenarioId, result: &ScenarioResult, path: &str) -> Result<usize, String> {
    let report = result
        .report
        .as_ref()
        .ok_or_else(|| "no report to export".to_string())?;
    let labels = DistributionValidator::new(scenario.config())
        .map_err(|e| e.to_string())?
        .outcome_space()
        .labels();
    
    let export = ValidationExport::from_report(report, labels, PlotOptions::default())
        .map_err(|e| e.to_string())?;
    export.write_to_file(path).map_err(|e| e.to_string())?;
    Ok(export.bars.len())
}

/// One JSON entry per scenario, with its runs across seeds.
fn json_summary(scenarios: &[ScenarioId], results: &[ScenarioResult], significance: f64) -> serde_json::Value {
    let per_scenario: Vec<_> = scenarios
        .iter()
        .map(|scenario| {
            let runs: Vec<_> = results
                .iter()
                .filter(|r| r.scenario == *scenario)
                .map(|r| {
                    json!({
                        "seed": r.seed,
                        "passed": r.passed,
                        "chi_square": r.report.as_ref().map(|rep| rep.chi_square),
                        "failure_reason": r.failure_reason,
                    })
                })
                .collect();
            let passed = runs.iter().filter(|run| run["passed"] == true).count();
            json!({
                "scenario": scenario.name(),
                "description": scenario.description(),
                "passed": passed,
                "runs": runs,
            })
        })
        .collect();
    
    json!({
        "significance": significance,
        "failed": results.iter().filter(|r| !r.passed).count(),
        "scenarios": per_scenario,
    })
}

fn main() {
    let args = Args::parse();
    
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        std::process::exit(1);
    }
    
    let scenarios: Vec<ScenarioId> = if args.scenario == "all" {
        ScenarioId::all()
    } else {
        vec![args.scenario.parse().unwrap_or_else(|e| {
            let names: Vec<&str> = ScenarioId::all().iter().map(|s| s.name()).collect();
            eprintln!("Error: {}", e);
            eprintln!("Available scenarios: {}, all", names.join(", "));
            std::process::exit(1);
        })]
    };
    
    let base_seed = match args.seed {
        0 => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1),
        seed => seed,
    };
    
    if args.export.is_some() && scenarios.len() > 1 {
        eprintln!("Error: --export needs a single --scenario");
        std::process::exit(1);
    }
    
    let mut results: Vec<ScenarioResult> = Vec::new();
    for offset in 0..args.seeds as u64 {
        let runner = ValidationRunner::new(base_seed.wrapping_add(offset))
            .with_samples(args.samples)
            .with_significance(args.significance);
        
        for &scenario in &scenarios {
            let result = runner.run(scenario);
            
            if !args.json {
                match (&result.failure_reason, result.p_value()) {
                    (None, Some(p)) => info!("✓ {} (seed={}) p={:.4}", scenario, result.seed, p),
                    (reason, _) => error!(
                        "✗ {} (seed={}) FAILED: {}",
                        scenario,
                        result.seed,
                        reason.as_deref().unwrap_or("unknown")
                    ),
                }
            }
            results.push(result);
        }
    }
    
    if let Some(path) = &args.export {
        // Plot the first seed's run
        if let Some(first) = results.first() {
            match export_frequencies(first.scenario, first, path) {
                Ok(bars) => info!("Exported {} outcomes to {}", bars, path),
                Err(e) => error!("Failed to export {}: {}", path, e),
            }
        }
    }
    
    let failed = results.iter().filter(|r| !r.passed).count();
    if args.json {
        match serde_json::to_string_pretty(&json_summary(&scenarios, &results, args.significance)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
    } else if failed == 0 {
        info!("All {} runs passed at significance {}", results.len(), args.significance);
    } else {
        error!("{}/{} runs failed at significance {}", failed, results.len(), args.significance);
    }
    
    if failed > 0 {
        std::process::exit(1);
    }
}
