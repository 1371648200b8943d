use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use portfolio_challenges::knapsack::{builtin_scenarios, find_scenario, Challenge, Track};
use portfolio_runner::{
    format_report, run_challenge, run_scenario, seed_from_u64, Expectation, Report,
};

fn cli() -> Command {
    Command::new("portfolio-runner")
        .about(
            "Compares greedy, brute force, memoized and bottom-up knapsack solvers on project \
             portfolios",
        )
        .arg(
            arg!(--scenario [SCENARIO] "Only run the named built-in scenario (not with random)")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--json "Print reports as json instead of text")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            arg!(-v --verbose "Log solver diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("random")
                .about("Runs the solvers on a seeded random portfolio")
                .arg(
                    arg!(<SEED> "Seed for instance generation")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!([TRACK] "Instance parameters, e.g. n_items=12,budget=50")
                        .default_value("n_items=12,budget=50")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logger(matches.get_flag("verbose"));

    if let Err(e) = check_args(&matches).and_then(|_| match matches.subcommand() {
        Some(("random", sub_m)) => run_random(sub_m, matches.get_flag("json")),
        None => run_builtin(
            matches.get_one::<String>("scenario").cloned(),
            matches.get_flag("json"),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    }) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check_args(matches: &ArgMatches) -> Result<()> {
    if matches.subcommand_name() == Some("random") && matches.contains_id("scenario") {
        return Err(anyhow!("--scenario cannot be combined with random"));
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

pub fn run_builtin(scenario: Option<String>, json: bool) -> Result<()> {
    let scenarios = match scenario {
        Some(name) => vec![find_scenario(&name)?],
        None => builtin_scenarios()?,
    };
    if !json {
        println!("Running the four solvers on {} scenario(s)...\n", scenarios.len());
    }
    let reports: Vec<Report> = scenarios.iter().map(run_scenario).collect();
    print_reports(&reports, json)?;

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        return Err(anyhow!("{} of {} scenario(s) failed", failed, reports.len()));
    }
    if !json {
        println!("All scenarios completed successfully.");
    }
    Ok(())
}

pub fn run_random(sub_m: &ArgMatches, json: bool) -> Result<()> {
    let seed = *sub_m
        .get_one::<u64>("SEED")
        .ok_or_else(|| anyhow!("SEED is required"))?;
    let track: Track = sub_m
        .get_one::<String>("TRACK")
        .ok_or_else(|| anyhow!("TRACK is required"))?
        .parse()?;
    let challenge = Challenge::generate_instance(&seed_from_u64(seed), &track)?;

    let report = run_challenge(&format!("random-{}", seed), &challenge, Expectation::default());
    print_reports(std::slice::from_ref(&report), json)?;
    if !report.passed() {
        return Err(anyhow!("Solvers disagree on random instance {}", seed));
    }
    Ok(())
}

fn print_reports(reports: &[Report], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            println!("{}", format_report(report));
        }
    }
    Ok(())
}
