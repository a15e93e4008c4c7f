use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use spamlearn_cli::config::{apply_overrides, resolve_config};
use spamlearn_cli::evaluate::{evaluate_files, write_json};
use spamlearn_cli::search::search_lambda_file;

fn shared_args() -> Vec<Arg> {
    vec![
        Arg::new("config")
            .short('c')
            .long("config")
            .help("Path to experiment JSON configuration file")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath),
        Arg::new("lambda")
            .short('l')
            .long("lambda")
            .help("Candidate lambda_reg value. Repeat to build the grid; overrides lambda_grid.")
            .value_parser(clap::value_parser!(f64))
            .action(ArgAction::Append),
        Arg::new("validation_fraction")
            .long("validation-fraction")
            .help("Share of training rows held out for lambda selection.")
            .value_parser(clap::value_parser!(f64)),
        Arg::new("seed")
            .long("seed")
            .help("Seed for both the validation split and the initial weights.")
            .value_parser(clap::value_parser!(u64)),
        Arg::new("max_iterations")
            .long("max-iterations")
            .help("Gradient-ascent steps for logistic regression.")
            .value_parser(clap::value_parser!(usize)),
        Arg::new("learning_rate")
            .long("learning-rate")
            .help("Gradient-ascent step size for logistic regression.")
            .value_parser(clap::value_parser!(f64)),
        Arg::new("parallel")
            .long("parallel")
            .help("Train the lambda candidates concurrently.")
            .action(ArgAction::SetTrue),
        Arg::new("output_file")
            .short('o')
            .long("output")
            .help("Path to write the JSON report. Defaults to stdout.")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath),
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SPAMLEARN_LOG", "error,spamlearn=info"))
        .init();

    let matches = Command::new("spamlearn")
        .version(clap::crate_version!())
        .about("Naive Bayes and logistic regression spam classifiers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("evaluate")
                .about("Train every classifier on a training file and score it on a test file")
                .arg(
                    Arg::new("train")
                        .help("Training feature CSV (one document per row, label column)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("test")
                        .help("Test feature CSV over the same vocabulary")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .args(shared_args()),
        )
        .subcommand(
            Command::new("search-lambda")
                .about("Select the logistic-regression penalty on a validation split")
                .arg(
                    Arg::new("train")
                        .help("Training feature CSV (one document per row, label column)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("presence")
                        .long("presence")
                        .help("Binarize term counts before training.")
                        .action(ArgAction::SetTrue),
                )
                .args(shared_args()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("evaluate", sub_m)) => handle_evaluate(sub_m),
        Some(("search-lambda", sub_m)) => handle_search_lambda(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn handle_evaluate(matches: &ArgMatches) -> Result<()> {
    let train_path: &PathBuf = matches.get_one("train").unwrap();
    let test_path: &PathBuf = matches.get_one("test").unwrap();
    let output_path: Option<&PathBuf> = matches.get_one("output_file");
    log::info!(
        "[spamlearn] Evaluating {} against {}",
        train_path.display(),
        test_path.display()
    );

    let mut config = resolve_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    apply_overrides(&mut config, matches)?;

    let report = evaluate_files(train_path, test_path, &config)?;
    write_json(&report, output_path.map(PathBuf::as_path))
}

fn handle_search_lambda(matches: &ArgMatches) -> Result<()> {
    let train_path: &PathBuf = matches.get_one("train").unwrap();
    let output_path: Option<&PathBuf> = matches.get_one("output_file");
    log::info!("[spamlearn] Searching lambda on {}", train_path.display());

    let mut config = resolve_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    apply_overrides(&mut config, matches)?;

    let summary = search_lambda_file(train_path, &config, matches.get_flag("presence"))?;
    log::info!(
        "[spamlearn] Selected lambda = {} (validation F1 {:.4})",
        summary.lambda,
        summary.validation_f1
    );
    write_json(&summary, output_path.map(PathBuf::as_path))
}
