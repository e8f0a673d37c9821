use crate::demo::{demo_submission, DemoArgs};
use crate::input::{load_submission, parse_format, parse_scheme};
use crate::render::{render_report, render_weights};
use clap::{Args, Parser, Subcommand};
use phd_readiness::assessment::{AssessmentSubmission, ReadinessEngine, WeightScheme};
use phd_readiness::config::{AppConfig, OutputFormat};
use phd_readiness::error::AppError;
use phd_readiness::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "phd-readiness",
    about = "Score PhD application readiness from grades, research record, and references",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an assessment submission (JSON) and print the report
    Evaluate(EvaluateArgs),
    /// Print a blank submission with the form's starting values
    Template,
    /// List the weight vector behind each scheme
    Weights,
    /// Evaluate a built-in sample applicant (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Path to the submission JSON; reads stdin when omitted or `-`
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Override the weight scheme declared in the submission
    #[arg(long, value_parser = parse_scheme)]
    scheme: Option<WeightScheme>,
    /// Output format (text or json)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));
    let engine = ReadinessEngine::default();

    match command {
        Command::Evaluate(args) => {
            let submission = load_submission(
                args.input.as_deref(),
                args.scheme,
                config.assessment.scheme,
            )?;
            let report = engine.assess(submission);
            info!(
                verdict = report.verdict.id(),
                scheme = report.scheme.id(),
                "submission evaluated"
            );
            let format = args.format.unwrap_or(config.assessment.output);
            println!("{}", render_report(&report, format)?);
        }
        Command::Template => {
            let template = AssessmentSubmission {
                scheme: config.assessment.scheme,
                ..AssessmentSubmission::form_defaults()
            };
            let json = serde_json::to_string_pretty(&template).map_err(AppError::Render)?;
            println!("{json}");
        }
        Command::Weights => print!("{}", render_weights()),
        Command::Demo(args) => {
            let scheme = args.scheme.unwrap_or(config.assessment.scheme);
            let submission = demo_submission(scheme, !args.english_gate_failed);
            let report = engine.assess(submission);
            info!(?config.environment, verdict = report.verdict.id(), "demo applicant evaluated");
            let format = args.format.unwrap_or(config.assessment.output);
            println!("{}", render_report(&report, format)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "phd-readiness",
            "evaluate",
            "--input",
            "applicant.json",
            "--scheme",
            "humanities",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("applicant.json")));
                assert_eq!(args.scheme, Some(WeightScheme::Humanities));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_scheme_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["phd-readiness", "demo", "--scheme", "medicine"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_subcommand_falls_back_to_demo() {
        let cli = Cli::try_parse_from(["phd-readiness"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
