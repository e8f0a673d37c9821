use phd_readiness::assessment::{AssessmentSubmission, WeightScheme};
use phd_readiness::config::OutputFormat;
use phd_readiness::error::AppError;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub(crate) fn parse_scheme(raw: &str) -> Result<WeightScheme, String> {
    WeightScheme::parse(raw).ok_or_else(|| {
        format!("unknown weight scheme '{raw}' (expected default, engineering, or humanities)")
    })
}

pub(crate) fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(raw).ok_or_else(|| format!("unknown output format '{raw}' (text or json)"))
}

/// Read a submission from a file, or stdin when no path (or `-`) is given.
///
/// The scheme precedence is: explicit flag, then the input's own `scheme`,
/// then the configured fallback.
pub(crate) fn load_submission(
    input: Option<&Path>,
    flag: Option<WeightScheme>,
    fallback: WeightScheme,
) -> Result<AssessmentSubmission, AppError> {
    let raw = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };

    submission_from_json(&raw, flag, fallback)
}

pub(crate) fn submission_from_json(
    raw: &str,
    flag: Option<WeightScheme>,
    fallback: WeightScheme,
) -> Result<AssessmentSubmission, AppError> {
    let mut submission = AssessmentSubmission::from_json(raw)?;
    submission.scheme = match flag {
        Some(scheme) => scheme,
        None if declares_scheme(raw) => submission.scheme,
        None => fallback,
    };
    Ok(submission)
}

fn declares_scheme(raw: &str) -> bool {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|value| value.get("scheme").cloned())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_declared_scheme() {
        let submission = submission_from_json(
            r#"{ "scheme": "humanities" }"#,
            Some(WeightScheme::Engineering),
            WeightScheme::Default,
        )
        .expect("parses");
        assert_eq!(submission.scheme, WeightScheme::Engineering);
    }

    #[test]
    fn declared_scheme_beats_configured_fallback() {
        let submission = submission_from_json(
            r#"{ "scheme": "humanities" }"#,
            None,
            WeightScheme::Engineering,
        )
        .expect("parses");
        assert_eq!(submission.scheme, WeightScheme::Humanities);
    }

    #[test]
    fn fallback_applies_when_input_is_silent() {
        let submission = submission_from_json(r#"{ "interview": 7 }"#, None, WeightScheme::Humanities)
            .expect("parses");
        assert_eq!(submission.scheme, WeightScheme::Humanities);
        assert_eq!(submission.interview, Some(7.0));
    }

    #[test]
    fn malformed_input_surfaces_submission_error() {
        let err = submission_from_json("{ not json", None, WeightScheme::Default)
            .expect_err("malformed input rejected");
        assert!(matches!(err, AppError::Submission(_)));
    }

    #[test]
    fn value_parsers_reject_unknown_ids() {
        assert_eq!(parse_scheme("Engineering"), Ok(WeightScheme::Engineering));
        assert!(parse_scheme("law").is_err());
        assert_eq!(parse_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_format("yaml").is_err());
    }
}
