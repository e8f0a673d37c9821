use phd_readiness::assessment::{
    GateStatus, GradeRecord, InstitutionSelection, PostgraduateClass, ReadinessReport,
    UndergraduateClass, WeightScheme,
};
use phd_readiness::config::OutputFormat;
use phd_readiness::error::AppError;

pub(crate) fn render_report(
    report: &ReadinessReport,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(AppError::Render),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &ReadinessReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "PhD readiness assessment (scheme: {})\n",
        report.scheme.label()
    ));
    match report.gate {
        GateStatus::Passed => out.push_str("Language gate: passed\n"),
        GateStatus::Failed => out.push_str("Language gate: not met\n"),
    }
    match report.final_score {
        Some(score) => out.push_str(&format!(
            "Final score: {:.2} / 10 -> {}\n",
            score,
            report.verdict.label()
        )),
        None => out.push_str(&format!(
            "Final score: undetermined -> {}\n",
            report.verdict.label()
        )),
    }

    out.push_str("\nContribution breakdown\n");
    for component in &report.components {
        out.push_str(&format!(
            "- {} {}: {:.2} (weight {:.2}, contributes {:.2})\n",
            component.dimension.code(),
            component.dimension.label(),
            component.score,
            component.weight,
            component.contribution
        ));
    }
    out.push_str(&format!("- Adjustment delta: {:+.2}\n", report.delta));

    let derived = &report.derived;
    let profile = &report.profile;
    out.push_str("\nAcademic detail\n");
    out.push_str(&format!(
        "- Undergraduate: {} at {}\n",
        grade_label(profile.undergraduate.as_ref(), UndergraduateClass::label),
        institution_label(&profile.institutions.undergraduate)
    ));
    out.push_str(&format!(
        "- Postgraduate: {} at {}\n",
        grade_label(profile.postgraduate.as_ref(), PostgraduateClass::label),
        institution_label(&profile.institutions.postgraduate)
    ));
    out.push_str(&format!(
        "- Target: {}\n",
        institution_label(&profile.institutions.target)
    ));
    out.push_str(&format!(
        "- Undergraduate grade: {} | Postgraduate grade: {} | Combined: {:.2}\n",
        optional(derived.undergraduate_grade),
        optional(derived.postgraduate_grade),
        derived.combined_grade
    ));
    out.push_str(&format!(
        "- Source prestige: {} | Target prestige: {} | Relative advantage: {:+.2}\n",
        optional(derived.source_prestige),
        optional(derived.target_prestige),
        derived.relative_advantage
    ));

    out.push_str("\nSuggestions\n");
    for (rank, suggestion) in report.suggestions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", rank + 1, suggestion.summary()));
    }

    out
}

pub(crate) fn render_weights() -> String {
    let mut out = String::from("Weight schemes (AG / RP / RE / RL / PI)\n");
    for scheme in WeightScheme::ordered() {
        let weights = scheme.weights();
        out.push_str(&format!(
            "- {:<12} {:.2} / {:.2} / {:.2} / {:.2} / {:.2}  {}\n",
            scheme.id(),
            weights.academic,
            weights.proposal,
            weights.experience,
            weights.recommendation,
            weights.interview,
            scheme.label()
        ));
    }
    out
}

fn grade_label<C: Copy>(record: Option<&GradeRecord<C>>, label: fn(C) -> &'static str) -> String {
    match record {
        Some(GradeRecord::Class(class)) => label(*class).to_string(),
        Some(GradeRecord::Percent(percent)) => format!("{percent:.1}%"),
        None => "grade not given".to_string(),
    }
}

fn institution_label(selection: &InstitutionSelection) -> String {
    if selection.is_empty() {
        return "institution not given".to_string();
    }
    let labels: Vec<&str> = selection
        .qs
        .map(|tier| tier.label())
        .into_iter()
        .chain(selection.domestic.map(|tier| tier.label()))
        .collect();
    labels.join(" / ")
}

fn optional(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    }
}
