use clap::Args;
use std::fs;
use std::path::PathBuf;
use support_report::error::AppError;
use support_report::report::catalog;
use support_report::report::{self, derive_rows, ReportRequest, ReportVariant};

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Report request JSON file
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output path for the generated DOCX document
    #[arg(long)]
    pub(crate) output: PathBuf,
    /// Override the layout variant from the request ("summary" or "detailed")
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<ReportVariant>,
}

fn parse_variant(raw: &str) -> Result<ReportVariant, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "summary" => Ok(ReportVariant::Summary),
        "detailed" => Ok(ReportVariant::Detailed),
        other => Err(format!(
            "unknown variant '{other}', expected 'summary' or 'detailed'"
        )),
    }
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs {
        input,
        output,
        variant,
    } = args;

    let raw = fs::read_to_string(&input)?;
    let mut request: ReportRequest = serde_json::from_str(&raw)?;
    if let Some(variant) = variant {
        request.variant = variant;
    }

    let document = report::render(&request)?;
    fs::write(&output, &document)?;

    let groups = derive_rows(&request);
    let assessed = groups
        .iter()
        .filter(|group| !group.is_independent())
        .count();

    println!("Support-needs report");
    println!(
        "Final score: {} pkt | variant: {:?}",
        request.final_score, request.variant
    );
    println!(
        "Activities requiring support: {assessed}/{}",
        catalog::ACTIVITY_COUNT
    );

    for group in groups.iter().filter(|group| !group.is_independent()) {
        for row in &group.rows {
            println!(
                "- {:>2} | {} | {} | {}/{} | {} pkt",
                row.ordinal, row.activity, row.disability, row.support_code, row.frequency_code,
                row.points
            );
        }
    }

    println!("\nReport written to {}", output.display());
    Ok(())
}

pub(crate) fn list_activities() {
    println!("Assessed activities ({} total)", catalog::ACTIVITY_COUNT);
    for entry in catalog::entries() {
        println!("{:>2}. {}", entry.ordinal, entry.name);
        println!("    {}", entry.description);
    }
}
