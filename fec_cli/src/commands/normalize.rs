//! The `normalize` subcommand: dry-run the input coercions.

use clap::Args;
use fec_data::types::{CommitteeType, TwoYearPeriod};
use fec_data::{normalize_committee_type, normalize_two_year_period};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct NormalizeArgs {
    /// Election cycle year to interpret
    #[arg(long, default_value = "2020")]
    pub cycle: String,

    /// Committee type name or code to interpret
    #[arg(long, default_value = "presidential")]
    pub committee_type: String,
}

#[derive(Serialize)]
struct NormalizedRow {
    cycle: TwoYearPeriod,
    committee_type: CommitteeType,
    warnings: Vec<String>,
}

pub fn run(args: &NormalizeArgs, format: &OutputFormat) {
    let (cycle, cycle_warning) = normalize_two_year_period(&args.cycle).into_parts();
    let (committee_type, committee_warning) =
        normalize_committee_type(&args.committee_type).into_parts();

    let row = NormalizedRow {
        cycle,
        committee_type,
        warnings: cycle_warning
            .into_iter()
            .chain(committee_warning)
            .map(|w| w.to_string())
            .collect(),
    };

    match format {
        OutputFormat::Json => print_json(&row),
        OutputFormat::JsonLines => match serde_json::to_string(&row) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
        },
    }
}
