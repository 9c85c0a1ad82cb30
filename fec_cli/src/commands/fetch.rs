//! The `fetch` subcommand: walk every page of a contributions search.

use anyhow::Result;
use clap::Args;
use fec_data::{FetchConfig, Query, SearchForm};

use crate::output::{print_rows, OutputFormat};

/// Search filters shared by `fetch` and `pages`.
#[derive(Args)]
pub struct FilterArgs {
    /// Election cycle year; odd years round up (e.g. 2013 -> 2014)
    #[arg(long)]
    pub cycle: Option<String>,

    /// Committee type: house (h), senate (s), presidential (p), super_pac (o), pac (q), party (y)
    #[arg(long)]
    pub committee_type: Option<String>,

    /// Contributor street address
    #[arg(long, default_value = "")]
    pub location: String,

    /// Contributor city
    #[arg(long, default_value = "")]
    pub locality: String,

    /// Contributor state or province
    #[arg(long, default_value = "")]
    pub state: String,

    /// Contributor postal code
    #[arg(long, default_value = "")]
    pub postal_code: String,

    /// Contributor country
    #[arg(long, default_value = "")]
    pub country: String,

    /// Results per page (overrides FEC_PER_PAGE)
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl FilterArgs {
    /// Turns the flags into a query, printing coercion warnings to stderr.
    pub fn to_query(&self, config: &FetchConfig) -> fec_data::ContributionQuery {
        let form = SearchForm {
            location: self.location.clone(),
            locality: self.locality.clone(),
            administrative_area_level_1: self.state.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            cycle: self.cycle.clone(),
            committee_type: self.committee_type.clone(),
        };
        let (query, warnings) = form.into_query(&config.api_key);
        for warning in warnings {
            eprintln!("{}", warning);
        }
        match self.per_page.or(config.per_page) {
            Some(per_page) => query.with_per_page(per_page),
            None => query,
        }
    }
}

#[derive(Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Stop after this many pages (overrides FEC_MAX_PAGES)
    #[arg(long)]
    pub max_pages: Option<u32>,
}

pub async fn run(args: &FetchArgs, config: &FetchConfig, format: &OutputFormat) -> Result<()> {
    let mut config = config.clone();
    if args.max_pages.is_some() {
        config.max_pages = args.max_pages;
    }

    let query = args.filters.to_query(&config);
    let fetcher = config.fetcher()?;
    let results = fetcher.fetch_all(&query).await?;

    eprintln!(
        "{} contributions ({} cycle, committee type {})",
        results.len(),
        query.cycle,
        query.committee_type
    );

    print_rows(&results, format)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use fec_data::types::{CommitteeType, TwoYearPeriod};

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: FetchArgs,
    }

    fn parse(argv: &[&str]) -> FetchArgs {
        TestCli::parse_from(std::iter::once("fec").chain(argv.iter().copied())).args
    }

    #[test]
    fn flags_become_query() {
        let args = parse(&[
            "--cycle",
            "2013",
            "--committee-type",
            "H",
            "--locality",
            "Austin",
            "--state",
            "TX",
            "--max-pages",
            "3",
        ]);
        let query = args.filters.to_query(&FetchConfig::default());
        assert_eq!(query.cycle, TwoYearPeriod::new(2014).unwrap());
        assert_eq!(query.committee_type, CommitteeType::House);
        assert_eq!(query.locality.as_deref(), Some("Austin"));
        assert_eq!(query.administrative_area.as_deref(), Some("TX"));
        assert_eq!(query.common.api_key.as_deref(), Some("DEMO_KEY"));
        assert_eq!(args.max_pages, Some(3));
    }

    #[test]
    fn per_page_flag_overrides_config() {
        let config = FetchConfig {
            per_page: Some(20),
            ..FetchConfig::default()
        };
        let query = parse(&[]).filters.to_query(&config);
        assert_eq!(query.common.per_page, Some(20));

        let query = parse(&["--per-page", "100"]).filters.to_query(&config);
        assert_eq!(query.common.per_page, Some(100));
    }
}
