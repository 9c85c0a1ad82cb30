//! The `pages` subcommand: report the page count without fetching pages.

use anyhow::Result;
use clap::Args;
use fec_data::FetchConfig;

use super::fetch::FilterArgs;

#[derive(Args)]
pub struct PagesArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

pub async fn run(args: &PagesArgs, config: &FetchConfig) -> Result<()> {
    let query = args.filters.to_query(config);
    let fetcher = config.fetcher()?;
    let starting_url = fetcher.starting_url(&query)?;
    let pages = fetcher.total_pages_for_call(&starting_url).await?;
    println!("{}", pages);
    Ok(())
}
