//! Route table listing.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rewardhub_core::Page;
use rewardhub_web::RouteInfo;

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Only show the route for this dashboard (user, company or admin)
    pub page: Option<Page>,
}

/// Rows to print, narrowed to one dashboard when a page is given.
fn select(table: Vec<RouteInfo>, page: Option<Page>) -> Vec<RouteInfo> {
    match page {
        Some(page) => table.into_iter().filter(|row| row.page == Some(page)).collect(),
        None => table,
    }
}

pub fn execute(args: RoutesArgs) -> Result<()> {
    println!("{:<7} {:<18} {}", "Method".bold(), "Path".bold(), "Behaviour".bold());
    for row in select(rewardhub_web::route_table(), args.page) {
        println!("{:<7} {:<18} {}", "GET", row.path.cyan(), row.behaviour);
    }
    Ok(())
}
