//! CLI command definitions and handlers.

use clap::{Parser, Subcommand};

pub mod routes;
pub mod serve;

/// RewardHub - reward platform dashboards
#[derive(Parser, Debug)]
#[command(name = "rewardhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the dashboard web server
    Serve(serve::ServeArgs),

    /// Print the route table
    Routes(routes::RoutesArgs),
}
