#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API for the portfolio backend

use anyhow::Result;
use clap::Parser;
use portfolio_backend::infrastructure::{
    email::service::SmtpContactService,
    http::{HttpServer, HttpServerConfig},
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    HttpServer::new(SmtpContactService::new(), args.server)
        .await?
        .run()
        .await
}
