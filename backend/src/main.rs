//! `enquete-intake`: validate and store a batch of food enquete submissions.
//!
//! Reports go to stdout as JSON lines; structured logs go to stderr.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result};
use enquete_backend::domain::{EnqueteService, FoodEnquete};
use enquete_backend::domain::ports::{EnqueteRepository, MessageCatalog};
use enquete_backend::intake::{IntakeSettings, IntakeSummary, load_submissions, run_intake};
use enquete_backend::outbound::locale::BundledMessageCatalog;
use enquete_backend::outbound::persistence::{
    DbPool, DieselEnqueteRepository, InMemoryEnqueteRepository, PoolConfig,
};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = IntakeSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load intake settings")?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build intake runtime")?;
    runtime.block_on(run(&settings))
}

async fn run(settings: &IntakeSettings) -> Result<()> {
    let path = settings.submissions_path()?;
    let submissions = load_submissions(path)?;
    let catalog = BundledMessageCatalog::for_locale(settings.locale())?;
    info!(
        path = %path.display(),
        submissions = submissions.len(),
        locale = catalog.locale(),
        "starting intake"
    );

    let summary = if let Some(database_url) = settings.database_url() {
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .wrap_err("failed to create database pool")?;
        intake(DieselEnqueteRepository::new(pool), &catalog, &submissions).await?
    } else {
        warn!("no database URL configured; using the in-memory store");
        intake(InMemoryEnqueteRepository::new(), &catalog, &submissions).await?
    };

    info!(
        saved = summary.saved,
        rejected = summary.rejected,
        "intake complete"
    );
    Ok(())
}

async fn intake<R: EnqueteRepository>(
    repository: R,
    catalog: &BundledMessageCatalog,
    submissions: &[FoodEnquete],
) -> Result<IntakeSummary> {
    let service = EnqueteService::new(Arc::new(repository));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_intake(&service, catalog, submissions, &mut out)
        .await
        .wrap_err("intake run aborted")
}
