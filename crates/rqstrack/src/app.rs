//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};

use rqstrack_cli::completion::generate_completion;
use rqstrack_cli::{ui, ReportPresenter, TablePresenter};
use rqstrack_core::{analytics, GrantError, GrantStore};
use rqstrack_io::{export_snapshot, load_store, save_store, DataSource};

use crate::config::{AppConfig, Command};
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Command::Completion { shell } = config.command {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    tracing::debug!(version = %full_version(), data = %config.data.display(), "starting");
    let mut store = open_store(config)?;
    let presenter = TablePresenter::new(config.verbose, config.quiet);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Command::List(args) => {
            let records = store.filter(&args.to_filter());
            presenter.present_records(&mut out, &records)?;
        }
        Command::Show { id } => {
            let record = store.get(*id).ok_or(GrantError::NotFound(*id))?;
            presenter.present_record(&mut out, record)?;
        }
        Command::Add(args) => {
            let today = store.today();
            let id = store
                .add(args.clone().into_new_grant(today))
                .context("adding record")?;
            persist(config, &store)?;
            announce(config, &format!("RQS {id} added"));
        }
        Command::Update(args) => {
            let (id, patch) = args.clone().into_patch();
            store.update(id, patch).context("updating record")?;
            persist(config, &store)?;
            announce(config, &format!("RQS {id} updated"));
        }
        Command::Summary => {
            section(config, "Summary");
            presenter.present_summary(
                &mut out,
                &analytics::summary(&store),
                &analytics::status_counts(&store),
            )?;
        }
        Command::Analytics => {
            section(config, "Analytics");
            presenter.present_analytics(
                &mut out,
                &analytics::vendor_distribution(&store),
                &analytics::progress_overview(&store),
                &analytics::monthly_volume(&store),
            )?;
        }
        Command::Aggregate { by, measure } => {
            let aggregation = store.aggregate_by(*by, *measure);
            presenter.present_aggregation(&mut out, *by, *measure, &aggregation)?;
        }
        Command::Export { dir } => {
            let path = export_snapshot(&store, dir)
                .with_context(|| format!("exporting to {}", dir.display()))?;
            writeln!(out, "{}", path.display())?;
        }
        // Handled before the store is opened.
        Command::Completion { .. } => {}
    }

    out.flush()?;
    Ok(())
}

fn open_store(config: &AppConfig) -> Result<GrantStore> {
    let (store, source) = load_store(&config.data, config.clock(), !config.no_seed)
        .with_context(|| format!("loading {}", config.data.display()))?;
    if source == DataSource::Seed && !config.quiet {
        ui::print_warning(&format!(
            "{} not found; starting from sample records",
            config.data.display()
        ));
    }
    Ok(store)
}

fn persist(config: &AppConfig, store: &GrantStore) -> Result<()> {
    save_store(store, &config.data).with_context(|| format!("saving {}", config.data.display()))
}

fn section(config: &AppConfig, title: &str) {
    if !config.quiet {
        ui::print_header(title);
    }
}

fn announce(config: &AppConfig, message: &str) {
    if !config.quiet {
        ui::print_success(message);
    }
}
