use chrono::Utc;
use clap::Parser;
use dspg_journal::application::manage_config::CONFIG_KEYS;
use dspg_journal::application::{
    init::init, ArticleService, AssistantService, ConfigService, DashboardService, Journal,
    SubmissionService,
};
use dspg_journal::cli::{self, Cli, Commands};
use dspg_journal::domain::{Principal, GUEST_AUTHOR_ID};
use dspg_journal::error::Result;
use dspg_journal::infrastructure::documents::{
    collect_manuscript_paths, load_manuscript, read_analysis_text,
};
use dspg_journal::infrastructure::{build_analyzer, resolve_config, Catalog, Config, Workspace};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        catalog,
        config: config_path,
        command,
        ..
    } = cli;

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized dspg-journal workspace at {}", path.display());
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                for (k, v) in service.list()? {
                    println!("{} = {}", k, v);
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: dspg-journal config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
            }
        }
        Commands::Check { file } => {
            let config = resolve_config(config_path.as_deref())?;
            let text = read_analysis_text(file.as_deref())?;

            let assistant =
                AssistantService::new(build_analyzer(&config.analysis), config.min_text_length);
            let report = assistant.check_originality(&text)?;
            print!("{}", cli::format_report(&report));
        }
        Commands::Search { query } => {
            let (journal, _) = open_session(catalog, config_path)?;
            let service = ArticleService::new(journal.store());
            println!("{}", cli::format_article_list(&service.search(&query)).trim_end());
        }
        Commands::Show { id, references } => {
            let (journal, _) = open_session(catalog, config_path)?;
            let service = ArticleService::new(journal.store());
            let view = service.view(&id)?;
            print!(
                "{}",
                cli::format_article(&view, &journal.profile.acronym, references)
            );
        }
        Commands::Related { id } => {
            let (journal, _) = open_session(catalog, config_path)?;
            let service = ArticleService::new(journal.store());
            let view = service.view(&id)?;
            println!("{}", cli::format_article_list(&view.related).trim_end());
        }
        Commands::Archives => {
            let (journal, _) = open_session(catalog, config_path)?;
            let service = ArticleService::new(journal.store());
            println!("{}", cli::format_archives(&service.archives()).trim_end());
        }
        Commands::Board => {
            let (journal, _) = open_session(catalog, config_path)?;
            print!("{}", cli::format_board(&journal.profile, &journal.board));
        }
        Commands::Submit {
            paths,
            user_id,
            email,
            name,
            role,
        } => {
            let (mut journal, _) = open_session(catalog, config_path)?;
            let principal = Principal::new(
                user_id.unwrap_or_else(|| GUEST_AUTHOR_ID.to_string()),
                email.unwrap_or_default(),
            )
            .with_name(name.unwrap_or_default())
            .with_role(role);

            let manuscripts = collect_manuscript_paths(&paths)?
                .iter()
                .map(|path| load_manuscript(path))
                .collect::<Result<Vec<_>>>()?;

            let submitted = SubmissionService::new(journal.ledger_mut()).submit_all(
                manuscripts,
                Some(&principal),
                Utc::now(),
            )?;
            for submission in &submitted {
                println!("Submitted {}  {}", submission.id, submission.title);
            }
            println!();

            let dashboard = DashboardService::new(journal.store(), journal.ledger());
            print!("{}", cli::format_dashboard(&dashboard.view(&principal)));
        }
        Commands::Summary { id } => {
            let (journal, config) = open_session(catalog, config_path)?;
            let service = ArticleService::new(journal.store());
            let article = service.require(&id)?;

            let assistant =
                AssistantService::new(build_analyzer(&config.analysis), config.min_text_length);
            println!("{}\n", article.title);
            println!("{}", assistant.summarize(article));
        }
    }

    Ok(())
}

/// Resolve config and build the journal for one session.
/// `--catalog` wins over the config file's catalog.
fn open_session(
    catalog: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(Journal, Config)> {
    let config = resolve_config(config_path.as_deref())?;
    let catalog_path = catalog.or_else(|| config.catalog.clone());
    let journal = Journal::from_catalog(Catalog::load(catalog_path.as_deref())?)?;
    Ok((journal, config))
}
