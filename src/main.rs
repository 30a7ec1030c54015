use blogcore::application::{
    init::init, stats::stats, ConfigService, ContentSource, ListArticlesService, ListTagsService,
    ShowArticleService,
};
use blogcore::cli::{self, Cli, Commands};
use blogcore::domain::search::{ListOptions, SearchPredicate, SortDirection, SortField};
use blogcore::error::BlogError;
use blogcore::infrastructure::{BlogRepository, FileSystemRepository};
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter (e.g. `debug`, `blogcore=trace`)
const LOG_ENV: &str = "BLOGCORE_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn print_block(output: &str) {
    println!("{}", output.trim_end());
}

fn run(cli: Cli) -> Result<(), BlogError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized blog at {}", path.display());
            Ok(())
        }
        Commands::Render { file, dialect } => {
            let rendered = blogcore::application::render_source(ContentSource::from_arg(
                file.as_deref(),
            ))?;
            if dialect {
                println!("{}", rendered.dialect);
            } else {
                println!("{}", rendered.html);
            }
            Ok(())
        }
        Commands::List {
            search,
            tags,
            author,
            featured,
            sort,
            asc,
            limit,
            offset,
            page,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;

            let mut options = match page {
                Some(p) => ListOptions::page(p, config.ui.posts_per_page),
                None => ListOptions {
                    offset,
                    limit,
                    ..Default::default()
                },
            };
            options.author = author;
            options.featured = featured.then_some(true);
            options.order_by = SortField::from_str(&sort).map_err(BlogError::Config)?;
            options.direction = if asc {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            };

            let predicate = SearchPredicate::new(search).with_tags(tags);
            let listing = ListArticlesService::new(repo).execute(&predicate, &options)?;
            print_block(&cli::format_article_list(&listing, &config.ui));
            Ok(())
        }
        Commands::Tags => {
            let repo = FileSystemRepository::discover()?;
            let tags = ListTagsService::new(repo).execute()?;
            print_block(&cli::format_tag_list(&tags));
            Ok(())
        }
        Commands::Show { slug } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let view = ShowArticleService::new(repo).execute(&slug)?;
            print_block(&cli::format_article(&view, &config.ui));
            Ok(())
        }
        Commands::Featured { limit } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let articles = ListArticlesService::new(repo).featured(limit)?;
            print_block(&cli::format_articles(
                &articles,
                &config.ui,
                "No featured articles",
            ));
            Ok(())
        }
        Commands::Stats => {
            let repo = FileSystemRepository::discover()?;
            print_block(&cli::format_stats(&stats(&repo)?));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                print_block(&cli::format_config(&service.list()?)?);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: blogcore config [--list | <key> [<value>]]");
                Ok(())
            }
        }
    }
}
