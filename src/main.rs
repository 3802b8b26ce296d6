use clap::Parser;
use series_catalog::{browse, catalog, cli, config, error, interactive, logging, output};
use browse::Browser;
use catalog::CatalogClient;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{CatalogError, Result};
use series_catalog_common::{search_query, CatalogConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Browse { sort, pages, format, output: out_path } => {
            let catalog = catalog_with_sort(&config, cli.catalog_api.as_deref(), sort.as_deref())?;
            let client = CatalogClient::new(config.timeout())?;
            let show_progress = format == OutputFormat::Text;
            tracing::info!(api = %catalog.catalog_api, pages, "browsing catalog");

            let (mut browser, _) =
                output::with_spinner("読み込み中...", show_progress, Browser::mount(client, &catalog, "")).await;
            output::with_spinner("読み込み中...", show_progress, browser.load_pages(pages)).await;

            match format {
                OutputFormat::Text => output::print_state(browser.state()),
                OutputFormat::Json => output::write_snapshot(browser.state(), out_path.as_deref())?,
            }
        }

        Commands::Search { term, sort, format, output: out_path } => {
            let catalog = catalog_with_sort(&config, cli.catalog_api.as_deref(), sort.as_deref())?;
            let client = CatalogClient::new(config.timeout())?;
            let show_progress = format == OutputFormat::Text;
            tracing::info!(api = %catalog.catalog_api, term = %term, "searching catalog");

            let query = search_query(&term);
            let (browser, _) =
                output::with_spinner("検索中...", show_progress, Browser::mount(client, &catalog, &query)).await;

            let state = browser.state();
            if state.shows.is_empty() && state.error.is_none() && format == OutputFormat::Text {
                return Err(CatalogError::NoShowsFound(term));
            }

            match format {
                OutputFormat::Text => output::print_state(state),
                OutputFormat::Json => output::write_snapshot(state, out_path.as_deref())?,
            }
        }

        Commands::Interactive => {
            let catalog = config.catalog_config(cli.catalog_api.as_deref())?;
            let client = CatalogClient::new(config.timeout())?;
            interactive::run_interactive(client, &catalog).await?;
        }

        Commands::Sorts => {
            let catalog = config.catalog_config(cli.catalog_api.as_deref())?;
            for (i, option) in catalog.sort_options.iter().enumerate() {
                let marker = if i == 0 { " (デフォルト)" } else { "" };
                println!("  {:<12} {}{}", option.value, option.label, marker);
            }
        }

        Commands::Config { set_catalog_api, set_default_sort, show } => {
            let mut config = config;

            if let Some(url) = set_catalog_api {
                config.set_catalog_api(url)?;
                println!("✔ カタログAPIを設定しました");
            }

            if let Some(key) = set_default_sort {
                config.set_default_sort(key)?;
                println!("✔ デフォルトの並び替えを設定しました");
            }

            if show {
                println!("設定:");
                println!("  カタログAPI: {}", config.catalog_api(cli.catalog_api.as_deref()));
                println!(
                    "  並び替え: {}",
                    config.default_sort.as_deref().unwrap_or("(デフォルト)")
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// `--sort` 指定があれば並び替えリストの先頭に移す（マウント時の並び替えになる）
fn catalog_with_sort(config: &Config, api: Option<&str>, sort: Option<&str>) -> Result<CatalogConfig> {
    let mut catalog = config.catalog_config(api)?;
    if let Some(key) = sort {
        catalog
            .prefer_sort(key)
            .map_err(|_| CatalogError::UnknownSort(key.to_string()))?;
    }
    Ok(catalog)
}
