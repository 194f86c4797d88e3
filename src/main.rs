// src/main.rs

use article2post::{
    format_site_list, select_site, AppError, ArticleGenerator, CommandLineInput, GeminiClient,
    HtmlConverter, OAuthClient, OAuthCredentials, PublishConfig, PublishPipeline, PublishSession,
    SiteDirectory, Terminal, WordPressClient,
};
use article2post::logging::setup_logging;
use clap::Parser;

/// Authenticates, picks a site, then generates and publishes every title.
async fn execute_run(config: &PublishConfig) -> Result<(), AppError> {
    if config.titles.is_empty() {
        log::warn!("No titles given; nothing will be generated after site selection");
    }

    let http = reqwest::Client::builder().build()?;
    let mut terminal = Terminal::stdio();

    let oauth = OAuthClient::new(
        http.clone(),
        OAuthCredentials {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        },
    );
    let code = oauth.acquire_authorization_code(&mut terminal)?;
    let token = oauth.exchange_code(&code).await?;

    let wordpress = WordPressClient::new(http);
    let sites = wordpress.list_sites(&token).await?;
    terminal.say("\nYour Sites:")?;
    terminal.say(format_site_list(&sites).trim_end())?;
    let answer = terminal.prompt("Enter the number of the site to post to: ")?;
    let site = select_site(&sites, &answer)?;
    log::info!("Publishing to {} ({})", site.name, site.url);

    let session = PublishSession {
        token,
        site: site.id,
    };
    let backend = GeminiClient::new(&config.api_key, config.model.clone())?;
    let generator = ArticleGenerator::new(&backend)?;
    let converter = HtmlConverter::wordpress();

    let pipeline = PublishPipeline::new(
        &generator,
        &converter,
        &wordpress,
        &session,
        &config.output_dir,
    );
    let report = pipeline.run_all(&config.titles).await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(article) if article.publish.is_published() => {
                println!("✓ {} ({})", article.title, article.file.display());
            }
            Ok(article) => {
                println!(
                    "✗ {} saved to {} but not published",
                    article.title,
                    article.file.display()
                );
            }
            Err(e) => println!("✗ {}: {}", outcome.requested_title, e),
        }
    }

    report.into_result()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PublishConfig::resolve(cli)?;

    execute_run(&config).await?;

    Ok(())
}
