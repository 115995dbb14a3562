use anyhow::{Result, bail};
use menu_nutrition::{config::Config, service::NutritionService};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: menu_nutrition [<location> | search <term> [<location>]]";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let service = NutritionService::from_config(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.as_slice() {
        [] => serde_json::to_string_pretty(&service.scrape_all_locations().await)?,
        [command, term] if command == "search" => {
            serde_json::to_string_pretty(&service.search(term, None).await?)?
        }
        [command, term, location] if command == "search" => {
            serde_json::to_string_pretty(&service.search(term, Some(location.as_str())).await?)?
        }
        [location] if location != "search" => {
            serde_json::to_string_pretty(&service.scrape_location(location).await?)?
        }
        _ => bail!(USAGE),
    };

    println!("{output}");
    Ok(())
}
