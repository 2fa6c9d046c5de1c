//! GlucoSmart
//!
//! An MCP server for carbohydrate counting and meal logging.

use chrono::Local;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use glucosmart::build_info;
use glucosmart::config::Config;
use glucosmart::mcp::GlucoSmartService;
use glucosmart::{FoodCatalog, MealLog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let catalog = FoodCatalog::new();
    eprintln!("Food catalog: {} builtin foods", catalog.len());

    let meal_log = if config.sample_meals {
        let log = MealLog::with_sample_meals(&catalog, Local::now().naive_local())?;
        eprintln!("Meal log seeded with {} sample meals", log.len());
        log
    } else {
        MealLog::new()
    };

    // Create the GlucoSmart service
    let service = GlucoSmartService::new(catalog, meal_log);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
