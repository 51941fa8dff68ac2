// ABOUTME: CLI for the ThaiFCD nutrition client.
// ABOUTME: Searches the food index or extracts detail records and prints JSON for verification.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use nutrition_thaifcd::Client;
use serde_json::json;

/// Query the ThaiFCD food-composition site through the relay and output JSON.
#[derive(Parser, Debug)]
#[command(name = "nutrition-cli")]
#[command(about = "Search ThaiFCD nutrition data and print JSON", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the relay that proxies the upstream site.
    #[arg(long, global = true)]
    relay_base: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Override the User-Agent header sent to the relay.
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the food index by keyword.
    Search {
        /// Keyword(s) to search for, one request per keyword.
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Fetch detail page(s) and extract the nutrient record.
    Detail {
        /// Detail URL(s) from search results, absolute or site-relative.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

fn build_client(args: &Args) -> Client {
    let mut builder = Client::builder().timeout(Duration::from_secs(args.timeout_secs));
    if let Some(relay_base) = &args.relay_base {
        builder = builder.relay_base(relay_base);
    }
    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent);
    }
    builder.build()
}

/// Serialize the output value. Value serialization is infallible.
fn render(output: &serde_json::Value, compact: bool) -> String {
    if compact {
        serde_json::to_string(output).unwrap()
    } else {
        serde_json::to_string_pretty(output).unwrap()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let client = build_client(&args);

    let mut results = Vec::new();
    let value_key = match &args.command {
        Command::Search { .. } => "items",
        Command::Detail { .. } => "record",
    };

    match &args.command {
        Command::Search { keywords } => {
            for keyword in keywords {
                match client.search(keyword).await {
                    Ok(items) => results.push(json!({
                        "keyword": keyword,
                        "ok": true,
                        "items": items,
                        "error": null
                    })),
                    Err(err) => results.push(json!({
                        "keyword": keyword,
                        "ok": false,
                        "items": null,
                        "error": err.to_string()
                    })),
                }
            }
        }
        Command::Detail { urls } => {
            for url in urls {
                match client.fetch_detail(url).await {
                    Ok(record) => results.push(json!({
                        "url": url,
                        "ok": true,
                        "record": record,
                        "error": null
                    })),
                    Err(err) => results.push(json!({
                        "url": url,
                        "ok": false,
                        "record": null,
                        "error": err.to_string()
                    })),
                }
            }
        }
    }

    let succeeded = results
        .iter()
        .filter(|r| r.get("ok").and_then(|v| v.as_bool()) == Some(true))
        .count();
    let failed = results.len() - succeeded;

    // Output format:
    // - Single target and ok => emit the items/record value alone
    // - Otherwise emit an envelope with per-target status and counts
    let output = if results.len() == 1 && failed == 0 {
        results[0].get(value_key).cloned().unwrap_or_else(|| json!({}))
    } else {
        json!({
            "results": results,
            "total": results.len(),
            "succeeded": succeeded,
            "failed": failed
        })
    };

    println!("{}", render(&output, args.compact));

    if failed > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
