use clap::{Parser, Subcommand};
use corda_rest::operations;
use corda_rest::{
    AdapterConfig, CordaNode, EnvCredentials, ExecutionContext, HttpTransport, ItemParameters,
    Resource, StaticParameters,
};
use dotenv::dotenv;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "corda-rest", version, about = "Call R3 Corda REST gateways from the shell")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the node description as JSON
    Describe,
    /// List operations with their method and path
    Operations {
        #[arg(long)]
        resource: Option<Resource>,
    },
    /// Run one operation over a batch of records
    Run {
        #[arg(long)]
        resource: String,
        #[arg(long)]
        operation: Option<String>,
        /// Batch-wide parameter, `name=value`
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// JSON array with one parameter object per record
        #[arg(long)]
        items: Option<PathBuf>,
        #[arg(long)]
        continue_on_fail: bool,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got \"{}\"", raw))
}

fn read_items(path: &PathBuf) -> Result<Vec<Map<String, Value>>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<Map<String, Value>> = serde_json::from_str(&text)?;
    Ok(records)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Describe => {
            let description = CordaNode::new().description();
            println!("{}", serde_json::to_string_pretty(&description)?);
        }
        Command::Operations { resource } => {
            let resources = match resource {
                Some(resource) => vec![resource],
                None => Resource::ALL.to_vec(),
            };
            for resource in resources {
                for op in operations::operations(resource) {
                    println!("{}\t{}\t{}\t{}", resource, op.name, op.method, op.path);
                }
            }
        }
        Command::Run {
            resource,
            operation,
            params,
            items,
            continue_on_fail,
        } => {
            let config = AdapterConfig::from_env();

            let mut shared = StaticParameters::new().with("resource", resource);
            if let Some(operation) = operation {
                shared.insert("operation", operation);
            }
            for (name, value) in params {
                shared.insert(name, value);
            }

            let parameters = match &items {
                Some(path) => ItemParameters::new(shared, read_items(path)?),
                None => ItemParameters::from_shared(shared),
            };
            let input: Vec<Value> = (0..parameters.item_count())
                .map(|_| Value::Object(Map::new()))
                .collect();

            let transport = HttpTransport::from_config(&config)?;
            let ctx = ExecutionContext::new(&input, &parameters, &EnvCredentials, &transport)
                .continue_on_fail(continue_on_fail || config.continue_on_fail);

            let outputs = CordaNode::new().run(&ctx).await?;
            println!("{}", serde_json::to_string_pretty(&outputs)?);
        }
    }

    Ok(())
}
