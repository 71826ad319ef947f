//! Command-line front end for the HTTP component.
//!
//! Exit status: 0 for a 2xx response, 1 for 404, 2 for any error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use http_component::config::{load_config, with_timeout_overrides, ClientConfig};
use http_component::observability::logging;
use http_component::{HttpComponent, Params, RequestBody};

#[derive(Parser)]
#[command(name = "http-component")]
#[command(about = "Issue HTTP requests and map status codes to results", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Connection timeout in seconds (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    connect_timeout: Option<f64>,

    /// Whole-request timeout in seconds (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    timeout: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// GET a URL
    Get(ReadArgs),
    /// HEAD a URL; prints nothing, reports via exit status
    Head(ReadArgs),
    /// POST to a URL
    Post(WriteArgs),
    /// PUT to a URL
    Put(WriteArgs),
    /// DELETE a URL
    Delete(WriteArgs),
}

#[derive(Args)]
struct ReadArgs {
    url: String,

    /// Query option appended to the URL (repeatable).
    #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    query: Vec<(String, String)>,

    /// Decode the response as JSON and pretty-print it.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct WriteArgs {
    #[command(flatten)]
    read: ReadArgs,

    /// Form field sent as the request body (repeatable).
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_key_value, conflicts_with_all = ["data", "json_body"])]
    form: Vec<(String, String)>,

    /// Raw request body.
    #[arg(short, long, conflicts_with = "json_body")]
    data: Option<String>,

    /// JSON request body.
    #[arg(long, value_parser = parse_json)]
    json_body: Option<Value>,
}

impl WriteArgs {
    fn body(&self) -> Option<RequestBody> {
        if !self.form.is_empty() {
            Some(RequestBody::Form(self.form.iter().cloned().collect()))
        } else if let Some(data) = &self.data {
            Some(RequestBody::Raw(data.clone()))
        } else {
            self.json_body.clone().map(RequestBody::Json)
        }
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

fn parse_json(s: &str) -> Result<Value, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid JSON: {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load {}: {}", path.display(), e);
                return ExitCode::from(2);
            }
        },
        None => ClientConfig::default(),
    };
    let config = match with_timeout_overrides(config, cli.connect_timeout, cli.timeout) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid options: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = logging::init_logging(&config.observability) {
        eprintln!("Warning: logging not initialized: {}", e);
    }

    let component = match HttpComponent::new(config) {
        Ok(component) => component,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match run(&component, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(
    component: &HttpComponent,
    command: Commands,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let (read, reply) = match command {
        Commands::Get(args) => {
            let reply = component.get(&args.url, &query(&args)).await?;
            (args, reply)
        }
        Commands::Head(args) => {
            let found = component.head(&args.url, &query(&args), None).await?;
            return Ok(if found {
                ExitCode::SUCCESS
            } else {
                not_found()
            });
        }
        Commands::Post(args) => {
            let reply = component
                .post(&args.read.url, &query(&args.read), args.body())
                .await?;
            (args.read, reply)
        }
        Commands::Put(args) => {
            let reply = component
                .put(&args.read.url, &query(&args.read), args.body())
                .await?;
            (args.read, reply)
        }
        Commands::Delete(args) => {
            let reply = component
                .delete(&args.read.url, &query(&args.read), args.body())
                .await?;
            (args.read, reply)
        }
    };

    let Some(body) = reply else {
        return Ok(not_found());
    };

    if read.json {
        let json: Value = http_component::http::decode_json(&body)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", body);
    }
    Ok(ExitCode::SUCCESS)
}

fn query(args: &ReadArgs) -> Params {
    args.query.iter().cloned().collect()
}

fn not_found() -> ExitCode {
    eprintln!("Not found (404)");
    ExitCode::from(1)
}
