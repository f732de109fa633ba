use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use wirehttp::client::{create_request, load_body, parse_header, parse_target, send_request};
use wirehttp::http::response::HeaderMap;

#[derive(Debug, Parser)]
#[command(name = "wirehttp-client", about = "HTTP 1.1 Client")]
struct Args {
    /// HTTP method
    #[arg(short, long)]
    method: String,

    /// URL, e.g. 127.0.0.1:8080/index.html
    #[arg(short, long)]
    url: String,

    /// Headers as key:value
    #[arg(short = 'H', long, num_args = 1..)]
    headers: Vec<String>,

    /// Request body or path to a file holding it
    #[arg(short, long)]
    body: Option<String>,

    /// Template file for the request body; overrides --body
    #[arg(short, long)]
    template: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let target = parse_target(&args.url)?;

    let headers = args
        .headers
        .iter()
        .map(|h| parse_header(h))
        .collect::<anyhow::Result<HeaderMap>>()?;

    let mut body = match &args.body {
        Some(arg) => load_body(arg)?,
        None => String::new(),
    };

    if let Some(template) = &args.template {
        body = std::fs::read_to_string(template)
            .with_context(|| format!("failed to read template {}", template.display()))?;
        tracing::info!("Using template from {} for body", template.display());
    }

    let request = create_request(&args.method, &target.path, headers, &body);
    tracing::debug!(host = %target.host, port = target.port, "Sending request");

    let response = send_request(&target.host, target.port, &request).await?;
    println!("Response:\n{response}");

    Ok(())
}
