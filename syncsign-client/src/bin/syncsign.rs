//! # syncsign
//!
//! Command-line front end: list hubs and nodes, render layouts, or preview
//! the wire document offline.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use syncsign_client::{demo, ClientConfig, SyncSignClient};
use syncsign_core::{DeviceDirectory, Node, Route, Template, TemplateBlueprint, DEFAULT_API_ROOT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "syncsign", version, about = "SyncSign e-paper display client")]
struct Cli {
    #[command(flatten)]
    account: AccountArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct AccountArgs {
    /// API key from the SyncSign portal
    #[arg(long, global = true, env = "SYNCSIGN_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Cloud API root
    #[arg(long, global = true, env = "SYNCSIGN_API_URL", default_value = DEFAULT_API_ROOT)]
    api_url: String,

    /// TOML file with hub LAN addresses and keys
    #[arg(long, global = true, env = "SYNCSIGN_HUBS_FILE")]
    hubs_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show account details
    Account,
    /// List hubs
    Hubs,
    /// List display nodes
    Nodes,
    /// Send a layout to a node
    Render {
        /// Node id
        node: String,
        /// Render straight to the hub when it is direct-capable
        #[arg(long)]
        direct: bool,
        /// Keep the current background
        #[arg(long)]
        partial: bool,
        /// JSON layout file; the hello-world demo if omitted, or its
        /// second line with --partial
        #[arg(long)]
        layout: Option<PathBuf>,
    },
    /// Send the icon demo to a node
    Symbols {
        /// Node id
        node: String,
        /// Render straight to the hub when it is direct-capable
        #[arg(long)]
        direct: bool,
    },
    /// Print the wire document without sending it
    Preview {
        /// JSON layout file; the hello-world demo if omitted, or its
        /// second line with --partial
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Leave out the background
        #[arg(long)]
        partial: bool,
    },
}

/// Initialize structured tracing with optional JSON format.
///
/// Set `RUST_LOG` to control log levels (default: info,syncsign_client=debug).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,syncsign_client=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Preview { layout, partial } => {
            let template = load_template(layout.as_deref(), false, partial)?;
            println!("{}", template.serialize(partial)?);
        }
        Command::Account => {
            let client = connect(&cli.account, false)?;
            let info = client.account_info().await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::Hubs => {
            let client = connect(&cli.account, false)?;
            for hub in client.hubs().await? {
                let name = hub.name.as_deref().unwrap_or("(unnamed)");
                if hub.is_direct_capable() {
                    println!("Hub {}: {name} (direct rendering capable)", hub.sn);
                } else {
                    println!("Hub {}: {name}", hub.sn);
                }
            }
        }
        Command::Nodes => {
            let client = connect(&cli.account, false)?;
            for node in client.nodes().await? {
                println!(
                    "{} {:<20} model={} online={} battery={} signal={}",
                    node.id,
                    node.name.as_deref().unwrap_or("(unnamed)"),
                    node.model,
                    node.online,
                    level(node.battery),
                    level(node.signal),
                );
            }
        }
        Command::Render {
            node,
            direct,
            partial,
            layout,
        } => {
            let client = connect(&cli.account, direct)?;
            let target = lookup(&client, &node).await?;
            let template = load_template(layout.as_deref(), target.has_colour(), partial)?;
            send(&client, &target, &template, partial).await?;
        }
        Command::Symbols { node, direct } => {
            let client = connect(&cli.account, direct)?;
            let target = lookup(&client, &node).await?;
            send(&client, &target, &demo::symbols()?, false).await?;
        }
    }

    Ok(())
}

fn connect(args: &AccountArgs, direct: bool) -> anyhow::Result<SyncSignClient> {
    let api_key = args
        .api_key
        .clone()
        .context("an API key is required (--api-key or SYNCSIGN_API_KEY)")?;

    let mut config = ClientConfig::new(api_key)
        .with_api_root(args.api_url.clone())
        .with_render_direct(direct);
    if let Some(path) = &args.hubs_file {
        config = config.with_hubs_file(path.clone());
    }

    Ok(SyncSignClient::new(&config)?)
}

/// Resolve a node. Direct rendering needs the hub link, which only the
/// full directory snapshot provides.
async fn lookup(client: &SyncSignClient, node_id: &str) -> anyhow::Result<Node> {
    if client.direct_rendering() {
        let directory = client.directory().await?;
        return Ok(directory.resolve_node(node_id)?);
    }
    let info = client
        .node(node_id)
        .await
        .with_context(|| format!("looking up node {node_id}"))?;
    Ok(Node::new(info, None))
}

async fn send(
    client: &SyncSignClient,
    node: &Node,
    template: &Template,
    partial: bool,
) -> anyhow::Result<()> {
    if client.direct_rendering() {
        let endpoint = client.router().resolve(node, true);
        if endpoint.route == Route::Direct {
            println!("Using direct rendering.");
        } else {
            println!("Unable to use direct rendering, check the hubs file.");
        }
    }

    println!("Sending render request...");
    let receipt = client.render(node, template, partial).await?;
    tracing::info!(node = %receipt.node_id, route = ?receipt.route, "render accepted");
    if !receipt.response.is_null() {
        println!("{}", receipt.response);
    }
    Ok(())
}

/// Read a JSON layout, or pick the demo: the full hello-world page, or
/// the line drawn on top of it for a partial update.
fn load_template(layout: Option<&Path>, colour: bool, partial: bool) -> anyhow::Result<Template> {
    let Some(path) = layout else {
        let template = if partial {
            demo::hello_again()?
        } else {
            demo::hello_world(colour)?
        };
        return Ok(template);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading layout {}", path.display()))?;
    let blueprint = TemplateBlueprint::from_json(&text)
        .with_context(|| format!("parsing layout {}", path.display()))?;
    Ok(blueprint.build()?)
}

fn level(value: Option<u8>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}%"))
}
