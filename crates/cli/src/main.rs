mod config;
mod error;

use clap::{Parser, Subcommand};
use mcp::{Registry, Server, ToolContent};
use tools::{ClockTool, HostInspector, HostProfile, SystemInfoTool};
use tracing_subscriber::EnvFilter;

use error::{Error, Result};

const SERVER_NAME: &str = "debugmcp";

#[derive(Parser)]
#[command(name = "debugmcp")]
#[command(about = "MCP server exposing runtime debug tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tools over stdio (the default)
    Serve,
    /// Invoke a registered tool once and print its result
    Call {
        /// Tool name
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
    /// List registered tools
    Tools,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr; stdout belongs to the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Serve) | None => cmd_serve().await,
        Some(Commands::Call { tool, args }) => cmd_call(&tool, &args),
        Some(Commands::Tools) => cmd_tools(),
    }
}

async fn cmd_serve() -> Result<()> {
    let registry = build_registry()?;
    tracing::info!(tools = registry.len(), "serving on stdio");

    let server = Server::new(SERVER_NAME, env!("CARGO_PKG_VERSION"), registry);
    server.run().await?;
    Ok(())
}

fn cmd_call(tool: &str, args: &str) -> Result<()> {
    let arguments: serde_json::Value = serde_json::from_str(args)?;
    let registry = build_registry()?;

    let result = registry
        .call(tool, Some(arguments))
        .ok_or_else(|| Error::UnknownTool(tool.to_string()))?;
    for content in &result.content {
        let ToolContent::Text { text } = content;
        println!("{text}");
    }
    Ok(())
}

fn cmd_tools() -> Result<()> {
    let registry = build_registry()?;
    for spec in registry.specs() {
        println!("{:<14} {}", spec.name, spec.description);
    }
    Ok(())
}

/// Wire configuration and the host inspector into a tool registry.
fn build_registry() -> Result<Registry> {
    let (config, discovery) = config::discover()?;
    let reporting_mask = config.reporting_mask()?;

    // The inspector needs the extension list before the tools exist, so
    // the system_info tool can report itself.
    let extensions = vec![
        ClockTool::NAME.to_string(),
        SystemInfoTool::NAME.to_string(),
    ];

    let profile = HostProfile {
        version: env!("CARGO_PKG_VERSION").to_string(),
        engine: format!("mcp {}", mcp::PROTOCOL_VERSION),
        memory_limit: config.limits.memory_limit.clone(),
        max_execution_time: config.limits.max_execution_time,
        reporting_mask,
        extensions,
        include_path: discovery.include_path(),
        config_file: discovery.file.clone(),
        config_scan_dir: discovery.scan_dir.clone(),
    };

    let mut registry = Registry::new();
    registry.register(ClockTool);
    registry.register(SystemInfoTool::new(HostInspector::new(profile)));
    Ok(registry)
}
