use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flowgen_core::config::AppConfig;
use flowgen_core::types::WorkflowGraph;
use flowgen_store::MemoryStore;

#[derive(Parser)]
#[command(name = "flowgen", version, about = "Turn workflow graphs into ordered steps and code")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "flowgen.toml", env = "FLOWGEN_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Override the bind address from config
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the execution order of a workflow file
    Order {
        /// Workflow JSON file (`-` for stdin)
        file: PathBuf,
        /// Print as a JSON array instead of one id per line
        #[arg(long)]
        json: bool,
    },
    /// Print the workflow narrative
    Describe {
        /// Workflow JSON file (`-` for stdin)
        file: PathBuf,
    },
    /// Generate code for a workflow with the configured model
    Generate {
        /// Workflow JSON file (`-` for stdin)
        file: PathBuf,
        /// Write the code here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flowgen=info,warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "flowgen", &mut io::stdout());
        }
        Commands::Order { file, json } => {
            let graph = read_graph(&file)?;
            let order = flowgen_engine::resolve(&graph.nodes, &graph.connections);
            if json {
                println!("{}", serde_json::to_string_pretty(&order)?);
            } else {
                for id in order {
                    println!("{}", id);
                }
            }
        }
        Commands::Describe { file } => {
            let graph = read_graph(&file)?;
            print!("{}", flowgen_engine::describe(&graph.nodes, &graph.connections));
        }
        Commands::Config => {
            let config = load_config(&cli.config)?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
        Commands::Serve { bind } => {
            let config = load_config(&cli.config)?;
            let mut gateway_config = config.gateway.clone();
            if let Some(bind) = bind {
                gateway_config.bind = bind;
            }

            let store = Arc::new(MemoryStore::new());
            let generator = flowgen_llm::create_generator(&config.model)?;

            info!(bind = %gateway_config.bind, "Starting gateway");
            let server = flowgen_gateway::GatewayServer::new(
                gateway_config,
                config.codegen.clone(),
                store,
                generator,
            );
            let cancel = tokio_util::sync::CancellationToken::new();
            let cancel_clone = cancel.clone();

            // Graceful shutdown on Ctrl-C
            tokio::spawn(async move {
                tokio::signal::ctrl_c().await.ok();
                info!("Shutting down gateway...");
                cancel_clone.cancel();
            });

            server.run(cancel).await?;
        }
        Commands::Generate { file, output } => {
            let config = load_config(&cli.config)?;
            let graph = read_graph(&file)?;
            let generator = flowgen_llm::create_generator(&config.model)?;
            let code = flowgen_llm::generate_code(
                generator.as_ref(),
                &config.codegen,
                &graph.nodes,
                &graph.connections,
            )
            .await?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &code)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "Code written");
                }
                None => println!("{}", code),
            }
        }
    }

    Ok(())
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    if path.exists() {
        info!(path = %path.display(), "Loading config");
        Ok(AppConfig::load(path)?)
    } else {
        warn!(path = %path.display(), "No config file found, using defaults");
        Ok(AppConfig::default())
    }
}

/// Read a workflow (or a stored flowchart export) from a file or stdin.
fn read_graph(path: &Path) -> anyhow::Result<WorkflowGraph> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };

    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
