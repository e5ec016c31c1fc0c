use anyhow::anyhow;
use clap::Args;
use escola::{start_server, SchoolConfig, ServerConfig};

/// Arguments for the Serve command
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind to, overrides the configured address
    #[clap(short, long)]
    pub address: Option<String>,

    /// Port to listen on, overrides the configured port
    #[clap(short, long)]
    pub port: Option<u16>,
}

pub fn run(config: &SchoolConfig, args: ServeArgs) -> anyhow::Result<()> {
    let ServeArgs { address, port } = args;

    let mut server_config = ServerConfig::from_config(config);
    if let Some(address) = address {
        server_config = server_config.with_address(address);
    }
    if let Some(port) = port {
        server_config = server_config.with_port(port);
    }

    let directory = super::open_directory(config)?;
    println!(
        "Serving {} on http://{}",
        config.sqlite_path(),
        server_config.bind_address()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to start tokio runtime: {}", e))?;

    runtime.block_on(start_server(directory, server_config))
}
