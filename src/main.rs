use clap::Parser;

use wirehttp::config::{ServerArgs, ServerConfig};
use wirehttp::http::dispatch::Dispatcher;
use wirehttp::http::static_files::StaticFiles;
use wirehttp::logging;
use wirehttp::server::Listener;

fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    let cfg = ServerConfig::load(&args)?;

    let subscriber = logging::subscriber(&cfg.log_file)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    tracing::subscriber::with_default(subscriber, || runtime.block_on(serve(cfg)))
}

async fn serve(cfg: ServerConfig) -> anyhow::Result<()> {
    tracing::info!(
        addr = %cfg.listen_addr(),
        dir = %cfg.base_dir.display(),
        "Starting server"
    );

    let dispatcher = Dispatcher::new(StaticFiles::new(&cfg.base_dir));
    let listener = Listener::bind(&cfg).await?;
    println!("Server running on http://{}", listener.local_addr()?);

    tokio::select! {
        res = listener.run(dispatcher) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
