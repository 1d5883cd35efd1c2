use cardgame::{
    args::{Args, Commands},
    Repository, Service,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let repository = Repository::new(&args.base_url)?;
    let mut service = Service::new(repository);

    match args.command {
        Commands::Play { guess } => {
            service.play_game(guess).await?;
        }
    };
    Ok(())
}
