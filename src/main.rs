mod cli_arguments;

use std::process::ExitCode;

use clap::Parser;
use movie_client::{BlockingMovieRestClient, ClientBuildError, MovieRestClientError};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::{CliArguments, Command};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Build(#[from] ClientBuildError),

    #[error(transparent)]
    Movie(#[from] MovieRestClientError),

    #[error("Unable to render the result: {0}")]
    Render(#[from] serde_json::Error),
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn run(client: &BlockingMovieRestClient, command: Command) -> Result<String, CliError> {
    match command {
        Command::All => to_json(&client.get_all_movies()?),
        Command::ById { id } => to_json(&client.get_movie_by_id(id)?),
        Command::ByName { name } => to_json(&client.get_movie_by_name(&name)?),
        Command::ByYear { year } => to_json(&client.get_movie_by_year(year)?),
        Command::Create(movie) => to_json(&client.create_movie(&movie.into())?),
        Command::Update { id, movie } => to_json(&client.update_movie(id, &movie.into())?),
        Command::Delete { id } => Ok(client.delete_movie(id)?),
        Command::DeleteByName { name } => Ok(client.delete_movie_by_name(&name)?),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: CliArguments = CliArguments::parse();
    let settings = args.settings();

    info!("Calling movie service at {}", settings.base_url);

    let result = BlockingMovieRestClient::new(&settings)
        .map_err(CliError::from)
        .and_then(|client| run(&client, args.command));

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
