use std::time::Duration;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use movie_client::{ClientSettings, Movie, client_settings::DEFAULT_BASE_URL};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub(crate) struct CliArguments {
    #[arg(short, long, env = "MOVIES_APP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = 5000)]
    pub connect_timeout_ms: u64,

    #[arg(short, long, default_value_t = 5000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArguments {
    pub(crate) fn settings(&self) -> ClientSettings {
        ClientSettings::new(self.base_url.clone())
            .with_connect_timeout(Duration::from_millis(self.connect_timeout_ms))
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// List every movie
    All,
    /// Fetch one movie by id
    ById {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// List movies whose name matches
    ByName { name: String },
    /// List movies released in a year
    ByYear { year: i32 },
    /// Create a movie
    Create(MovieArguments),
    /// Replace the movie with the given id
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[command(flatten)]
        movie: MovieArguments,
    },
    /// Delete a movie by id
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Delete movies by name
    DeleteByName { name: String },
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub(crate) struct MovieArguments {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub cast: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    /// ISO date, e.g. 2005-06-15
    #[arg(long)]
    pub release_date: Option<NaiveDate>,
}

impl From<MovieArguments> for Movie {
    fn from(args: MovieArguments) -> Self {
        Movie {
            cast: args.cast,
            movie_id: None,
            name: args.name,
            release_date: args.release_date,
            year: args.year,
        }
    }
}
