use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::client_settings::{ClientBuildError, ClientSettings};
use crate::movie::Movie;
use crate::movie_rest_client::{
    movie_rest_client::MovieRestClient, movie_rest_client_error::MovieRestClientError,
    simple_movie_rest_client::SimpleMovieRestClient,
};

/// Each call parks the calling thread on a private current-thread runtime
/// until the exchange completes, times out or fails. Calling it from inside
/// another tokio runtime panics.
pub struct BlockingMovieRestClient {
    runtime: Runtime,
    client: Arc<dyn MovieRestClient>,
}

impl BlockingMovieRestClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientBuildError> {
        let client = SimpleMovieRestClient::from_settings(settings)?;

        Ok(Self::with_client(Arc::new(client))?)
    }

    pub fn with_client(client: Arc<dyn MovieRestClient>) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        Ok(Self { runtime, client })
    }

    pub fn get_all_movies(&self) -> Result<Vec<Movie>, MovieRestClientError> {
        self.runtime.block_on(self.client.get_all_movies())
    }

    pub fn get_movie_by_id(&self, movie_id: i64) -> Result<Movie, MovieRestClientError> {
        self.runtime.block_on(self.client.get_movie_by_id(movie_id))
    }

    pub fn get_movie_by_name(&self, movie_name: &str) -> Result<Vec<Movie>, MovieRestClientError> {
        self.runtime
            .block_on(self.client.get_movie_by_name(movie_name))
    }

    pub fn get_movie_by_year(&self, year: i32) -> Result<Vec<Movie>, MovieRestClientError> {
        self.runtime.block_on(self.client.get_movie_by_year(year))
    }

    pub fn create_movie(&self, movie: &Movie) -> Result<Movie, MovieRestClientError> {
        self.runtime.block_on(self.client.create_movie(movie))
    }

    pub fn update_movie(&self, movie_id: i64, movie: &Movie) -> Result<Movie, MovieRestClientError> {
        self.runtime
            .block_on(self.client.update_movie(movie_id, movie))
    }

    pub fn delete_movie(&self, movie_id: i64) -> Result<String, MovieRestClientError> {
        self.runtime.block_on(self.client.delete_movie(movie_id))
    }

    pub fn delete_movie_by_name(&self, movie_name: &str) -> Result<String, MovieRestClientError> {
        self.runtime
            .block_on(self.client.delete_movie_by_name(movie_name))
    }
}
