use async_trait::async_trait;

use crate::movie::Movie;
use crate::movie_rest_client::movie_rest_client_error::MovieRestClientError;

/// Read-shaped operations (and `delete_movie_by_name`) fail with
/// [`MovieRestClientError::NotFound`]; write-shaped ones with
/// [`MovieRestClientError::NotCreated`], whatever the status code was.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRestClient: Send + Sync {
    async fn get_all_movies(&self) -> Result<Vec<Movie>, MovieRestClientError>;

    async fn get_movie_by_id(&self, movie_id: i64) -> Result<Movie, MovieRestClientError>;

    async fn get_movie_by_name(
        &self,
        movie_name: &str,
    ) -> Result<Vec<Movie>, MovieRestClientError>;

    async fn get_movie_by_year(&self, year: i32) -> Result<Vec<Movie>, MovieRestClientError>;

    async fn create_movie(&self, movie: &Movie) -> Result<Movie, MovieRestClientError>;

    async fn update_movie(
        &self,
        movie_id: i64,
        movie: &Movie,
    ) -> Result<Movie, MovieRestClientError>;

    async fn delete_movie(&self, movie_id: i64) -> Result<String, MovieRestClientError>;

    async fn delete_movie_by_name(
        &self,
        movie_name: &str,
    ) -> Result<String, MovieRestClientError>;
}
