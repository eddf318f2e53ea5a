pub mod client_settings;
pub mod http_client;
pub mod movie;
pub mod movie_rest_client;

pub use client_settings::{ClientBuildError, ClientSettings};
pub use movie::Movie;
pub use movie_rest_client::{
    blocking_movie_rest_client::BlockingMovieRestClient,
    movie_rest_client::MovieRestClient,
    movie_rest_client_error::{Failure, FailureCause, MovieRestClientError},
    simple_movie_rest_client::SimpleMovieRestClient,
};
