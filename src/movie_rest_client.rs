pub mod blocking_movie_rest_client;
pub mod endpoints;
pub mod movie_rest_client;
pub mod movie_rest_client_error;
pub mod simple_movie_rest_client;
