use std::fmt::Display;

pub const GET_ALL_MOVIES: &str = "/movieservice/v1/allMovies";
pub const MOVIE_BY_ID: &str = "/movieservice/v1/movie/{id}";
pub const MOVIE_BY_NAME: &str = "/movieservice/v1/movieName";
pub const CREATE_MOVIE: &str = "/movieservice/v1/movie";
pub const MOVIE_BY_YEAR: &str = "/movieservice/v1/movieYear";

pub const MOVIE_NAME_PARAM: &str = "movie_name";
pub const YEAR_PARAM: &str = "year";

pub const MOVIE_DELETED_BY_NAME: &str = "Movie Deleted Successfully";

pub(crate) fn url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

pub(crate) fn with_id(template: &str, id: impl Display) -> String {
    template.replace("{id}", &id.to_string())
}
