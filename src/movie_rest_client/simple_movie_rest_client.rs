use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::client_settings::ClientSettings;
use crate::http_client::{
    http_client::HttpClient,
    reqwest_http_client::ReqwestHttpClient,
    request::{Request, RequestMethod},
    response::Response,
};
use crate::movie::Movie;
use crate::movie_rest_client::{
    endpoints::{
        self, CREATE_MOVIE, GET_ALL_MOVIES, MOVIE_BY_ID, MOVIE_BY_NAME, MOVIE_BY_YEAR,
        MOVIE_DELETED_BY_NAME, MOVIE_NAME_PARAM, YEAR_PARAM,
    },
    movie_rest_client::MovieRestClient,
    movie_rest_client_error::{Failure, MovieRestClientError, OperationShape},
};

#[derive(Clone)]
pub struct SimpleMovieRestClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl SimpleMovieRestClient {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, reqwest::Error> {
        let http_client = ReqwestHttpClient::from_settings(settings)?;

        Ok(Self::new(Arc::new(http_client), settings.base_url.clone()))
    }

    fn request(&self, method: RequestMethod, path: &str) -> Request {
        Request::new(method, endpoints::url(&self.base_url, path))
    }

    fn json_request(
        &self,
        shape: OperationShape,
        method: RequestMethod,
        path: &str,
        movie: &Movie,
    ) -> Result<Request, MovieRestClientError> {
        let body = serde_json::to_vec(movie).map_err(|err| {
            error!(%method, path, "Unable to encode {:?}: {err}", movie);
            shape.fail(Failure::encode(err))
        })?;

        Ok(self.request(method, path).with_json_body(body))
    }

    async fn send(
        &self,
        shape: OperationShape,
        request: Request,
    ) -> Result<Response, MovieRestClientError> {
        let method = request.method;
        let url = request.url.clone();

        let response = self.http_client.execute(request).await.map_err(|err| {
            error!(%method, %url, "Movie service unreachable: {err}");
            shape.fail(Failure::transport(err))
        })?;

        if !response.is_success() {
            let failure = Failure::from_response(&response);
            error!(
                %method,
                %url,
                status = response.status,
                "Movie service rejected the call, status text {:?} and the message is {}",
                failure.status_text,
                failure.body
            );
            return Err(shape.fail(failure));
        }

        debug!(%method, %url, status = response.status, "Movie service answered");
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(
        shape: OperationShape,
        response: &Response,
    ) -> Result<T, MovieRestClientError> {
        serde_json::from_slice(&response.body).map_err(|err| {
            error!(status = response.status, "Malformed movie service body: {err}");
            shape.fail(Failure::decode(response, err))
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T, MovieRestClientError> {
        let response = self.send(OperationShape::Read, request).await?;
        Self::decode(OperationShape::Read, &response)
    }
}

#[async_trait]
impl MovieRestClient for SimpleMovieRestClient {
    async fn get_all_movies(&self) -> Result<Vec<Movie>, MovieRestClientError> {
        self.fetch(self.request(RequestMethod::Get, GET_ALL_MOVIES))
            .await
    }

    async fn get_movie_by_id(&self, movie_id: i64) -> Result<Movie, MovieRestClientError> {
        let path = endpoints::with_id(MOVIE_BY_ID, movie_id);
        self.fetch(self.request(RequestMethod::Get, &path)).await
    }

    async fn get_movie_by_name(
        &self,
        movie_name: &str,
    ) -> Result<Vec<Movie>, MovieRestClientError> {
        let request = self
            .request(RequestMethod::Get, MOVIE_BY_NAME)
            .with_query(MOVIE_NAME_PARAM, movie_name);
        self.fetch(request).await
    }

    async fn get_movie_by_year(&self, year: i32) -> Result<Vec<Movie>, MovieRestClientError> {
        let request = self
            .request(RequestMethod::Get, MOVIE_BY_YEAR)
            .with_query(YEAR_PARAM, year);
        self.fetch(request).await
    }

    async fn create_movie(&self, movie: &Movie) -> Result<Movie, MovieRestClientError> {
        let shape = OperationShape::Write;
        let request = self.json_request(shape, RequestMethod::Post, CREATE_MOVIE, movie)?;
        let response = self.send(shape, request).await?;
        Self::decode(shape, &response)
    }

    async fn update_movie(
        &self,
        movie_id: i64,
        movie: &Movie,
    ) -> Result<Movie, MovieRestClientError> {
        let shape = OperationShape::Write;
        let path = endpoints::with_id(MOVIE_BY_ID, movie_id);
        let request = self.json_request(shape, RequestMethod::Put, &path, movie)?;
        let response = self.send(shape, request).await?;
        Self::decode(shape, &response)
    }

    async fn delete_movie(&self, movie_id: i64) -> Result<String, MovieRestClientError> {
        let path = endpoints::with_id(MOVIE_BY_ID, movie_id);
        let response = self
            .send(OperationShape::Write, self.request(RequestMethod::Delete, &path))
            .await?;
        Ok(response.body_text())
    }

    async fn delete_movie_by_name(
        &self,
        movie_name: &str,
    ) -> Result<String, MovieRestClientError> {
        let request = self
            .request(RequestMethod::Delete, MOVIE_BY_NAME)
            .with_query(MOVIE_NAME_PARAM, movie_name);
        self.send(OperationShape::Read, request).await?;
        Ok(MOVIE_DELETED_BY_NAME.to_string())
    }
}
