use crate::api;
use crate::domain::{Genre, MovieDetail, MovieSummary, ProductionCompany, SpokenLanguage};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::movies::list_movies,
        api::movies::get_movie,
        api::movies::search_movies,
    ),
    components(
        schemas(MovieSummary, MovieDetail, Genre, SpokenLanguage, ProductionCompany)
    ),
    tags(
        (name = "movie-browser", description = "Movie Browser API")
    )
)]
pub struct ApiDoc;
