use serde::Serialize;
use warp::{
    Rejection, Reply,
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
};

use tracing::{Level, event, instrument};

#[derive(Debug)]
pub enum Error {
    ParseError(std::num::ParseIntError),
    MissingParameters,
    MissingSearchTerm,
    QuestionNotFound,
    CategoryNotFound,
    PageNotFound,
    DatabaseQueryError(sqlx::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &*self {
            Error::ParseError(err) => {
                write!(f, "Cannot parse parameter: {}", err)
            }
            Error::MissingParameters => {
                write!(f, "Missing parameters")
            }
            Error::MissingSearchTerm => {
                write!(f, "Missing search term")
            }
            Error::QuestionNotFound => {
                write!(f, "Question not found")
            }
            Error::CategoryNotFound => {
                write!(f, "Category not found")
            }
            Error::PageNotFound => {
                write!(f, "Resource not found")
            }
            Error::DatabaseQueryError(_) => {
                write!(f, "Cannot update, invalid data.")
            }
        }
    }
}

impl Reject for Error {}

/// Body returned for every failed request:
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

fn json_error(status: StatusCode, message: String) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorResponse {
            success: false,
            error: status.as_u16(),
            message,
        }),
        status,
    )
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(error) = r.find::<Error>() {
        event!(Level::ERROR, "{}", error);
        let status = match error {
            Error::QuestionNotFound | Error::CategoryNotFound | Error::PageNotFound => {
                StatusCode::NOT_FOUND
            }
            Error::MissingSearchTerm => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Ok(json_error(status, error.to_string()))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "CORS forbidden error: {}", error);
        Ok(json_error(StatusCode::FORBIDDEN, error.to_string()))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::ERROR, "Cannot deserialize request body: {}", error);
        Ok(json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            error.to_string(),
        ))
    } else {
        event!(Level::WARN, "Requested route was not found");
        Ok(json_error(
            StatusCode::NOT_FOUND,
            "Route not found".to_string(),
        ))
    }
}
