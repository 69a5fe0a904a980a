#![warn(clippy::all)]

use handle_errors::return_error;
use warp::{Filter, http::Method};

pub mod config;
pub mod quiz;
pub mod routes;
pub mod store;
pub mod types;

use store::Store;

/// Assembles the complete filter chain: every endpoint, CORS, request
/// tracing and the rejection handler. Kept out of main so tests can mount
/// the same tree.
pub fn build_routes(
    store: Store,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("Content-Type")
        .allow_methods(&[Method::GET, Method::POST, Method::DELETE]);

    let get_categories = warp::get()
        .and(warp::path("categories"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::category::get_categories);

    let get_questions_by_category = warp::get()
        .and(warp::path("categories"))
        .and(warp::path::param::<i32>())
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::category::get_questions_by_category);

    let get_questions = warp::get()
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::question::get_questions)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "get_questions request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let add_question = warp::post()
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::question::add_question);

    // The frontend sends the id as a query parameter, not a path segment.
    let delete_question = warp::delete()
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::question::delete_question);

    let search_questions = warp::get()
        .and(warp::path("searchQuestions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::question::search_questions);

    // Same handler; the search form submits via POST but the term still
    // travels in the query string.
    let search_questions_post = warp::post()
        .and(warp::path("searchQuestions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::question::search_questions);

    let get_quiz_question = warp::post()
        .and(warp::path("quizzes"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::quiz::get_quiz_question);

    get_categories
        .or(get_questions_by_category)
        .or(get_questions)
        .or(add_question)
        .or(delete_question)
        .or(search_questions)
        .or(search_questions_post)
        .or(get_quiz_question)
        .with(cors)
        .with(warp::trace::request())
        .recover(return_error)
}
