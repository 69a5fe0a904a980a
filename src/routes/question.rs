use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{Level, event, instrument};

use crate::store::Store;
use crate::types::category::Category;
use crate::types::pagination::{QUESTIONS_PER_PAGE, extract_pagination, paginate};
use crate::types::question::{NewQuestion, Question};

use handle_errors::Error;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: Option<Category>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    // The quiz frontend expects the literal 0 here instead of null.
    pub current_category: i32,
}

#[instrument]
pub async fn get_questions(
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    event!(target: "trivia", Level::INFO, "querying questions");
    let pagination = extract_pagination(&params);

    let questions = match store.get_questions().await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };
    let total_questions = match store.count_questions().await {
        Ok(count) => count,
        Err(e) => return Err(warp::reject::custom(e)),
    };
    let categories = match store.get_categories().await {
        Ok(categories) => categories,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let current_questions = paginate(&questions, pagination.page, QUESTIONS_PER_PAGE);
    if current_questions.is_empty() {
        return Err(warp::reject::custom(Error::PageNotFound));
    }

    Ok(warp::reply::json(&QuestionListResponse {
        success: true,
        questions: current_questions.to_vec(),
        total_questions,
        categories,
        current_category: None,
    }))
}

pub async fn add_question(
    params: HashMap<String, String>,
    store: Store,
    new_question: NewQuestion,
) -> Result<impl warp::Reply, warp::Rejection> {
    let question = match store.add_question(new_question).await {
        Ok(question) => question,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let pagination = extract_pagination(&params);
    let questions = match store.get_questions().await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };
    let total_questions = match store.count_questions().await {
        Ok(count) => count,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    Ok(warp::reply::json(&QuestionCreatedResponse {
        success: true,
        created: question.id.0,
        questions: paginate(&questions, pagination.page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions,
    }))
}

/// The id to delete arrives as a query parameter: `DELETE /questions?id=5`.
pub async fn delete_question(
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    let id = params
        .get("id")
        .ok_or(Error::MissingParameters)?
        .parse::<i32>()
        .map_err(Error::ParseError)?;

    match store.delete_question(id).await {
        Ok(true) => (),
        Ok(false) => return Err(warp::reject::custom(Error::QuestionNotFound)),
        Err(e) => return Err(warp::reject::custom(e)),
    }

    let pagination = extract_pagination(&params);
    let questions = match store.get_questions().await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };
    let total_questions = match store.count_questions().await {
        Ok(count) => count,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    Ok(warp::reply::json(&QuestionDeletedResponse {
        success: true,
        deleted: id,
        questions: paginate(&questions, pagination.page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions,
    }))
}

/// Serves both GET and POST on /searchQuestions; the term always comes from
/// the `q` query parameter.
#[instrument]
pub async fn search_questions(
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    let term = match params.get("q") {
        Some(term) if !term.is_empty() => term,
        _ => return Err(warp::reject::custom(Error::MissingSearchTerm)),
    };

    let matches = match store.search_questions(term).await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    // Zero matches is a valid, empty result page.
    let pagination = extract_pagination(&params);
    let total_questions = matches.len() as i64;

    Ok(warp::reply::json(&SearchResponse {
        questions: paginate(&matches, pagination.page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions,
        current_category: 0,
    }))
}
