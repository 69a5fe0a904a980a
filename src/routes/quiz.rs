use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::quiz::pick_question;
use crate::store::Store;
use crate::types::question::Question;
use crate::types::quiz::QuizRequest;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once every eligible question has been played.
    pub question: Option<Question>,
}

#[instrument]
pub async fn get_quiz_question(
    store: Store,
    request: QuizRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let candidates = match request.category_id() {
        Some(category_id) => store.get_questions_by_category(category_id).await,
        None => store.get_questions().await,
    };
    let candidates = match candidates {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let previous: HashSet<i32> = request.previous_questions.iter().copied().collect();

    Ok(warp::reply::json(&QuizResponse {
        success: true,
        question: pick_question(candidates, &previous),
    }))
}
