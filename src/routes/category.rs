use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::instrument;

use crate::store::Store;
use crate::types::category::Category;
use crate::types::pagination::{QUESTIONS_PER_PAGE, extract_pagination, paginate};
use crate::types::question::Question;

use handle_errors::Error;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: Category,
}

#[instrument]
pub async fn get_categories(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    match store.get_categories().await {
        Ok(categories) => Ok(warp::reply::json(&CategoryListResponse {
            success: true,
            categories,
        })),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

#[instrument]
pub async fn get_questions_by_category(
    category_id: i32,
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    let current_category = match store.get_category(category_id).await {
        Ok(Some(category)) => category,
        Ok(None) => return Err(warp::reject::custom(Error::CategoryNotFound)),
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let questions = match store.get_questions_by_category(category_id).await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };
    let categories = match store.get_categories().await {
        Ok(categories) => categories,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let pagination = extract_pagination(&params);
    // total_questions counts every match in the category, not just the page.
    let total_questions = questions.len() as i64;
    let current_questions = paginate(&questions, pagination.page, QUESTIONS_PER_PAGE);
    if current_questions.is_empty() {
        return Err(warp::reject::custom(Error::PageNotFound));
    }

    Ok(warp::reply::json(&CategoryQuestionsResponse {
        success: true,
        questions: current_questions.to_vec(),
        total_questions,
        categories,
        current_category,
    }))
}
