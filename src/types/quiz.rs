use serde::{Deserialize, Serialize};

/// Category selection as the quiz frontend sends it. The `type` label rides
/// along with the id but only the id matters for filtering.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizCategory {
    pub id: i32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Request body for `POST /quizzes`, parsed once at the boundary. A missing
/// `quiz_category` or an empty `previous_questions` list are both legal.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

impl QuizRequest {
    /// The category to restrict candidates to, if any. The frontend encodes
    /// "All" as the pseudo-category with id 0 and type "click"; both mean no
    /// filter.
    pub fn category_id(&self) -> Option<i32> {
        match &self.quiz_category {
            Some(category) if category.id != 0 && category.kind.as_deref() != Some("click") => {
                Some(category.id)
            }
            _ => None,
        }
    }
}
