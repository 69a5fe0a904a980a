use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct QuestionId(pub i32);

/// Questions are immutable once created, so this is the only write shape.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
