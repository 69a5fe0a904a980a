//! End-to-end tests against a running instance. They need a server on
//! localhost:8000 backed by a migrated database, so they are ignored by
//! default: cargo test -- --ignored

use serde_json::{Value, json};

use trivia::routes::category::{CategoryListResponse, CategoryQuestionsResponse};
use trivia::routes::question::{QuestionCreatedResponse, QuestionDeletedResponse};
use trivia::routes::quiz::QuizResponse;

const BASE_URL: &str = "http://localhost:8000";

#[tokio::test]
#[ignore]
async fn lists_seeded_categories() {
    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/categories", BASE_URL))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: CategoryListResponse = res.json().await.unwrap();
    assert!(body.success);
    assert!(!body.categories.is_empty());
}

#[tokio::test]
#[ignore]
async fn creates_and_deletes_a_question() {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/questions", BASE_URL))
        .json(&json!({
            "question": "Which planet is closest to the sun?",
            "answer": "Mercury",
            "category": 1,
            "difficulty": 2
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let created: QuestionCreatedResponse = res.json().await.unwrap();
    assert!(created.success);

    let res = client
        .delete(format!("{}/questions?id={}", BASE_URL, created.created))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let deleted: QuestionDeletedResponse = res.json().await.unwrap();
    assert!(deleted.success);
    assert_eq!(deleted.deleted, created.created);
}

#[tokio::test]
#[ignore]
async fn creating_a_question_without_text_is_422() {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/questions", BASE_URL))
        .json(&json!({
            "answer": "Mercury",
            "category": 1,
            "difficulty": 2
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);
}

#[tokio::test]
#[ignore]
async fn create_honors_the_page_parameter() {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/questions?page=999999", BASE_URL))
        .json(&json!({
            "question": "What is the heaviest organ in the human body?",
            "answer": "The liver",
            "category": 1,
            "difficulty": 4
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let created: QuestionCreatedResponse = res.json().await.unwrap();
    assert!(created.success);
    // A page far past the end is an empty window, not an error.
    assert!(created.questions.is_empty());

    client
        .delete(format!("{}/questions?id={}", BASE_URL, created.created))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn filters_questions_by_category() {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/questions", BASE_URL))
        .json(&json!({
            "question": "La Giaconda is better known as what?",
            "answer": "Mona Lisa",
            "category": 2,
            "difficulty": 3
        }))
        .send()
        .await
        .unwrap();
    let created: QuestionCreatedResponse = res.json().await.unwrap();

    let res = client
        .get(format!("{}/categories/2/questions", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: CategoryQuestionsResponse = res.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.current_category.id.0, 2);
    assert_eq!(body.current_category.kind, "Art");
    assert!(body.questions.iter().all(|q| q.category == 2));
    assert!(body.total_questions >= 1);

    client
        .delete(format!("{}/questions?id={}", BASE_URL, created.created))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn unknown_category_is_404() {
    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/categories/999999/questions", BASE_URL))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
#[ignore]
async fn deleting_an_unknown_question_is_404() {
    let client = reqwest::Client::new();
    let res = client
        .delete(format!("{}/questions?id=999999", BASE_URL))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
#[ignore]
async fn search_without_a_term_is_400() {
    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/searchQuestions", BASE_URL))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], 400);
}

#[tokio::test]
#[ignore]
async fn search_is_case_insensitive() {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/questions", BASE_URL))
        .json(&json!({
            "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "answer": "Maya Angelou",
            "category": 4,
            "difficulty": 2
        }))
        .send()
        .await
        .unwrap();
    let created: QuestionCreatedResponse = res.json().await.unwrap();

    let res = client
        .get(format!("{}/searchQuestions?q=CAGED", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert!(body["total_questions"].as_i64().unwrap() >= 1);
    assert_eq!(body["current_category"], 0);

    client
        .delete(format!("{}/questions?id={}", BASE_URL, created.created))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn out_of_range_page_is_404() {
    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/questions?page=100000", BASE_URL))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
}

#[tokio::test]
#[ignore]
async fn quiz_round_never_repeats_a_question() {
    let client = reqwest::Client::new();
    let mut previous: Vec<i32> = Vec::new();

    loop {
        let res = client
            .post(format!("{}/quizzes", BASE_URL))
            .json(&json!({
                "quiz_category": {"id": 1, "type": "Science"},
                "previous_questions": previous
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);

        let body: QuizResponse = res.json().await.unwrap();
        assert!(body.success);
        match body.question {
            Some(question) => {
                assert!(!previous.contains(&question.id.0));
                assert_eq!(question.category, 1);
                previous.push(question.id.0);
            }
            None => break,
        }
    }
}

#[tokio::test]
#[ignore]
async fn malformed_quiz_body_is_422() {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/quizzes", BASE_URL))
        .header("Content-Type", "application/json")
        .body("{\"quiz_category\": \"Science\"}")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
}
