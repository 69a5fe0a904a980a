use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use handle_errors::Error;

use crate::types::{
    category::{Category, CategoryId},
    question::{NewQuestion, Question, QuestionId},
};

#[derive(Debug, Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Self {
        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => panic!("Couldn't establish DB connection: {}", e),
        };

        Store {
            connection: db_pool,
        }
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, Error> {
        match sqlx::query("SELECT * from categories ORDER BY id")
            .map(|row: PgRow| Category {
                id: CategoryId(row.get("id")),
                kind: row.get("type"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(categories) => Ok(categories),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_category(&self, category_id: i32) -> Result<Option<Category>, Error> {
        match sqlx::query("SELECT * from categories WHERE id = $1")
            .bind(category_id)
            .map(|row: PgRow| Category {
                id: CategoryId(row.get("id")),
                kind: row.get("type"),
            })
            .fetch_optional(&self.connection)
            .await
        {
            Ok(category) => Ok(category),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_questions(&self) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions ORDER BY id")
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_questions_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions WHERE category = $1 ORDER BY id")
            .bind(category_id)
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions WHERE question ILIKE $1 ORDER BY id")
            .bind(format!("%{}%", term))
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn add_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        match sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty",
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .map(|row: PgRow| Question {
            id: QuestionId(row.get("id")),
            question: row.get("question"),
            answer: row.get("answer"),
            category: row.get("category"),
            difficulty: row.get("difficulty"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(question) => Ok(question),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    /// Returns false when no row carried the given id.
    pub async fn delete_question(&self, question_id: i32) -> Result<bool, Error> {
        match sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.connection)
            .await
        {
            Ok(result) => Ok(result.rows_affected() == 1),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn count_questions(&self) -> Result<i64, Error> {
        match sqlx::query("SELECT COUNT(*) from questions")
            .map(|row: PgRow| row.get::<i64, _>("count"))
            .fetch_one(&self.connection)
            .await
        {
            Ok(count) => Ok(count),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }
}
