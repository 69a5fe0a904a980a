use std::collections::HashSet;

use rand::Rng;

use crate::types::question::Question;

/// Pick one question the player has not seen yet, uniformly at random.
/// `candidates` are already restricted to the requested category by the
/// store query; here we only drop previously played ids. `None` signals the
/// quiz is complete.
pub fn pick_question(candidates: Vec<Question>, previous: &HashSet<i32>) -> Option<Question> {
    let mut remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|question| !previous.contains(&question.id.0))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let index = rand::thread_rng().gen_range(0..remaining.len());
    Some(remaining.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::question::QuestionId;

    fn question(id: i32) -> Question {
        Question {
            id: QuestionId(id),
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category: 1,
            difficulty: 2,
        }
    }

    #[test]
    fn never_returns_a_previous_question() {
        let candidates: Vec<Question> = (1..=5).map(question).collect();
        let previous: HashSet<i32> = [1, 2, 4].into_iter().collect();

        for _ in 0..50 {
            let picked = pick_question(candidates.clone(), &previous).unwrap();
            assert!(!previous.contains(&picked.id.0));
        }
    }

    #[test]
    fn empty_previous_set_filters_nothing() {
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        let picked = pick_question(candidates, &HashSet::new()).unwrap();
        assert!((1..=3).contains(&picked.id.0));
    }

    #[test]
    fn none_when_all_questions_were_played() {
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        let previous: HashSet<i32> = [1, 2, 3].into_iter().collect();
        assert!(pick_question(candidates, &previous).is_none());
    }

    #[test]
    fn none_when_no_candidates_exist() {
        assert!(pick_question(Vec::new(), &HashSet::new()).is_none());
    }

    #[test]
    fn growing_previous_set_walks_every_question_once() {
        let candidates: Vec<Question> = (1..=6).map(question).collect();
        let mut previous = HashSet::new();

        for _ in 0..6 {
            let picked = pick_question(candidates.clone(), &previous).unwrap();
            assert!(previous.insert(picked.id.0), "question repeated");
        }
        assert!(pick_question(candidates, &previous).is_none());
    }
}
