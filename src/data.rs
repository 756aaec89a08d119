// src/data.rs

use crate::model::{LevelFilter, QuizQuestion};

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<QuizQuestion> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

/// Asignaturas en el orden en que aparecen en el banco, sin duplicados.
pub fn subjects(bank: &[QuizQuestion]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for q in bank {
        if !out.iter().any(|s| s == &q.subject) {
            out.push(q.subject.clone());
        }
    }
    out
}

/// Pool del quiz: preguntas de la asignatura que pasan el filtro de nivel.
pub fn filter_pool<'a>(
    bank: &'a [QuizQuestion],
    subject: &str,
    level: LevelFilter,
) -> Vec<&'a QuizQuestion> {
    bank.iter()
        .filter(|q| q.subject == subject && level.accepts(q.level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn embedded_bank_parses_and_is_consistent() {
        let bank = read_questions_embedded();
        assert!(!bank.is_empty());
        for q in &bank {
            assert!(
                q.options.contains(&q.answer),
                "la respuesta '{}' no está entre las opciones de '{}'",
                q.answer,
                q.question
            );
            let mut seen = std::collections::HashSet::new();
            for opt in &q.options {
                assert!(seen.insert(opt), "opción duplicada en '{}'", q.question);
            }
        }
    }

    #[test]
    fn subjects_keeps_bank_order_without_duplicates() {
        let bank = read_questions_embedded();
        let subs = subjects(&bank);
        assert_eq!(subs, vec!["Math", "Science", "English"]);
    }

    #[test]
    fn filter_pool_respects_subject_and_level() {
        let bank = read_questions_embedded();
        let pool = filter_pool(&bank, "Math", LevelFilter::Only(Difficulty::Hard));
        assert!(!pool.is_empty());
        for q in pool {
            assert_eq!(q.subject, "Math");
            assert_eq!(q.level, Difficulty::Hard);
        }
        let any = filter_pool(&bank, "Science", LevelFilter::Any);
        assert!(any.len() >= filter_pool(&bank, "Science", LevelFilter::Only(Difficulty::Easy)).len());
    }
}
