use chrono::Local;
use rand::seq::SliceRandom;

use super::*;
use crate::data::filter_pool;
use crate::model::ScoreRecord;

/// Tamaño máximo de un quiz; con menos preguntas en el pool se usan todas.
pub const QUIZ_SIZE: usize = 5;

impl EduApp {
    /// Arranca una sesión nueva: muestreo uniforme sin reemplazo del pool
    /// filtrado por asignatura y nivel. Pool vacío = sin sesión.
    pub fn start_quiz(&mut self) {
        let pool = filter_pool(&self.bank, &self.quiz_subject, self.quiz_level);
        let n = QUIZ_SIZE.min(pool.len());
        if n == 0 {
            self.session = None;
            self.message = "⚠ No questions available for this subject/level.".into();
            return;
        }

        let questions: Vec<QuizQuestion> = pool
            .choose_multiple(&mut rand::thread_rng(), n)
            .map(|q| (*q).clone())
            .collect();

        self.session = Some(QuizSession {
            answers: vec![None; questions.len()],
            questions,
            current: 0,
        });
        self.message.clear();
    }

    /// Registra la opción elegida para la pregunta actual. Sin comprobar
    /// corrección: eso solo ocurre en submit.
    pub fn select_answer(&mut self, choice: String) {
        if let Some(session) = &mut self.session {
            let q = &session.questions[session.current];
            if q.options.contains(&choice) {
                session.answers[session.current] = Some(choice);
            }
        }
    }

    pub fn prev_question(&mut self) {
        if let Some(session) = &mut self.session {
            session.current = session.current.saturating_sub(1);
        }
    }

    pub fn next_question(&mut self) {
        if let Some(session) = &mut self.session {
            if session.current + 1 < session.questions.len() {
                session.current += 1;
            }
        }
    }

    /// Corrige, persiste un ScoreRecord y destruye la sesión.
    /// Sin sesión activa (p. ej. doble submit) es un no-op avisado.
    pub fn submit_quiz(&mut self) {
        let Some(session) = self.session.take() else {
            self.message = "⚠ No active quiz session.".into();
            return;
        };

        let score = session
            .questions
            .iter()
            .zip(&session.answers)
            .filter(|(q, a)| a.as_deref() == Some(q.answer.as_str()))
            .count() as u32;
        let total = session.questions.len() as u32;

        let user = self.current_user.clone().unwrap_or_else(|| "guest".into());
        let record = ScoreRecord {
            subject: self.quiz_subject.clone(),
            level: self.quiz_level.label().to_string(),
            score,
            total,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut scores = self.stores.load_scores();
        scores.entry(user).or_default().push(record);
        if let Err(err) = self.stores.save_scores(&scores) {
            log::error!("No se pudo guardar scores.json: {err}");
        }

        self.message = format!("🎉 Your Score: {score} / {total} — saved to your history.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use crate::storage::Stores;

    fn temp_app(tag: &str) -> EduApp {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("reloj ok")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("edu_agent_{tag}_{}_{nanos}", std::process::id()));
        EduApp::with_stores(Stores::new(dir))
    }

    fn mini_question(text: &str, answer: &str) -> QuizQuestion {
        QuizQuestion {
            subject: "Math".into(),
            question: text.into(),
            options: vec![answer.into(), "wrong".into()],
            answer: answer.into(),
            level: Difficulty::Easy,
        }
    }

    #[test]
    fn start_samples_at_most_five_distinct_questions() {
        let mut app = temp_app("sampling");
        app.quiz_subject = "Math".into();
        app.quiz_level = LevelFilter::Any;
        app.start_quiz();

        let session = app.session.as_ref().expect("sesión creada");
        assert_eq!(session.questions.len(), QUIZ_SIZE);
        assert_eq!(session.answers.len(), QUIZ_SIZE);
        assert_eq!(session.current, 0);

        let mut texts: Vec<&str> = session.questions.iter().map(|q| q.question.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), QUIZ_SIZE, "preguntas repetidas en la sesión");
    }

    #[test]
    fn small_pool_yields_the_whole_pool() {
        let mut app = temp_app("small_pool");
        app.bank = vec![
            mini_question("a", "1"),
            mini_question("b", "2"),
            mini_question("c", "3"),
        ];
        app.quiz_subject = "Math".into();
        app.start_quiz();

        let session = app.session.as_ref().expect("sesión creada");
        assert_eq!(session.questions.len(), 3);
        let mut texts: Vec<&str> = session.questions.iter().map(|q| q.question.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 3);
    }

    #[test]
    fn empty_pool_reports_and_creates_no_session() {
        let mut app = temp_app("empty_pool");
        app.quiz_subject = "History".into();
        app.start_quiz();
        assert!(app.session.is_none());
        assert!(app.message.contains("No questions available"));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut app = temp_app("nav");
        app.bank = vec![mini_question("a", "1"), mini_question("b", "2")];
        app.start_quiz();

        app.prev_question();
        assert_eq!(app.session.as_ref().expect("sesión").current, 0);

        app.next_question();
        assert_eq!(app.session.as_ref().expect("sesión").current, 1);
        app.next_question();
        assert_eq!(app.session.as_ref().expect("sesión").current, 1);
    }

    #[test]
    fn select_answer_ignores_foreign_choices() {
        let mut app = temp_app("select");
        app.bank = vec![mini_question("a", "1")];
        app.start_quiz();

        app.select_answer("no-es-opción".into());
        assert!(app.session.as_ref().expect("sesión").answers[0].is_none());

        app.select_answer("1".into());
        assert_eq!(
            app.session.as_ref().expect("sesión").answers[0].as_deref(),
            Some("1")
        );
    }

    #[test]
    fn submit_scores_exact_matches_and_persists_record() {
        let mut app = temp_app("submit");
        app.current_user = Some("ana".into());
        app.bank = vec![
            mini_question("a", "1"),
            mini_question("b", "2"),
            mini_question("c", "3"),
        ];
        app.quiz_subject = "Math".into();
        app.start_quiz();

        // Acierta la primera, falla la segunda, deja la tercera sin responder
        let first_answer = app.session.as_ref().expect("sesión").questions[0].answer.clone();
        app.select_answer(first_answer);
        app.next_question();
        app.select_answer("wrong".into());
        app.submit_quiz();

        assert!(app.session.is_none());
        assert!(app.message.contains("1 / 3"));

        let scores = app.stores.load_scores();
        let records = &scores["ana"];
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].score, 1);
        assert_eq!(records[0].total, 3);
        assert!(records[0].score <= records[0].total);
        assert_eq!(records[0].subject, "Math");
    }

    #[test]
    fn double_submit_is_a_noop_without_new_records() {
        let mut app = temp_app("double_submit");
        app.current_user = Some("ana".into());
        app.bank = vec![mini_question("a", "1")];
        app.start_quiz();
        app.submit_quiz();
        assert_eq!(app.stores.load_scores()["ana"].len(), 1);

        app.submit_quiz();
        assert!(app.message.contains("No active quiz session"));
        assert_eq!(app.stores.load_scores()["ana"].len(), 1);
    }
}
