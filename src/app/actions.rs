use rand::seq::SliceRandom;

use super::*;
use crate::doubt;
use crate::planner::create_study_plan;

const QUOTES: [&str; 5] = [
    "Believe you can and you're halfway there.",
    "Don't stop until you're proud.",
    "Small steps every day lead to big results.",
    "Hard work beats talent when talent doesn't work hard.",
    "Success is the sum of small efforts repeated daily.",
];

impl EduApp {
    /// Cambio de pantalla desde el menú superior.
    pub fn go_to(&mut self, state: AppState) {
        if state == self.state {
            return;
        }
        self.state = state;
        self.message.clear();
        if state == AppState::Motivation {
            self.new_quote();
        }
    }

    /// Registra la duda en el log y después la responde con el motor de reglas.
    /// La duda se guarda siempre, responda lo que responda el motor.
    pub fn submit_doubt(&mut self) {
        let question = self.doubt_input.trim().to_string();
        if question.is_empty() {
            self.message = "⚠ Please type a question.".into();
            return;
        }

        if let Err(err) = self.stores.append_doubt(&question) {
            log::error!("No se pudo registrar la duda: {err}");
        }
        self.doubt_answer = Some(doubt::answer(&question));
        self.message.clear();
    }

    pub fn make_plan(&mut self) {
        self.plan = create_study_plan(self.plan_hours, &self.plan_subject);
        self.message.clear();
    }

    pub fn new_quote(&mut self) {
        self.quote = QUOTES.choose(&mut rand::thread_rng()).copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Stores;

    fn temp_app(tag: &str) -> EduApp {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("reloj ok")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("edu_agent_{tag}_{}_{nanos}", std::process::id()));
        EduApp::with_stores(Stores::new(dir))
    }

    #[test]
    fn submit_doubt_logs_before_answering() {
        let mut app = temp_app("doubt_log");
        app.doubt_input = "asdkjasd".into();
        app.submit_doubt();

        // Se registra aunque solo haya respuesta de fallback
        assert_eq!(app.stores.doubt_count(), 1);
        assert_eq!(app.doubt_answer.as_deref(), Some(doubt::FALLBACK_ANSWER));
    }

    #[test]
    fn empty_doubt_is_rejected_and_not_logged() {
        let mut app = temp_app("doubt_empty");
        app.doubt_input = "   ".into();
        app.submit_doubt();
        assert_eq!(app.stores.doubt_count(), 0);
        assert!(app.message.contains("type a question"));
    }

    #[test]
    fn make_plan_follows_hours_rule_table() {
        let mut app = temp_app("plan");
        app.plan_subject = "Science".into();
        app.plan_hours = 2;
        app.make_plan();
        assert_eq!(app.plan.len(), 3);
    }

    #[test]
    fn motivation_quote_comes_from_the_fixed_set() {
        let mut app = temp_app("quote");
        app.go_to(AppState::Motivation);
        let quote = app.quote.expect("hay cita");
        assert!(QUOTES.contains(&quote));
    }
}
