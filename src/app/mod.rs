use crate::data::{read_questions_embedded, subjects};
use crate::model::{AppState, LevelFilter, QuizQuestion, StudyPlanItem};
use crate::storage::Stores;

// Submódulos
pub mod actions;
pub mod auth;
pub mod queries;
pub mod session;

/// Sesión de quiz en curso: efímera, solo en memoria. Invariantes:
/// `answers.len() == questions.len()` y `current < questions.len()`.
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub answers: Vec<Option<String>>,
    pub current: usize,
}

pub struct EduApp {
    pub stores: Stores,
    pub bank: Vec<QuizQuestion>,
    pub subjects: Vec<String>,
    pub state: AppState,
    pub current_user: Option<String>,
    pub session: Option<QuizSession>,
    pub message: String,

    // Campos de formularios de las vistas
    pub login_username: String,
    pub login_password: String,
    pub signup_username: String,
    pub signup_password: String,
    pub doubt_input: String,
    pub doubt_answer: Option<String>,
    pub quiz_subject: String,
    pub quiz_level: LevelFilter,
    pub plan_subject: String,
    pub plan_hours: u32,
    pub plan: Vec<StudyPlanItem>,
    pub quote: Option<&'static str>,
}

impl EduApp {
    /// Ficheros de datos en el directorio de trabajo.
    pub fn new() -> Self {
        Self::with_stores(Stores::new("."))
    }

    pub fn with_stores(stores: Stores) -> Self {
        let bank = read_questions_embedded();
        let subjects = subjects(&bank);
        let first_subject = subjects.first().cloned().unwrap_or_default();

        Self {
            stores,
            bank,
            subjects,
            state: AppState::Home,
            current_user: None,
            session: None,
            message: String::new(),
            login_username: String::new(),
            login_password: String::new(),
            signup_username: String::new(),
            signup_password: String::new(),
            doubt_input: String::new(),
            doubt_answer: None,
            quiz_subject: first_subject.clone(),
            quiz_level: LevelFilter::Any,
            plan_subject: first_subject,
            plan_hours: 1,
            plan: Vec::new(),
            quote: None,
        }
    }
}

impl Default for EduApp {
    fn default() -> Self {
        Self::new()
    }
}
