use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Filtro de dificultad del quiz ("any" deja pasar todo).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelFilter {
    Any,
    Only(Difficulty),
}

impl LevelFilter {
    pub const ALL: [LevelFilter; 4] = [
        LevelFilter::Any,
        LevelFilter::Only(Difficulty::Easy),
        LevelFilter::Only(Difficulty::Medium),
        LevelFilter::Only(Difficulty::Hard),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LevelFilter::Any => "any",
            LevelFilter::Only(d) => d.label(),
        }
    }

    pub fn accepts(&self, level: Difficulty) -> bool {
        match self {
            LevelFilter::Any => true,
            LevelFilter::Only(d) => *d == level,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizQuestion {
    pub subject: String,
    pub question: String, // Enunciado
    pub options: Vec<String>,
    pub answer: String, // Debe coincidir exactamente con una opción
    #[serde(default = "default_level")]
    pub level: Difficulty,
}

fn default_level() -> Difficulty {
    Difficulty::Easy
}

/// Un intento de quiz terminado, tal y como se guarda en scores.json.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoreRecord {
    pub subject: String,
    pub level: String,
    pub score: u32,
    pub total: u32,
    pub timestamp: String,
}

/// Entrada de users.json: solo el digest SHA-256 en hex, nunca el plaintext.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserRecord {
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudyPlanItem {
    pub label: String,
    pub hours: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Home,
    AskDoubt,
    Quiz,
    Planner,
    Progress,
    Motivation,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
