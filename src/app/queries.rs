use super::*;
use crate::model::ScoreRecord;

impl EduApp {
    /// Historial del usuario logueado, el intento más reciente primero.
    pub fn user_history(&self) -> Vec<ScoreRecord> {
        let Some(user) = &self.current_user else {
            return Vec::new();
        };
        let mut records = self
            .stores
            .load_scores()
            .remove(user)
            .unwrap_or_default();
        records.reverse();
        records
    }

    /// Media de aciertos por asignatura del usuario logueado.
    pub fn average_by_subject(&self) -> Vec<(String, f32)> {
        let mut sums: Vec<(String, u32, u32)> = Vec::new();
        for r in self.user_history() {
            match sums.iter_mut().find(|(s, _, _)| *s == r.subject) {
                Some((_, total, count)) => {
                    *total += r.score;
                    *count += 1;
                }
                None => sums.push((r.subject, r.score, 1)),
            }
        }
        sums.into_iter()
            .map(|(subject, total, count)| (subject, total as f32 / count as f32))
            .collect()
    }

    /// Contador de la pantalla Home: intentos del usuario, o totales si nadie
    /// ha iniciado sesión.
    pub fn quizzes_taken(&self) -> usize {
        let scores = self.stores.load_scores();
        match &self.current_user {
            Some(user) => scores.get(user).map_or(0, Vec::len),
            None => scores.values().map(Vec::len).sum(),
        }
    }

    pub fn doubts_asked(&self) -> usize {
        self.stores.doubt_count()
    }
}
