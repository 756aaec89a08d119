use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use crate::model::{ScoreRecord, UserRecord};

pub const USERS_FILE: &str = "users.json";
pub const SCORES_FILE: &str = "scores.json";
pub const DOUBTS_FILE: &str = "doubts.csv";

/// Digest SHA-256 en hex del password en claro.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Ficheros planos del agente, todos bajo un mismo directorio de datos.
/// Cada load/save lee o reescribe el fichero completo.
pub struct Stores {
    dir: PathBuf,
}

impl Stores {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// username -> registro de credenciales. Fichero ausente o corrupto = vacío.
    pub fn load_users(&self) -> HashMap<String, UserRecord> {
        self.load_map(USERS_FILE)
    }

    pub fn save_users(&self, users: &HashMap<String, UserRecord>) -> std::io::Result<()> {
        self.save_map(USERS_FILE, users)
    }

    /// username -> historial de intentos. Fichero ausente o corrupto = vacío.
    pub fn load_scores(&self) -> HashMap<String, Vec<ScoreRecord>> {
        self.load_map(SCORES_FILE)
    }

    pub fn save_scores(&self, scores: &HashMap<String, Vec<ScoreRecord>>) -> std::io::Result<()> {
        self.save_map(SCORES_FILE, scores)
    }

    /// Añade la duda al log, entre comillas y con los saltos de línea colapsados.
    pub fn append_doubt(&self, text: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let line = text.replace(['\n', '\r'], " ");
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path(DOUBTS_FILE))?;
        writeln!(f, "\"{line}\"")
    }

    /// Número de dudas registradas (para el contador de la pantalla Home).
    pub fn doubt_count(&self) -> usize {
        match fs::read_to_string(self.path(DOUBTS_FILE)) {
            Ok(content) => content.lines().filter(|l| !l.trim().is_empty()).count(),
            Err(_) => 0,
        }
    }

    fn load_map<T: DeserializeOwned>(&self, file: &str) -> HashMap<String, T> {
        let path = self.path(file);
        let Ok(json) = fs::read_to_string(&path) else {
            return HashMap::new();
        };
        match serde_json::from_str(&json) {
            Ok(map) => map,
            Err(err) => {
                warn!("{} ilegible, se trata como vacío: {err}", path.display());
                HashMap::new()
            }
        }
    }

    fn save_map<T: Serialize>(&self, file: &str, map: &HashMap<String, T>) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(map).map_err(std::io::Error::other)?;
        fs::write(self.path(file), json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_stores(tag: &str) -> Stores {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("reloj ok")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("edu_agent_{tag}_{}_{nanos}", std::process::id()));
        Stores::new(dir)
    }

    #[test]
    fn missing_files_load_as_empty_state() {
        let stores = temp_stores("missing");
        assert!(stores.load_users().is_empty());
        assert!(stores.load_scores().is_empty());
        assert_eq!(stores.doubt_count(), 0);
    }

    #[test]
    fn corrupt_json_loads_as_empty_state() {
        let stores = temp_stores("corrupt");
        fs::create_dir_all(&stores.dir).expect("mkdir ok");
        fs::write(stores.path(USERS_FILE), "{not json").expect("write ok");
        assert!(stores.load_users().is_empty());
    }

    #[test]
    fn users_roundtrip_preserves_digest() {
        let stores = temp_stores("users");
        let mut users = HashMap::new();
        users.insert(
            "ana".to_string(),
            UserRecord {
                password: hash_password("secreto"),
            },
        );
        stores.save_users(&users).expect("save ok");
        let loaded = stores.load_users();
        assert_eq!(loaded["ana"].password, hash_password("secreto"));
        assert_ne!(loaded["ana"].password, "secreto");
    }

    #[test]
    fn hash_is_sha256_hex() {
        // Digest conocido de la cadena vacía
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(hash_password("abc").len(), 64);
    }

    #[test]
    fn append_doubt_collapses_newlines_and_quotes() {
        let stores = temp_stores("doubts");
        stores.append_doubt("what is\ngravity?").expect("append ok");
        stores.append_doubt("2+2").expect("append ok");
        let content = fs::read_to_string(stores.path(DOUBTS_FILE)).expect("read ok");
        assert!(content.contains("\"what is gravity?\""));
        assert_eq!(stores.doubt_count(), 2);
    }
}
