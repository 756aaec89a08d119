use super::*;
use crate::model::UserRecord;
use crate::storage::hash_password;

impl EduApp {
    /// Alta de usuario: nunca sobreescribe un username existente.
    pub fn signup(&mut self) {
        let username = self.signup_username.trim().to_string();
        let password = std::mem::take(&mut self.signup_password);

        if username.is_empty() || password.is_empty() {
            self.message = "⚠ Username and password cannot be empty.".into();
            return;
        }

        let mut users = self.stores.load_users();
        if users.contains_key(&username) {
            self.message = "⚠ Username already exists. Choose another.".into();
            return;
        }

        users.insert(
            username.clone(),
            UserRecord {
                password: hash_password(&password),
            },
        );
        if let Err(err) = self.stores.save_users(&users) {
            log::error!("No se pudo guardar users.json: {err}");
            self.message = "⚠ Could not save your account. Try again.".into();
            return;
        }

        log::info!("Usuario registrado: {username}");
        self.signup_username.clear();
        self.message = "✔ Signup successful — please login.".into();
    }

    /// Login comparando digests, nunca el plaintext.
    pub fn login(&mut self) {
        let username = self.login_username.trim().to_string();
        let password = std::mem::take(&mut self.login_password);

        let users = self.stores.load_users();
        let valid = users
            .get(&username)
            .is_some_and(|u| u.password == hash_password(&password));

        if valid {
            log::info!("Login correcto: {username}");
            self.current_user = Some(username);
            self.login_username.clear();
            self.message = "✔ Login successful!".into();
        } else {
            self.message = "❌ Invalid username or password.".into();
        }
    }

    /// Cierra sesión y descarta cualquier quiz a medias.
    pub fn logout(&mut self) {
        self.current_user = None;
        self.session = None;
        self.message.clear();
    }
}
