//! User accounts.

use crate::{Handle, Snowflake, UserPayload, handle};

/// A user account seen somewhere in the graph.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct User {
    id: Snowflake,
    username: String,
    discriminator: Option<String>,
    avatar: Option<String>,
    bot: bool,
}

impl User {
    /// Build a user from its first snapshot.
    pub fn from_payload(payload: &UserPayload) -> Self {
        let mut user = Self {
            id: *payload.id(),
            username: String::new(),
            discriminator: None,
            avatar: None,
            bot: false,
        };
        user.apply(payload);
        user
    }

    /// Fold the fields present in `payload` into this user.
    pub fn apply(&mut self, payload: &UserPayload) {
        if let Some(username) = payload.username() {
            self.username = username.clone();
        }
        if let Some(discriminator) = payload.discriminator() {
            self.discriminator = Some(discriminator.clone());
        }
        if let Some(avatar) = payload.avatar() {
            self.avatar = Some(avatar.clone());
        }
        if let Some(bot) = payload.bot() {
            self.bot = *bot;
        }
    }
}

/// The authenticated account this client runs as.
///
/// The account's public profile lives in a plain [`User`] handle so that
/// members and messages authored by the bot share it.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct BotUser {
    user: Handle<User>,
    mfa_enabled: bool,
    verified: bool,
    locale: Option<String>,
    email: Option<String>,
}

impl BotUser {
    /// Build the bot user from its first snapshot.
    pub fn from_payload(payload: &UserPayload) -> Self {
        let mut me = Self {
            user: handle(User::from_payload(payload)),
            mfa_enabled: false,
            verified: false,
            locale: None,
            email: None,
        };
        me.apply_account_fields(payload);
        me
    }

    /// Fold `payload` into the bot user and its public profile.
    pub fn apply(&mut self, payload: &UserPayload) {
        self.user.write().apply(payload);
        self.apply_account_fields(payload);
    }

    /// Id of the authenticated account.
    pub fn id(&self) -> Snowflake {
        *self.user.read().id()
    }

    fn apply_account_fields(&mut self, payload: &UserPayload) {
        if let Some(mfa_enabled) = payload.mfa_enabled() {
            self.mfa_enabled = *mfa_enabled;
        }
        if let Some(verified) = payload.verified() {
            self.verified = *verified;
        }
        if let Some(locale) = payload.locale() {
            self.locale = Some(locale.clone());
        }
        if let Some(email) = payload.email() {
            self.email = Some(email.clone());
        }
    }
}
