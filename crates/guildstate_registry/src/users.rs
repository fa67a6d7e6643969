//! Users and the bot-user singleton.

use crate::ownership::{UserHome, user_home};
use crate::{Diff, StateRegistry};
use guildstate_models::{BotUser, Handle, Snowflake, User, UserPayload, handle};
use tracing::{debug, instrument};

impl StateRegistry {
    /// Resolve a user snapshot to its live handle.
    ///
    /// Payloads describing the authenticated account are folded into the
    /// bot-user singleton, and its public profile is returned. Every other
    /// user is updated in place if still referenced somewhere, or created
    /// and weakly indexed. The caller is expected to store the returned
    /// handle; an unreferenced user disappears from the index.
    #[instrument(skip(self, payload), fields(user_id = payload.id()))]
    pub fn parse_user(&mut self, payload: &UserPayload) -> Handle<User> {
        match user_home(payload, self.bot_user_id()) {
            UserHome::BotUser => self.parse_bot_user(payload).read().user().clone(),
            UserHome::Shared => {
                if let Some(existing) = self.users.get(payload.id()) {
                    existing.write().apply(payload);
                    return existing;
                }
                let user = handle(User::from_payload(payload));
                self.users.put(*payload.id(), &user);
                debug!("Indexed new user");
                user
            }
        }
    }

    /// Create the bot-user singleton on first sight, or update it in place.
    #[instrument(skip(self, payload), fields(user_id = payload.id()))]
    pub fn parse_bot_user(&mut self, payload: &UserPayload) -> Handle<BotUser> {
        if let Some(me) = &self.me {
            me.write().apply(payload);
            return me.clone();
        }
        let me = handle(BotUser::from_payload(payload));
        debug!("Registered bot user");
        self.me = Some(me.clone());
        me
    }

    /// Apply a user delta to an already known user.
    ///
    /// Returns `None` when the user is not referenced anywhere.
    #[instrument(skip(self, payload), fields(user_id = payload.id()))]
    pub fn update_user(&mut self, payload: &UserPayload) -> Option<Diff<User>> {
        let live = self.get_user_by_id(*payload.id())?;
        let old = live.read().clone();
        if self.bot_user_id() == Some(*payload.id()) {
            self.parse_bot_user(payload);
        } else {
            live.write().apply(payload);
        }
        Some(Diff::pair(old, live))
    }

    /// Forget a user's index entry. Holders keep their handles.
    ///
    /// Returns whether an entry was removed. The bot user is never removed.
    #[instrument(skip(self))]
    pub fn delete_user(&mut self, user_id: Snowflake) -> bool {
        self.users.remove(&user_id)
    }

    /// Drop the index entry for `user_id` once nothing holds the user.
    pub(crate) fn release_user(&mut self, user_id: Snowflake) {
        if !self.users.contains(&user_id) {
            self.users.remove(&user_id);
        }
    }
}
