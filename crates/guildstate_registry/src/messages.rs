//! Messages in the bounded message cache.

use crate::reactions::apply_count;
use crate::{Diff, StateRegistry};
use guildstate_models::{Handle, Message, MessagePayload, Snowflake, handle};
use tracing::{debug, instrument, warn};

impl StateRegistry {
    /// Cache a message snapshot and mark it as the channel's newest.
    ///
    /// A message already cached is updated in place and becomes the most
    /// recently used. Embedded reactions set absolute counts. Returns
    /// `None`, caching nothing, when the channel is not known.
    #[instrument(skip(self, payload), fields(message_id = payload.id(), channel_id = payload.channel_id()))]
    pub fn parse_message(&mut self, payload: &MessagePayload) -> Option<Handle<Message>> {
        let message_id = *payload.id();
        let Some(channel) = self.get_channel_by_id(*payload.channel_id()) else {
            warn!("Message for unknown channel dropped");
            return None;
        };
        let author = payload.author().as_ref().map(|author| self.parse_user(author));

        let existing = self.messages.peek(&message_id).cloned();
        let message = match existing {
            Some(message) => {
                {
                    let mut live = message.write();
                    live.apply(payload);
                    if author.is_some() {
                        live.set_author(author);
                    }
                }
                message
            }
            None => handle(Message::new(payload, author)),
        };

        for reaction in payload.reactions() {
            let emoji = self.reaction_emoji(reaction.emoji());
            apply_count(&message, emoji, *reaction.count());
        }

        channel.write().set_last_message_id(message_id);
        if let Some((evicted_id, evicted)) = self.messages.put(message_id, message.clone()) {
            debug!(evicted_id, "Evicted message");
            self.release_author(evicted);
        }
        Some(message)
    }

    /// Apply an edit to a cached message. Returns `None` when not cached.
    #[instrument(skip(self, payload), fields(message_id = payload.id()))]
    pub fn update_message(&mut self, payload: &MessagePayload) -> Option<Diff<Message>> {
        let live = self.messages.get(payload.id()).cloned()?;
        let author = payload.author().as_ref().map(|author| self.parse_user(author));
        let old = live.read().clone();
        {
            let mut message = live.write();
            message.apply(payload);
            if author.is_some() {
                message.set_author(author);
            }
        }
        Some(Diff::pair(old, live))
    }

    /// Drop a message from the cache. Returns whether it was cached.
    #[instrument(skip(self))]
    pub fn delete_message(&mut self, message_id: Snowflake) -> bool {
        match self.messages.remove(&message_id) {
            Some(message) => {
                self.release_author(message);
                debug!("Deleted message");
                true
            }
            None => false,
        }
    }

    fn release_author(&mut self, message: Handle<Message>) {
        let author_id = message
            .read()
            .author()
            .as_ref()
            .map(|author| *author.read().id());
        drop(message);
        if let Some(author_id) = author_id {
            self.release_user(author_id);
        }
    }
}
