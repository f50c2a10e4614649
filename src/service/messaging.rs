//! Messaging service
//!
//! Handles direct-message threads between the session user and a
//! counterpart. Threads are created lazily on first contact and the
//! list is kept most-recently-active-first.

use chrono::Utc;

use crate::data::{Conversation, ConversationId, Message, NOW_LABEL, Records, Session, UserId};

/// Messaging service
pub struct MessagingService<'a> {
    records: &'a mut Records,
    session: &'a mut Session,
}

impl<'a> MessagingService<'a> {
    pub(crate) fn new(records: &'a mut Records, session: &'a mut Session) -> Self {
        Self { records, session }
    }

    /// Open the thread with a counterpart, creating it on first contact
    ///
    /// Lookup is by counterpart identity, not conversation id, so calling
    /// twice with the same target returns the same thread and never
    /// duplicates an entry.
    ///
    /// # Returns
    /// None for an anonymous session, an unknown target, or the session
    /// user themselves.
    pub fn start_conversation(&mut self, target_user_id: UserId) -> Option<Conversation> {
        let session_user_id = self.session.user_id()?;
        if session_user_id == target_user_id {
            tracing::debug!(target_user_id, "conversation rejected: cannot message yourself");
            return None;
        }

        if let Some(existing) = self.records.find_conversation_with(target_user_id) {
            return Some(existing.clone());
        }

        let counterpart = self.records.get_user(target_user_id)?.clone();
        let id = self.records.next_conversation_id();
        let conversation = Conversation {
            id,
            user: counterpart,
            messages: Vec::new(),
        };
        self.records.insert_conversation(conversation.clone());

        tracing::info!(
            conversation_id = id,
            counterpart = target_user_id,
            "conversation started"
        );
        Some(conversation)
    }

    /// Append a message from the session user to a thread
    ///
    /// The thread moves to the front of the conversation list. Whitespace
    /// padding in the text is preserved; only all-whitespace input is
    /// rejected.
    pub fn send_message(&mut self, conversation_id: ConversationId, text: &str) -> Option<Message> {
        let sender_id = self.session.user_id()?;
        if text.trim().is_empty() {
            return None;
        }
        self.records.get_conversation(conversation_id)?;

        let id = self.records.next_message_id();
        let message = Message {
            id,
            sender_id,
            text: text.to_string(),
            timestamp: NOW_LABEL.to_string(),
            created_at: Utc::now(),
        };

        let conversation = self.records.get_conversation_mut(conversation_id)?;
        conversation.messages.push(message.clone());
        self.records.move_conversation_to_front(conversation_id);

        tracing::debug!(conversation_id, message_id = id, sender_id, "message sent");
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SeedData;

    fn seeded_session_as(user_id: u64) -> (Records, Session) {
        let records = Records::from_seed(SeedData::builtin()).unwrap();
        let mut session = Session::default();
        let user = records.get_user(user_id).unwrap().clone();
        session.authenticate(user);
        (records, session)
    }

    #[test]
    fn start_conversation_rejects_self() {
        let (mut records, mut session) = seeded_session_as(3);
        let mut messaging = MessagingService::new(&mut records, &mut session);

        assert!(messaging.start_conversation(3).is_none());
        assert_eq!(records.conversations().len(), 1);
    }

    #[test]
    fn start_conversation_rejects_unknown_target() {
        let (mut records, mut session) = seeded_session_as(1);
        let mut messaging = MessagingService::new(&mut records, &mut session);

        assert!(messaging.start_conversation(42).is_none());
        assert_eq!(records.conversations().len(), 1);
    }

    #[test]
    fn send_message_preserves_whitespace_padding() {
        let (mut records, mut session) = seeded_session_as(1);
        let mut messaging = MessagingService::new(&mut records, &mut session);

        let message = messaging.send_message(1, "  مرحبا  ").unwrap();
        assert_eq!(message.text, "  مرحبا  ");
        assert!(messaging.send_message(1, "   ").is_none());
    }

    #[test]
    fn send_message_to_unknown_thread_is_a_no_op() {
        let (mut records, mut session) = seeded_session_as(1);
        let mut messaging = MessagingService::new(&mut records, &mut session);

        assert!(messaging.send_message(9, "مرحبا").is_none());
        assert_eq!(records.conversations()[0].messages.len(), 2);
    }
}
