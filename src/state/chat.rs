//! Tutor Chat Transcript
//!
//! Append-only message list for one chat session. A student message is
//! appended optimistically before the backend confirms; if the send
//! fails the append is compensated by removing that exact message.
//! Messages carry a client-local id so the rollback is unambiguous even
//! when the learner sends the same text twice in a row.

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Student,
    Tutor,
}

/// One transcript entry
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Client-local identifier, never sent to the backend
    pub local_id: u64,
    pub sender: Sender,
    pub message: String,
    /// Millisecond timestamp of the local append
    pub timestamp: i64,
}

/// Append-only transcript for one session
#[derive(Clone, Debug, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatTranscript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, sender: Sender, message: String, timestamp: i64) -> u64 {
        let local_id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            local_id,
            sender,
            message,
            timestamp,
        });
        local_id
    }

    /// Optimistically append a student message, returning its local id
    /// for a later rollback if the backend rejects the send.
    pub fn push_student(&mut self, message: String, timestamp: i64) -> u64 {
        self.push(Sender::Student, message, timestamp)
    }

    /// Append a tutor reply
    pub fn push_tutor(&mut self, message: String, timestamp: i64) -> u64 {
        self.push(Sender::Tutor, message, timestamp)
    }

    /// Remove the message with the given local id. Compensating action
    /// for a failed send; a no-op if the id is unknown.
    pub fn rollback(&mut self, local_id: u64) {
        self.messages.retain(|m| m.local_id != local_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_then_reply_ordering() {
        let mut transcript = ChatTranscript::default();
        transcript.push_tutor("Olá! Como posso ajudar?".to_string(), 0);
        transcript.push_student("5".to_string(), 1);
        transcript.push_tutor("Isso mesmo, a resposta é 5!".to_string(), 2);

        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].sender, Sender::Student);
        assert_eq!(msgs[1].message, "5");
        assert_eq!(msgs[2].sender, Sender::Tutor);
    }

    #[test]
    fn test_rollback_removes_exactly_one() {
        let mut transcript = ChatTranscript::default();
        let first = transcript.push_student("5".to_string(), 0);
        let second = transcript.push_student("5".to_string(), 1);

        // Duplicate texts: the id keeps the rollback unambiguous
        transcript.rollback(second);
        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].local_id, first);
        assert_eq!(msgs[0].message, "5");
    }

    #[test]
    fn test_rollback_unknown_id_is_noop() {
        let mut transcript = ChatTranscript::default();
        transcript.push_student("oi".to_string(), 0);
        transcript.rollback(99);
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn test_ids_are_unique_across_rollback() {
        let mut transcript = ChatTranscript::default();
        let a = transcript.push_student("a".to_string(), 0);
        transcript.rollback(a);
        let b = transcript.push_student("b".to_string(), 1);
        assert_ne!(a, b);
    }
}
