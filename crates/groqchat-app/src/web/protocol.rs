use serde::Deserialize;

/// Incoming chat request payload
#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    pub session_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    use groqchat_chat::ChatReply;
    use groqchat_types::Turn;

    #[test]
    fn test_chat_payload_deserialization() {
        let payload: ChatPayload =
            serde_json::from_str(r#"{"session_id": "abc", "message": "hello"}"#).unwrap();
        assert_eq!(payload.session_id, "abc");
        assert_eq!(payload.message, "hello");
    }

    #[test]
    fn test_chat_reply_wire_shape() {
        let reply = ChatReply {
            response: "hi".to_string(),
            history: vec![Turn::human("hello"), Turn::assistant("hi")],
        };

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "response": "hi",
                "history": [
                    {"role": "human", "content": "hello"},
                    {"role": "assistant", "content": "hi"}
                ]
            })
        );
    }
}
