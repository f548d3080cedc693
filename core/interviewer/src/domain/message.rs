//! 会話記録（transcript）の 1 メッセージ

use serde::{Deserialize, Serialize};

/// 発言者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 面接官（LLM 側）
    Assistant,
    /// 候補者
    User,
}

/// transcript の 1 メッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_role_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("Hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"Hi"}"#);
        let m: ChatMessage = serde_json::from_str(r#"{"role":"user","content":"Jane"}"#).unwrap();
        assert_eq!(m, ChatMessage::user("Jane"));
    }
}
