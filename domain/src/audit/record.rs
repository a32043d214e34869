//! Audit record entity

use crate::core::prompt::Prompt;
use crate::reply::outcome::DualReply;
use serde::{Deserialize, Serialize};

/// One durable log entry per request.
///
/// Column names match the `ai_lab_logs` table. The insertion timestamp is
/// not part of the record; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub user_prompt: String,
    pub chatgpt_reply: Option<String>,
    pub gemini_reply: Option<String>,
    pub source_ip: Option<String>,
}

impl AuditRecord {
    pub fn new(prompt: &Prompt, reply: &DualReply, source_ip: Option<String>) -> Self {
        Self {
            user_prompt: prompt.content().to_string(),
            chatgpt_reply: reply.chatgpt.as_deref().map(str::to_string),
            gemini_reply: reply.gemini.as_deref().map(str::to_string),
            source_ip,
        }
    }
}
