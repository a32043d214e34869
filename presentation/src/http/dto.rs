//! Response bodies

use dual_ai_domain::DualReply;
use serde::Serialize;

/// Successful reply: one field per provider, `null` when that provider failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DualReplyBody {
    pub chatgpt_reply: Option<String>,
    pub gemini_reply: Option<String>,
}

impl From<DualReply> for DualReplyBody {
    fn from(reply: DualReply) -> Self {
        Self {
            chatgpt_reply: reply.chatgpt.into_inner(),
            gemini_reply: reply.gemini.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dual_ai_domain::NormalizedReply;

    #[test]
    fn failed_provider_serializes_as_null() {
        let body = DualReplyBody::from(DualReply {
            chatgpt: NormalizedReply::text(""),
            gemini: NormalizedReply::absent(),
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"chatgptReply": "", "geminiReply": null})
        );
    }
}
