//! Evaluation prompt construction
//!
//! The prompt is deterministic: same content and proof fields in, same
//! prompt out. It carries the eligibility rules, the claim-verification
//! rules, and the scoring bands the model must follow, and demands a
//! bare four-field JSON object back.

use crate::models::VerificationRequest;

/// Sentinel used when the user attached no proof at all
pub const NO_PROOF: &str = "No proof provided.";

/// Join the proof fields that are present into a labeled context block
///
/// Ordering is fixed: URL, then media, then citation.
#[must_use]
pub fn proof_context(request: &VerificationRequest) -> String {
    let mut parts = Vec::new();
    if let Some(url) = &request.proof_url {
        parts.push(format!("Proof URL: {url}"));
    }
    if let Some(media) = &request.proof_media {
        parts.push(format!("Proof Media URL: {media}"));
    }
    if let Some(citation) = &request.proof_citation {
        parts.push(format!("Proof Citation: {citation}"));
    }

    if parts.is_empty() {
        NO_PROOF.to_string()
    } else {
        parts.join("\n")
    }
}

/// Build the evaluation prompt for a trimmed, non-empty claim
#[must_use]
pub fn build_prompt(content: &str, proof_context: &str) -> String {
    format!(
        r#"You are a strict fact-checking and content moderation assistant for a social platform where users post claims and back them up with proof.

A user wants to post the following:
"{content}"

Proof provided:
{proof_context}

---

Follow these rules strictly:

1. POST ELIGIBILITY RULES
Reject the post (approved: false) if:
- It is a greeting or low-value content (e.g., "hi", "gm", "yo", "hello guys", "good morning")
- It is a casual or personal question (e.g., "what's the weather?", "how are you?")
- It does not contain a meaningful claim, question, or verifiable statement
- It is spam, vague, or lacks context

Accept the post (approved: true) if:
- It contains a factual claim
- It asks about the truth of a claim (e.g., "Is ChatGPT really hiring?")
- It shares news, data, or an event that can be verified
- It provides proof, links, screenshots, or references

2. CLAIM VERIFICATION RULES
If the post contains a factual claim, evaluate whether it is:
- True
- Likely True
- Unverified
- Misleading
- False

If False or Misleading:
- Provide a short 1-3 sentence explanation
- Clearly explain what makes it incorrect
- Mention if evidence is outdated, manipulated, or from unreliable sources

If the claim cannot be verified:
- Mark it as "Unverified" and explain why

Be neutral, concise, and evidence-based. Do NOT hallucinate unknown facts. Do NOT invent sources.

3. VERIFICATION SCORE
Return a score from 0 to 100:
- 90-100 -> Highly credible / verified
- 70-89 -> Likely true but limited verification
- 40-69 -> Unverified / unclear
- 10-39 -> Likely misleading
- 0-9 -> False / clearly misinformation

For rejected posts (greetings, spam, low-value), set score to 0.

---

Respond ONLY with a JSON object in this exact format, no other text, no markdown:
{{
  "approved": true or false,
  "status": "True" | "Likely True" | "Unverified" | "Misleading" | "False" | "Rejected",
  "score": 0-100,
  "reason": "A short 1-3 sentence explanation."
}}"#
    )
}
