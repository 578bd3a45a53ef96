use super::ScriptRequest;

/// Build the Gemini instruction for a 30-second Marathi radio ad.
///
/// The brief is appended verbatim; nothing is escaped.
pub fn build_prompt(request: &ScriptRequest) -> String {
    format!(
        r#"
Generate a 30-second Marathi audio advertisement script.

MANDATORY RULES:
- FOLLOW THIS EXACT STRUCTURE
- Use emotion cues ONLY in SQUARE BRACKETS
- Emotion cues must be in ENGLISH
- Do NOT use emojis
- Do NOT change the order
- Simple, spoken Marathi
- Suitable for audio / radio ads

STRUCTURE (DO NOT CHANGE):
[soft, emotional]
2 lines showing emotional problem

[hopeful]
1 reassuring transition line

[happy, energetic]
Introduce the solution and how it works (2–3 lines)

[confident]
Benefits and results (1–2 lines)

[strong, energetic]
Clear call to action (1–2 lines)

Business Name: {}
Service / App Purpose: {}
Target Audience: {}
"#,
        request.business_name, request.service, request.target_audience
    )
}
