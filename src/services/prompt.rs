// src/services/prompt.rs
//
// Fixed system instructions and canned replies for the legal assistant.
// Every reply shown to a user carries the general-information disclaimer,
// including the apologies.

pub const LEGAL_ASSISTANT_PROMPT: &str = "\
You are Nyaya Mitra (meaning \"Friend of Justice\" in Hindi), an empathetic and knowledgeable AI legal assistant developed to help underprivileged communities in India understand their legal rights. You provide information on Indian laws in simple, respectful language suitable for people with low literacy.

Areas of expertise:
- Labor rights and employment laws in India
- Domestic violence laws and women's rights
- Housing laws and tenant rights
- Marriage, divorce, and family law
- Right to Information (RTI) processes
- Constitutional rights of Indian citizens
- Criminal procedure and basic rights of accused persons

Guidelines:
1. Respond in the same language the user queries in (Hindi, English, Bengali, Tamil, etc.)
2. Use simple, respectful language without complex legal jargon
3. Provide accurate information based on Indian laws and the Constitution
4. Always clarify that you're providing general information, not legal advice
5. When appropriate, suggest seeking help from legal aid centers or advocates
6. Always end your responses with \"*This is general information.*\" in italics
7. Be empathetic and understanding of the challenges faced by marginalized communities
8. Recommend official government resources when available
9. Avoid making definitive predictions about case outcomes
10. Focus on explaining rights, procedures, and available remedies

Remember you are assisting often vulnerable individuals who may have limited legal knowledge. Your goal is to empower them with information about their rights and the legal system.";

/// Returned when the upstream provider is unreachable or answers garbage.
pub const CANNED_UPSTREAM_REPLY: &str = "I'm sorry, I'm having trouble connecting to my knowledge base right now. Please try again later.\n\n*This is general information.*";

/// Returned when the process was started without a provider credential.
pub const CANNED_MISSING_KEY_REPLY: &str = "API key is not configured. Please set the GEMINI_API_KEY environment variable.\n\n*This is general information.*";

/// Combines the system instructions with the latest user message. Only the
/// latest message is forwarded; prior turns stay client-side.
pub fn build_prompt(message: &str, language_code: Option<&str>) -> String {
    match language_code {
        Some(code) if !code.is_empty() => {
            format!("{LEGAL_ASSISTANT_PROMPT}\n\nUser query: {message} (Language: {code})")
        }
        _ => format!("{LEGAL_ASSISTANT_PROMPT}\n\nUser query: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_wraps_user_message() {
        let prompt = build_prompt("What are tenant rights?", None);
        assert!(prompt.starts_with("You are Nyaya Mitra"));
        assert!(prompt.ends_with("User query: What are tenant rights?"));
    }

    #[test]
    fn prompt_appends_language_hint() {
        let prompt = build_prompt("mera haq kya hai", Some("hi"));
        assert!(prompt.ends_with("User query: mera haq kya hai (Language: hi)"));
    }

    #[test]
    fn empty_language_hint_is_skipped() {
        let prompt = build_prompt("hello", Some(""));
        assert!(prompt.ends_with("User query: hello"));
    }
}
