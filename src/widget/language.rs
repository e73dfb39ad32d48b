// src/widget/language.rs

/// One entry of the fixed language table. Switching languages only changes
/// which welcome text is shown and the hint forwarded to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub welcome: &'static str,
}

pub const SUPPORTED_LANGUAGES: &[LanguageOption] = &[
    LanguageOption {
        code: "en",
        name: "English",
        welcome: "Hello! I'm Nyaya Mitra, your legal assistant. I can help you understand your legal rights in India. How can I assist you today?",
    },
    LanguageOption {
        code: "hi",
        name: "हिंदी",
        welcome: "नमस्ते! मैं न्याय मित्र हूं, आपका कानूनी सहायक। मैं आपको भारत में आपके कानूनी अधिकारों को समझने में मदद कर सकता हूं। आज मैं आपकी कैसे सहायता कर सकता हूं?",
    },
    LanguageOption {
        code: "bn",
        name: "বাংলা",
        welcome: "নমস্কার! আমি ন্যায় মিত্র, আপনার আইনি সহায়ক। আমি আপনাকে ভারতে আপনার আইনি অধিকারগুলি বুঝতে সাহায্য করতে পারি। আজ আমি আপনাকে কীভাবে সাহায্য করতে পারি?",
    },
    LanguageOption {
        code: "ta",
        name: "தமிழ்",
        welcome: "வணக்கம்! நான் நியாய மித்ரா, உங்கள் சட்ட உதவியாளர். இந்தியாவில் உங்கள் சட்ட உரிமைகளைப் புரிந்துகொள்ள நான் உங்களுக்கு உதவ முடியும். இன்று நான் உங்களுக்கு எப்படி உதவ முடியும்?",
    },
];

/// English, the first entry.
pub fn default_language() -> &'static LanguageOption {
    &SUPPORTED_LANGUAGES[0]
}

pub fn find(code: &str) -> Option<&'static LanguageOption> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(default_language().code, "en");
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(find("ta").map(|l| l.name), Some("தமிழ்"));
        assert!(find("fr").is_none());
    }
}
