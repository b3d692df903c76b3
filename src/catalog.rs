//! Static language code lookup.

use std::collections::HashMap;

/// The ISO codes the dump is known to carry, paired with display names.
/// `und` is the dump's own marker for an undetermined language.
const KNOWN_LANGUAGES: [(&str, &str); 65] = [
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("hy", "Armenian"),
    ("bn", "Bengali"),
    ("bg", "Bulgarian"),
    ("my", "Burmese"),
    ("zh", "Chinese"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("ka", "Georgian"),
    ("de", "German"),
    ("el", "Greek"),
    ("gu", "Gujarati"),
    ("ht", "Haitian"),
    ("iw", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("in", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("lo", "Lao"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("ml", "Malayalam"),
    ("dv", "Maldivian"),
    ("mr", "Marathi"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("or", "Oriya"),
    ("pa", "Panjabi"),
    ("ps", "Pashto"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sr", "Serbian"),
    ("sd", "Sindhi"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("ckb", "Sorani Kurdish"),
    ("es", "Spanish"),
    ("sv", "Swedish"),
    ("tl", "Tagalog"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("bo", "Tibetan"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("ug", "Uyghur"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("und", "Undefined"),
];

/// Read-only code to display name mapping, supplied to the reporter at startup.
pub struct LanguageCatalog {
    names: HashMap<&'static str, &'static str>,
}

impl LanguageCatalog {
    pub fn builtin() -> LanguageCatalog {
        LanguageCatalog {
            names: KNOWN_LANGUAGES.iter().cloned().collect(),
        }
    }

    pub fn display_name(&self, code: &str) -> Option<&'static str> {
        self.names.get(code).copied()
    }
}
