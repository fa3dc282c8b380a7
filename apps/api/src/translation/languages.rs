//! Static language table: human-readable name → ISO 639-1 alpha-2 code.
//!
//! Names follow the ISO 639-3 registry's reference names. Sorted by name.

use serde::Serialize;

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

const fn lang(name: &'static str, code: &'static str) -> Language {
    Language { name, code }
}

pub static LANGUAGES: &[Language] = &[
    lang("Abkhazian", "ab"),
    lang("Afar", "aa"),
    lang("Afrikaans", "af"),
    lang("Akan", "ak"),
    lang("Albanian", "sq"),
    lang("Amharic", "am"),
    lang("Arabic", "ar"),
    lang("Aragonese", "an"),
    lang("Armenian", "hy"),
    lang("Assamese", "as"),
    lang("Avaric", "av"),
    lang("Avestan", "ae"),
    lang("Aymara", "ay"),
    lang("Azerbaijani", "az"),
    lang("Bambara", "bm"),
    lang("Bashkir", "ba"),
    lang("Basque", "eu"),
    lang("Belarusian", "be"),
    lang("Bengali", "bn"),
    lang("Bislama", "bi"),
    lang("Bosnian", "bs"),
    lang("Breton", "br"),
    lang("Bulgarian", "bg"),
    lang("Burmese", "my"),
    lang("Catalan", "ca"),
    lang("Chamorro", "ch"),
    lang("Chechen", "ce"),
    lang("Chinese", "zh"),
    lang("Church Slavic", "cu"),
    lang("Chuvash", "cv"),
    lang("Cornish", "kw"),
    lang("Corsican", "co"),
    lang("Cree", "cr"),
    lang("Croatian", "hr"),
    lang("Czech", "cs"),
    lang("Danish", "da"),
    lang("Dhivehi", "dv"),
    lang("Dutch", "nl"),
    lang("Dzongkha", "dz"),
    lang("English", "en"),
    lang("Esperanto", "eo"),
    lang("Estonian", "et"),
    lang("Ewe", "ee"),
    lang("Faroese", "fo"),
    lang("Fijian", "fj"),
    lang("Finnish", "fi"),
    lang("French", "fr"),
    lang("Fulah", "ff"),
    lang("Galician", "gl"),
    lang("Ganda", "lg"),
    lang("Georgian", "ka"),
    lang("German", "de"),
    lang("Guarani", "gn"),
    lang("Gujarati", "gu"),
    lang("Haitian", "ht"),
    lang("Hausa", "ha"),
    lang("Hebrew", "he"),
    lang("Herero", "hz"),
    lang("Hindi", "hi"),
    lang("Hiri Motu", "ho"),
    lang("Hungarian", "hu"),
    lang("Icelandic", "is"),
    lang("Ido", "io"),
    lang("Igbo", "ig"),
    lang("Indonesian", "id"),
    lang("Interlingua (International Auxiliary Language Association)", "ia"),
    lang("Interlingue", "ie"),
    lang("Inuktitut", "iu"),
    lang("Inupiaq", "ik"),
    lang("Irish", "ga"),
    lang("Italian", "it"),
    lang("Japanese", "ja"),
    lang("Javanese", "jv"),
    lang("Kalaallisut", "kl"),
    lang("Kannada", "kn"),
    lang("Kanuri", "kr"),
    lang("Kashmiri", "ks"),
    lang("Kazakh", "kk"),
    lang("Khmer", "km"),
    lang("Kikuyu", "ki"),
    lang("Kinyarwanda", "rw"),
    lang("Kirghiz", "ky"),
    lang("Komi", "kv"),
    lang("Kongo", "kg"),
    lang("Korean", "ko"),
    lang("Kuanyama", "kj"),
    lang("Kurdish", "ku"),
    lang("Lao", "lo"),
    lang("Latin", "la"),
    lang("Latvian", "lv"),
    lang("Limburgan", "li"),
    lang("Lingala", "ln"),
    lang("Lithuanian", "lt"),
    lang("Luba-Katanga", "lu"),
    lang("Luxembourgish", "lb"),
    lang("Macedonian", "mk"),
    lang("Malagasy", "mg"),
    lang("Malay (macrolanguage)", "ms"),
    lang("Malayalam", "ml"),
    lang("Maltese", "mt"),
    lang("Manx", "gv"),
    lang("Maori", "mi"),
    lang("Marathi", "mr"),
    lang("Marshallese", "mh"),
    lang("Modern Greek (1453-)", "el"),
    lang("Mongolian", "mn"),
    lang("Nauru", "na"),
    lang("Navajo", "nv"),
    lang("Ndonga", "ng"),
    lang("Nepali (macrolanguage)", "ne"),
    lang("North Ndebele", "nd"),
    lang("Northern Sami", "se"),
    lang("Norwegian", "no"),
    lang("Norwegian Bokmål", "nb"),
    lang("Norwegian Nynorsk", "nn"),
    lang("Nyanja", "ny"),
    lang("Occitan (post 1500)", "oc"),
    lang("Ojibwa", "oj"),
    lang("Oriya (macrolanguage)", "or"),
    lang("Oromo", "om"),
    lang("Ossetian", "os"),
    lang("Pali", "pi"),
    lang("Panjabi", "pa"),
    lang("Persian", "fa"),
    lang("Polish", "pl"),
    lang("Portuguese", "pt"),
    lang("Pushto", "ps"),
    lang("Quechua", "qu"),
    lang("Romanian", "ro"),
    lang("Romansh", "rm"),
    lang("Rundi", "rn"),
    lang("Russian", "ru"),
    lang("Samoan", "sm"),
    lang("Sango", "sg"),
    lang("Sanskrit", "sa"),
    lang("Sardinian", "sc"),
    lang("Scottish Gaelic", "gd"),
    lang("Serbian", "sr"),
    lang("Serbo-Croatian", "sh"),
    lang("Shona", "sn"),
    lang("Sichuan Yi", "ii"),
    lang("Sindhi", "sd"),
    lang("Sinhala", "si"),
    lang("Slovak", "sk"),
    lang("Slovenian", "sl"),
    lang("Somali", "so"),
    lang("South Ndebele", "nr"),
    lang("Southern Sotho", "st"),
    lang("Spanish", "es"),
    lang("Sundanese", "su"),
    lang("Swahili (macrolanguage)", "sw"),
    lang("Swati", "ss"),
    lang("Swedish", "sv"),
    lang("Tagalog", "tl"),
    lang("Tahitian", "ty"),
    lang("Tajik", "tg"),
    lang("Tamil", "ta"),
    lang("Tatar", "tt"),
    lang("Telugu", "te"),
    lang("Thai", "th"),
    lang("Tibetan", "bo"),
    lang("Tigrinya", "ti"),
    lang("Tonga (Tonga Islands)", "to"),
    lang("Tsonga", "ts"),
    lang("Tswana", "tn"),
    lang("Turkish", "tr"),
    lang("Turkmen", "tk"),
    lang("Twi", "tw"),
    lang("Uighur", "ug"),
    lang("Ukrainian", "uk"),
    lang("Urdu", "ur"),
    lang("Uzbek", "uz"),
    lang("Venda", "ve"),
    lang("Vietnamese", "vi"),
    lang("Volapük", "vo"),
    lang("Walloon", "wa"),
    lang("Welsh", "cy"),
    lang("Western Frisian", "fy"),
    lang("Wolof", "wo"),
    lang("Xhosa", "xh"),
    lang("Yiddish", "yi"),
    lang("Yoruba", "yo"),
    lang("Zhuang", "za"),
    lang("Zulu", "zu"),
];

pub fn find_by_name(name: &str) -> Option<&'static Language> {
    let name = name.trim();
    LANGUAGES.iter().find(|l| l.name.eq_ignore_ascii_case(name))
}

pub fn find_by_code(code: &str) -> Option<&'static Language> {
    let code = code.trim();
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// Accepts either a language name or its two-letter code.
pub fn resolve(input: &str) -> Option<&'static Language> {
    find_by_name(input).or_else(|| find_by_code(input))
}

pub fn default_language() -> &'static Language {
    find_by_name(DEFAULT_LANGUAGE).unwrap_or(&LANGUAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        let english = default_language();
        assert_eq!(english.name, "English");
        assert_eq!(english.code, "en");
    }

    #[test]
    fn test_codes_are_two_letters_and_unique() {
        let mut codes: Vec<&str> = LANGUAGES.iter().map(|l| l.code).collect();
        assert!(codes.iter().all(|c| c.len() == 2));
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_table_is_sorted_by_name() {
        assert!(LANGUAGES.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_resolve_by_name_or_code() {
        assert_eq!(resolve("french").map(|l| l.code), Some("fr"));
        assert_eq!(resolve("JA").map(|l| l.name), Some("Japanese"));
        assert_eq!(resolve(" Modern Greek (1453-) ").map(|l| l.code), Some("el"));
        assert!(resolve("Klingon").is_none());
    }
}
