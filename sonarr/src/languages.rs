//! Languages known to Sonarr, indexed by their API id

pub const LANGUAGES: [&str; 32] = [
    "Unknown",
    "English",
    "French",
    "Spanish",
    "German",
    "Italian",
    "Danish",
    "Dutch",
    "Japanese",
    "Icelandic",
    "Chinese",
    "Russian",
    "Polish",
    "Vietnamese",
    "Swedish",
    "Norwegian",
    "Finnish",
    "Turkish",
    "Portuguese",
    "Flemish",
    "Greek",
    "Korean",
    "Hungarian",
    "Hebrew",
    "Lithuanian",
    "Czech",
    "Arabic",
    "Hindi",
    "Bulgarian",
    "Malayalam",
    "Ukrainian",
    "Slovak",
];

/// Id of the named language; unrecognised names map to `Unknown` (0)
pub fn language_id(name: &str) -> i64 {
    LANGUAGES
        .iter()
        .position(|&language| language == name)
        .map_or(0, |id| id as i64)
}
