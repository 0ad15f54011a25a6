//! Built-in fallback word list
//!
//! Used when no dictionary file is available. The list carries a few repeated
//! entries; collection construction de-duplicates before play.

/// Fallback candidate words
pub const FALLBACK: &[&str] = &[
    "apple", "table", "chair", "water", "lemon", "bread", "grape", "peach", "plumb", "bison",
    "plane", "stone", "tiger", "beach", "vocal", "music", "sharp", "blaze", "sweet", "flame",
    "witch", "piano", "mount", "beard", "earth", "shone", "stone", "plane", "flood", "lunar",
    "fresh", "sugar", "comic", "flute", "drain", "plant", "block", "jumpy", "crowd", "light",
    "grape", "pouch", "frank", "green", "shark", "blink", "storm", "pouch", "rainy", "molar",
    "beast", "minor", "glove", "frill", "boldy", "flint", "purse", "touch", "unite", "proud",
];

/// Number of entries in [`FALLBACK`], before de-duplication
pub const FALLBACK_COUNT: usize = 60;
