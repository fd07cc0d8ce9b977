//! Modifier word tables shared by the lexicon scorer.

/// Intensity modifiers: positive entries amplify, negative entries damp.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 1.0),
    ("amazingly", 1.0),
    ("completely", 1.0),
    ("deeply", 1.0),
    ("especially", 1.0),
    ("extremely", 1.0),
    ("incredibly", 1.0),
    ("really", 1.0),
    ("so", 1.0),
    ("super", 1.0),
    ("totally", 1.0),
    ("truly", 1.0),
    ("very", 1.0),
    ("barely", -1.0),
    ("hardly", -1.0),
    ("kinda", -1.0),
    ("little", -1.0),
    ("marginally", -1.0),
    ("occasionally", -1.0),
    ("partly", -1.0),
    ("slightly", -1.0),
    ("somewhat", -1.0),
];

pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt",
    "havent", "isnt", "neither", "never", "no", "none", "nope", "nor", "not", "nothing",
    "nowhere", "rarely", "seldom", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];
