// Word filter
// Masks blocked words in chirp bodies

/// Words that never make it into a cleaned chirp, compared in lowercase.
pub const BLOCKED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement written in place of a blocked word.
pub const MASK: &str = "****";

/// Replace every blocked word in `message` with [`MASK`].
///
/// The message is split on single spaces and each token is compared against
/// [`BLOCKED_WORDS`] ignoring case. A token only matches as a whole, so
/// `"kerfuffle!"` is left alone. Splitting on `' '` keeps empty tokens, which
/// means runs of spaces come back exactly as they went in.
pub fn clean_message(message: &str) -> String {
    message
        .split(' ')
        .map(|token| if is_blocked(token) { MASK } else { token })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_blocked(token: &str) -> bool {
    let lowered = token.to_lowercase();
    BLOCKED_WORDS.contains(&lowered.as_str())
}
