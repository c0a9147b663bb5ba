//! Type rendering helpers.
//!
//! Field descriptors carry the declared type as text for diagnostics. The
//! token stream's own rendering spaces every punctuation mark, so it is
//! compacted back into the form a person would write.

use quote::ToTokens;
use syn::Type;

/// Renders `ty` compactly, e.g. `Vec<Option<i32>>` or
/// `HashMap<String, u8>`.
pub(crate) fn type_label(ty: &Type) -> String {
    let rendered = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(rendered.len());
    let mut prev: Option<char> = None;
    let mut chars = rendered.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != ' ' {
            out.push(ch);
            prev = Some(ch);
            continue;
        }
        let next = chars.peek().copied();
        let separates_words = is_word(prev) && is_word(next);
        let follows_separator = matches!(prev, Some(',' | ';'));
        if separates_words || follows_separator {
            out.push(' ');
        }
    }
    out
}

fn is_word(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '\'')
}
