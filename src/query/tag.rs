/// A whitespace-free token of the raw query, classified by its first character.
///
/// Tagged variants hold the token without its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `!name` or `?name`: engine, shortcut, or category selector.
    Directive(&'a str),
    /// `:code`: search language selector.
    Language(&'a str),
    /// Free-text search term, kept verbatim.
    Plain(&'a str),
}

impl<'a> Tag<'a> {
    pub fn classify(token: &'a str) -> Self {
        if let Some(rest) = token.strip_prefix(['!', '?']) {
            Tag::Directive(rest)
        } else if let Some(rest) = token.strip_prefix(':') {
            Tag::Language(rest)
        } else {
            Tag::Plain(token)
        }
    }
}

/// Split on whitespace runs, dropping empty fragments, and classify each token in order.
pub fn tokenize(raw: &str) -> impl Iterator<Item = Tag<'_>> {
    raw.split_whitespace().map(Tag::classify)
}
