mod keyword;

use proc_macro::TokenStream;

/// Derives the TSPLIB spelling of a unit-only enum.
///
/// Generates `Display`, an exact `from_keyword` lookup and the ordered
/// `ALL`/`KEYWORDS` tables. Variant names map to `SCREAMING_SNAKE` unless
/// overridden with `#[keyword("...")]`.
#[proc_macro_derive(Keyword, attributes(keyword))]
pub fn derive_keyword(input: TokenStream) -> TokenStream {
    keyword::derive_keyword_inner(input)
}
