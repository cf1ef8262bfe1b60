use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

const DEFAULT_SEPARATOR: &str = "_";

fn default_keyword(variant_ident: &syn::Ident, separator: &str) -> String {
    let name = variant_ident.to_string();
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(chars.len() * (separator.len() + 1));

    for (idx, ch) in chars.iter().copied().enumerate() {
        if idx > 0 {
            let prev = chars[idx - 1];
            let next = chars.get(idx + 1).copied();
            let starts_word = ch.is_ascii_uppercase()
                && (prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase())));

            if starts_word {
                out.push_str(separator);
            }
        }

        out.push(ch.to_ascii_uppercase());
    }

    out
}

fn parse_separator(input: &DeriveInput) -> syn::Result<String> {
    let mut separator = DEFAULT_SEPARATOR.to_string();

    for attr in &input.attrs {
        if !attr.path().is_ident("keyword") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("separator") {
                let lit: LitStr = meta.value()?.parse()?;
                separator = lit.value();
                return Ok(());
            }

            Err(meta.error("unsupported keyword attribute on enum; expected separator = \"...\""))
        })?;
    }

    Ok(separator)
}

fn parse_override(variant: &syn::Variant) -> syn::Result<Option<LitStr>> {
    let mut keyword = None;
    for attr in &variant.attrs {
        if !attr.path().is_ident("keyword") {
            continue;
        }
        if keyword.is_some() {
            return Err(syn::Error::new(attr.span(), "duplicate keyword attribute"));
        }
        keyword = Some(attr.parse_args::<LitStr>()?);
    }
    Ok(keyword)
}

pub fn derive_keyword_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let enum_ident = input.ident.clone();
    let separator = match parse_separator(&input) {
        Ok(value) => value,
        Err(err) => return err.to_compile_error().into(),
    };

    let Data::Enum(data_enum) = input.data else {
        return syn::Error::new(input.span(), "Keyword can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let mut variants = Vec::new();
    let mut keywords = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "Keyword only supports unit variants")
                .to_compile_error()
                .into();
        }

        let keyword = match parse_override(variant) {
            Ok(Some(lit)) => lit,
            Ok(None) => LitStr::new(
                &default_keyword(&variant.ident, &separator),
                variant.ident.span(),
            ),
            Err(err) => return err.to_compile_error().into(),
        };

        if keywords.iter().any(|seen: &LitStr| seen.value() == keyword.value()) {
            return syn::Error::new(
                variant.span(),
                format!("keyword {} is used by more than one variant", keyword.value()),
            )
            .to_compile_error()
            .into();
        }

        variants.push(variant.ident.clone());
        keywords.push(keyword);
    }

    let expanded = quote! {
        impl #enum_ident {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[#(Self::#variants),*];

            /// Canonical spellings, in declaration order.
            pub const KEYWORDS: &'static [&'static str] = &[#(#keywords),*];

            /// Exact, case-sensitive lookup of a canonical spelling.
            pub fn from_keyword(raw: &str) -> Option<Self> {
                match raw {
                    #(#keywords => Some(Self::#variants),)*
                    _ => None,
                }
            }

            pub const fn keyword(&self) -> &'static str {
                match self {
                    #(Self::#variants => #keywords,)*
                }
            }
        }

        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };

    TokenStream::from(expanded)
}
