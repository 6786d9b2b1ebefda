use proc_macro2::TokenStream as TokenStream2;
use prettyplease::unparse;
use syn::{parse2, File, Ident};

/// Builds the view component name of the form `"{prefix}{Variant}{suffix}"`.
pub(crate) fn build_variant_view_name(prefix: &str, variant: &Ident, suffix: &str) -> Ident {
    let full_name = format!("{}{}{}", prefix, variant, suffix);
    Ident::new(&full_name, variant.span())
}

/// Attempts to format the provided token stream as well-formed Rust code.
pub(crate) fn format_generated_code(expanded: TokenStream2) -> TokenStream2 {
    match parse2::<File>(expanded.clone()) {
        Ok(file) => {
            let formatted_code = unparse(&file);
            formatted_code.parse().unwrap_or(expanded)
        }
        Err(_) => expanded,
    }
}
