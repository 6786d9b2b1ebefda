use std::collections::HashMap;

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data::Enum, DeriveInput, Ident, LitStr};

/* -------------------------------------------------------------------------------------------------
 * `#[route(...)]`
 * -----------------------------------------------------------------------------------------------*/
#[derive(std::fmt::Debug, FromVariant)]
#[darling(attributes(route))]
struct RouteVariant {
    ident: Ident,

    // Arguments
    path: LitStr,
    name: Option<LitStr>,
    view: Option<syn::Path>,
}

/* -------------------------------------------------------------------------------------------------
 * `#[derive(RouteTable)] -> #[routes(...)]`
 * -----------------------------------------------------------------------------------------------*/
#[derive(FromDeriveInput, std::fmt::Debug)]
#[darling(attributes(routes), supports(enum_unit))]
pub(crate) struct RouteTableConfiguration {
    ident: Ident,

    #[darling(default)]
    pub(crate) transition: bool,

    #[darling(default)]
    pub(crate) view_prefix: String,

    #[darling(default = "default_view_suffix")]
    pub(crate) view_suffix: String,
}

fn default_view_suffix() -> String {
    "View".to_string()
}

/// A variant after validation: canonical path, resolved name and view tokens.
struct TableRow {
    variant: Ident,
    path: String,
    name: String,
    view: TokenStream2,
}

/* -------------------------------------------------------------------------------------------------
 * `#[derive(RouteTable)]` implementation
 * -----------------------------------------------------------------------------------------------*/
pub fn derive_route_table_impl(input: TokenStream) -> TokenStream {
    let input_ast = parse_macro_input!(input as DeriveInput);
    let config = match RouteTableConfiguration::from_derive_input(&input_ast) {
        Ok(config) => config,
        Err(err) => return err.write_errors().into(),
    };
    let Enum(ref data) = input_ast.data else {
        return syn::Error::new(
            input_ast.ident.span(),
            "`#[derive(RouteTable)]` can only be used on enums.",
        )
            .to_compile_error()
            .into();
    };
    if data.variants.is_empty() {
        return syn::Error::new(
            input_ast.ident.span(),
            "`#[derive(RouteTable)]` needs at least one `#[route(...)]` variant.",
        )
            .to_compile_error()
            .into();
    }

    let rows = match collect_rows(&config, data) {
        Ok(rows) => rows,
        Err(err) => return err.write_errors().into(),
    };

    crate::utils::format_generated_code(expand(&config, &rows)).into()
}

fn collect_rows(
    config: &RouteTableConfiguration,
    data: &syn::DataEnum,
) -> darling::Result<Vec<TableRow>> {
    let mut errors = darling::Error::accumulator();
    let mut rows = Vec::with_capacity(data.variants.len());
    let mut seen_paths: HashMap<String, Ident> = HashMap::new();
    let mut seen_names: HashMap<String, Ident> = HashMap::new();

    for variant in &data.variants {
        if !variant.attrs.iter().any(|attr| attr.path().is_ident("route")) {
            errors.push(
                darling::Error::custom(format!(
                    "Variant `{}` is missing `#[route(path = \"...\")]`.",
                    variant.ident
                ))
                    .with_span(&variant.ident),
            );
            continue;
        }
        let Some(parsed) = errors.handle(RouteVariant::from_variant(variant)) else {
            continue;
        };
        let Some(path) = errors.handle(
            crate::route_path::validate_static_path(&parsed.path).map_err(darling::Error::from),
        ) else {
            continue;
        };

        let name = match &parsed.name {
            Some(lit) if lit.value().trim().is_empty() => {
                errors.push(darling::Error::custom("Route name must not be empty.").with_span(lit));
                continue;
            }
            Some(lit) => lit.value(),
            None => parsed.ident.to_string(),
        };

        if let Some(other) = seen_paths.get(&path) {
            errors.push(
                darling::Error::custom(format!("Path `{}` is already used by `{}`.", path, other))
                    .with_span(&parsed.path),
            );
            continue;
        }
        if let Some(other) = seen_names.get(&name) {
            let err = darling::Error::custom(format!(
                "Name `{}` is already used by `{}`.",
                name, other
            ));
            errors.push(match &parsed.name {
                Some(lit) => err.with_span(lit),
                None => err.with_span(&parsed.ident),
            });
            continue;
        }
        seen_paths.insert(path.clone(), parsed.ident.clone());
        seen_names.insert(name.clone(), parsed.ident.clone());

        let view = match &parsed.view {
            Some(view) => quote! { #view },
            None => {
                let view_ident = crate::utils::build_variant_view_name(
                    &config.view_prefix,
                    &parsed.ident,
                    &config.view_suffix,
                );
                quote! { #view_ident }
            }
        };

        rows.push(TableRow {
            variant: parsed.ident,
            path,
            name,
            view,
        });
    }

    errors.finish_with(rows)
}

fn expand(config: &RouteTableConfiguration, rows: &[TableRow]) -> TokenStream2 {
    let enum_ident = &config.ident;
    let transition = config.transition;

    let mut entries = Vec::with_capacity(rows.len());
    let mut path_arms = Vec::with_capacity(rows.len());
    let mut name_arms = Vec::with_capacity(rows.len());
    let mut from_path_arms = Vec::with_capacity(rows.len());
    let mut from_name_arms = Vec::with_capacity(rows.len());
    let mut children = Vec::with_capacity(rows.len());

    for TableRow { variant, path, name, view } in rows {
        entries.push(quote! {
            ::weather_routes::RouteEntry {
                path: #path,
                name: #name,
                route: #enum_ident::#variant,
            }
        });
        path_arms.push(quote! { #enum_ident::#variant => #path });
        name_arms.push(quote! { #enum_ident::#variant => #name });
        from_path_arms.push(quote! { #path => ::std::option::Option::Some(#enum_ident::#variant) });
        from_name_arms.push(quote! { #name => ::std::option::Option::Some(#enum_ident::#variant) });
        children.push(quote! {
            ::leptos_router::components::Route(
                ::leptos_router::components::RouteProps::builder()
                    .path(::leptos_router::path!(#path))
                    .view(#view)
                    .build())
        });
    }

    quote! {
        /* -----------------------------------------------------------------------------------------
         * `RouteTable` implementation
         * ---------------------------------------------------------------------------------------*/
        impl ::weather_routes::RouteTable for #enum_ident {
            const ENTRIES: &'static [::weather_routes::RouteEntry<Self>] = &[#(#entries),*];

            fn path(&self) -> &'static str {
                match self {
                    #(#path_arms,)*
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            fn from_path(path: &str) -> ::std::option::Option<Self> {
                match ::weather_routes::normalize_path(path) {
                    #(#from_path_arms,)*
                    _ => ::std::option::Option::None,
                }
            }

            fn from_name(name: &str) -> ::std::option::Option<Self> {
                match name {
                    #(#from_name_arms,)*
                    _ => ::std::option::Option::None,
                }
            }

            fn routes() -> impl ::leptos::IntoView {
                ::leptos_router::components::Routes(
                    ::leptos_router::components::RoutesProps::builder()
                        .transition(#transition)
                        .fallback(|| ())
                        .children(
                            ::leptos::children::ToChildren::to_children(move || {
                                (#(#children,)*)
                            })
                        )
                        .build()
                )
            }

            fn flat_routes() -> impl ::leptos::IntoView {
                ::leptos_router::components::FlatRoutes(
                    ::leptos_router::components::FlatRoutesProps::builder()
                        .transition(#transition)
                        .fallback(|| ())
                        .children(
                            ::leptos::children::ToChildren::to_children(move || {
                                (#(#children,)*)
                            })
                        )
                        .build()
                )
            }
        }

        impl ::std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as ::weather_routes::RouteTable>::path(self))
            }
        }

        impl ::std::str::FromStr for #enum_ident {
            type Err = ::weather_routes::RouteError;

            fn from_str(input: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as ::weather_routes::RouteTable>::from_path(input)
                    .ok_or_else(|| ::weather_routes::RouteError::NoMatch(input.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn rows_for(input: DeriveInput) -> darling::Result<Vec<TableRow>> {
        let config = RouteTableConfiguration::from_derive_input(&input)?;
        let Enum(ref data) = input.data else {
            panic!("test input must be an enum");
        };
        collect_rows(&config, data)
    }

    fn error_text(input: DeriveInput) -> String {
        match rows_for(input) {
            Ok(_) => panic!("expected the derive to reject the input"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn rows_follow_declaration_order() {
        let rows = rows_for(parse_quote! {
            enum Panels {
                #[route(path = "/wind/")]
                Wind,
                #[route(path = "/air-quality", name = "Air", view = views::Air)]
                AirQuality,
            }
        })
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].variant, "Wind");
        assert_eq!(rows[0].path, "/wind");
        assert_eq!(rows[0].name, "Wind");
        assert_eq!(rows[0].view.to_string(), "WindView");
        assert_eq!(rows[1].name, "Air");
        assert_eq!(rows[1].view.to_string(), quote! { views::Air }.to_string());
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let text = error_text(parse_quote! {
            enum Panels {
                #[route(path = "/rain")]
                Rain,
                #[route(path = "/rain")]
                Drizzle,
            }
        });
        assert!(text.contains("Path `/rain` is already used by `Rain`."), "{text}");
    }

    #[test]
    fn trailing_slash_does_not_make_a_path_distinct() {
        let text = error_text(parse_quote! {
            enum Panels {
                #[route(path = "/wind")]
                Wind,
                #[route(path = "/wind/")]
                Gust,
            }
        });
        assert!(text.contains("Path `/wind` is already used by `Wind`."), "{text}");
    }

    #[test]
    fn explicit_name_clashing_with_default_is_rejected() {
        let text = error_text(parse_quote! {
            enum Panels {
                #[route(path = "/wind")]
                Wind,
                #[route(path = "/gust", name = "Wind")]
                Gust,
            }
        });
        assert!(text.contains("Name `Wind` is already used by `Wind`."), "{text}");
    }

    #[test]
    fn variant_without_route_is_rejected() {
        let text = error_text(parse_quote! {
            enum Panels {
                #[route(path = "/wind")]
                Wind,
                Gust,
            }
        });
        assert!(text.contains("Variant `Gust` is missing"), "{text}");
    }

    #[test]
    fn empty_name_is_rejected() {
        let text = error_text(parse_quote! {
            enum Panels {
                #[route(path = "/wind", name = " ")]
                Wind,
            }
        });
        assert!(text.contains("must not be empty"), "{text}");
    }

    #[test]
    fn tuple_variant_is_rejected_by_the_container() {
        let input: DeriveInput = parse_quote! {
            enum Panels {
                #[route(path = "/station")]
                Station(u32),
            }
        };
        assert!(RouteTableConfiguration::from_derive_input(&input).is_err());
    }

    #[test]
    fn struct_is_rejected_by_the_container() {
        let input: DeriveInput = parse_quote! {
            struct Panels;
        };
        assert!(RouteTableConfiguration::from_derive_input(&input).is_err());
    }
}
