use syn::{Error, LitStr};

/// One `/`-separated piece of a route path as written in `#[route(path = ...)]`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum RouteSegment {
    Static(String),
    Param(String),
    OptionalParam(String),
    Wildcard(String),
}

pub(crate) fn parse_segments(path: &str) -> Vec<RouteSegment> {
    path.trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|seg| {
            if let Some(rest) = seg.strip_prefix(':') {
                match rest.strip_suffix('?') {
                    Some(name) => RouteSegment::OptionalParam(name.to_string()),
                    None => RouteSegment::Param(rest.to_string()),
                }
            } else if let Some(rest) = seg.strip_prefix('*') {
                RouteSegment::Wildcard(rest.to_string())
            } else {
                RouteSegment::Static(seg.to_string())
            }
        })
        .collect()
}

/// Validates that `lit` is an absolute path made only of static segments and returns
/// it in canonical form: a single leading `/`, no empty segments, no trailing `/`.
pub(crate) fn validate_static_path(lit: &LitStr) -> syn::Result<String> {
    let raw = lit.value();
    if !raw.starts_with('/') {
        return Err(Error::new(
            lit.span(),
            format!("Route path `{}` must start with `/`.", raw),
        ));
    }
    if raw.contains(|c: char| c == '?' || c == '#') {
        return Err(Error::new(
            lit.span(),
            format!("Route path `{}` must not contain a query or fragment.", raw),
        ));
    }

    let mut statics = Vec::new();
    for seg in parse_segments(&raw) {
        match seg {
            RouteSegment::Static(text) => statics.push(text),
            RouteSegment::Param(name) | RouteSegment::OptionalParam(name) => {
                return Err(Error::new(
                    lit.span(),
                    format!(
                        "Path param `:{}` in `{}` is not supported; entries are static.",
                        name, raw
                    ),
                ));
            }
            RouteSegment::Wildcard(name) => {
                return Err(Error::new(
                    lit.span(),
                    format!(
                        "Wildcard `*{}` in `{}` is not supported; entries are static.",
                        name, raw
                    ),
                ));
            }
        }
    }

    Ok(format!("/{}", statics.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    fn lit(value: &str) -> LitStr {
        LitStr::new(value, Span::call_site())
    }

    #[test]
    fn segments_are_classified() {
        assert_eq!(
            parse_segments("/station/:id/:day?/*rest"),
            vec![
                RouteSegment::Static("station".to_string()),
                RouteSegment::Param("id".to_string()),
                RouteSegment::OptionalParam("day".to_string()),
                RouteSegment::Wildcard("rest".to_string()),
            ]
        );
    }

    #[test]
    fn static_paths_are_canonicalized() {
        assert_eq!(validate_static_path(&lit("/air-quality")).unwrap(), "/air-quality");
        assert_eq!(validate_static_path(&lit("/wind/")).unwrap(), "/wind");
        assert_eq!(validate_static_path(&lit("//soil//index")).unwrap(), "/soil/index");
        assert_eq!(validate_static_path(&lit("/")).unwrap(), "/");
    }

    #[test]
    fn relative_paths_are_rejected() {
        let err = validate_static_path(&lit("wind")).unwrap_err();
        assert!(err.to_string().contains("must start with `/`"));
    }

    #[test]
    fn dynamic_segments_are_rejected() {
        assert!(validate_static_path(&lit("/station/:id")).is_err());
        assert!(validate_static_path(&lit("/station/:id?")).is_err());
        assert!(validate_static_path(&lit("/files/*rest")).is_err());
    }

    #[test]
    fn queries_and_fragments_are_rejected() {
        assert!(validate_static_path(&lit("/rain?unit=mm")).is_err());
        assert!(validate_static_path(&lit("/rain#today")).is_err());
    }
}
