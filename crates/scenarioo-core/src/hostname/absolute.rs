//! Derive the absolute link base from the URL the viewer is displayed under.

/// Returns `scheme://host[:port]/` plus the first path segment (with its
/// trailing slash) of `abs_url`, ignoring the fragment and query.
///
/// Only a segment terminated by `/` counts as the application context, so
/// `http://h/scenarioo/index.html` yields `http://h/scenarioo/` and
/// `http://h/index.html` yields `http://h/`. Host case is kept as given.
///
/// Without a `scheme://` prefix there is no origin to keep; the string is
/// returned with only the fragment removed.
pub fn link_base_from_abs_url(abs_url: &str) -> String {
    let without_fragment = abs_url
        .split_once('#')
        .map_or(abs_url, |(before, _)| before);
    let without_query = without_fragment
        .split_once('?')
        .map_or(without_fragment, |(before, _)| before);

    let authority_start = match without_query.find("://") {
        Some(i) => i + 3,
        None => {
            tracing::warn!("location {:?} has no scheme, using it as link base", abs_url);
            return without_fragment.to_string();
        }
    };

    let authority_end = without_query[authority_start..]
        .find('/')
        .map_or(without_query.len(), |i| authority_start + i);
    let origin = &without_query[..authority_end];
    let path = without_query[authority_end..].trim_start_matches('/');

    match path.split_once('/') {
        Some((context, _)) if !context.is_empty() => format!("{}/{}/", origin, context),
        _ => format!("{}/", origin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_context_without_port() {
        assert_eq!(
            link_base_from_abs_url("http://myDomain/scenarioo/#/step/Find page/..."),
            "http://myDomain/scenarioo/"
        );
    }

    #[test]
    fn keeps_port_at_root() {
        assert_eq!(
            link_base_from_abs_url("https://myDomain:8080/#/step/Find page/..."),
            "https://myDomain:8080/"
        );
    }

    #[test]
    fn drops_deeper_path_and_query() {
        assert_eq!(
            link_base_from_abs_url("http://host:81/scenarioo/index.html?x=1#/usecase/a"),
            "http://host:81/scenarioo/"
        );
        assert_eq!(
            link_base_from_abs_url("http://host/a/b/c/"),
            "http://host/a/"
        );
    }

    #[test]
    fn file_at_root_is_not_a_context() {
        assert_eq!(link_base_from_abs_url("http://host/index.html#/"), "http://host/");
        assert_eq!(link_base_from_abs_url("http://host"), "http://host/");
        assert_eq!(link_base_from_abs_url("http://host?q=1"), "http://host/");
    }

    #[test]
    fn no_scheme_only_strips_fragment() {
        assert_eq!(link_base_from_abs_url("scenarioo/#/step"), "scenarioo/");
        assert_eq!(link_base_from_abs_url(""), "");
    }
}
