//! Route pattern parsing and matching
//!
//! Patterns use the colon syntax common to client-side routers:
//!
//! | Pattern        | Matches                                 |
//! |----------------|-----------------------------------------|
//! | `about`        | the literal segment `about`             |
//! | `:id`          | exactly one segment                     |
//! | `:id?`         | zero or one segment                     |
//! | `:rest*`       | zero or more segments (catch-all)       |
//! | `:rest+`       | one or more segments                    |
//!
//! The regex `(.*)` may span `/`, so `:rest(.*)` and `:rest(.*)*` both mean
//! `:rest*` and `:rest(.*)+` means `:rest+`; any other regex is rejected.
//! Repeatable parameters must be the final segment.

use std::fmt;

use crate::error::RoutingError;
use crate::params::{ParamValue, Params};

/// A single segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    Optional(String),
    ZeroOrMore(String),
    OneOrMore(String),
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(source: &str) -> Result<Self, RoutingError> {
        let parts: Vec<&str> = source.split('/').filter(|part| !part.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            let segment = classify_segment(source, part)?;
            let repeatable = matches!(segment, Segment::ZeroOrMore(_) | Segment::OneOrMore(_));
            if repeatable && index + 1 != parts.len() {
                return Err(RoutingError::invalid_pattern(
                    source,
                    "repeatable parameter must be the final segment",
                ));
            }
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Absolute patterns start with `/`; relative ones nest under a parent
    pub fn is_absolute(&self) -> bool {
        self.source.starts_with('/')
    }

    /// True when the pattern ends in a zero-or-more parameter
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::ZeroOrMore(_)))
    }

    /// Resolves `child` against this pattern
    pub fn join(&self, child: &Pattern) -> Result<Pattern, RoutingError> {
        if child.is_absolute() {
            return Ok(child.clone());
        }
        if child.source.is_empty() {
            return Ok(self.clone());
        }
        let parent = self.source.trim_end_matches('/');
        Pattern::parse(&format!("{parent}/{}", child.source))
    }

    /// Matches the whole of `path`, returning the captured parameters
    pub fn matches(&self, path: &[&str]) -> Option<Params> {
        let mut params = Params::new();
        match_segments(&self.segments, path, &mut params).then_some(params)
    }

    /// Builds a concrete path, or names the first missing parameter
    pub fn build(&self, params: &Params) -> Result<String, String> {
        let mut parts: Vec<String> = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => parts.push(text.clone()),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .and_then(|value| value.segments().first().copied())
                        .ok_or_else(|| name.clone())?;
                    parts.push(encode(value));
                }
                Segment::Optional(name) => {
                    if let Some(value) = params.get(name).and_then(|v| v.segments().first().copied()) {
                        parts.push(encode(value));
                    }
                }
                Segment::ZeroOrMore(name) | Segment::OneOrMore(name) => {
                    let values = params.get(name).map(ParamValue::segments).unwrap_or_default();
                    if values.is_empty() && matches!(segment, Segment::OneOrMore(_)) {
                        return Err(name.clone());
                    }
                    parts.extend(values.into_iter().map(encode));
                }
            }
        }
        Ok(format!("/{}", parts.join("/")))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn classify_segment(source: &str, part: &str) -> Result<Segment, RoutingError> {
    let Some(body) = part.strip_prefix(':') else {
        return Ok(Segment::Static(part.to_string()));
    };

    let (body, modifier) = match body.chars().last() {
        Some(m @ ('?' | '*' | '+')) => (&body[..body.len() - 1], Some(m)),
        _ => (body, None),
    };

    let (name, spans_slashes) = match body.split_once('(') {
        Some((name, regex)) => {
            let regex = regex.strip_suffix(')').ok_or_else(|| {
                RoutingError::invalid_pattern(source, format!("unclosed regex in `{part}`"))
            })?;
            if regex != ".*" {
                return Err(RoutingError::invalid_pattern(
                    source,
                    format!("unsupported parameter regex `{regex}`"),
                ));
            }
            (name, true)
        }
        None => (body, false),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(RoutingError::invalid_pattern(
            source,
            format!("invalid parameter name in `{part}`"),
        ));
    }

    let name = name.to_string();
    Ok(match modifier {
        None | Some('?') if spans_slashes => Segment::ZeroOrMore(name),
        None => Segment::Param(name),
        Some('?') => Segment::Optional(name),
        Some('*') => Segment::ZeroOrMore(name),
        _ => Segment::OneOrMore(name),
    })
}

fn match_segments(pattern: &[Segment], path: &[&str], params: &mut Params) -> bool {
    let Some((segment, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    match segment {
        Segment::Static(text) => {
            path.first().is_some_and(|first| decode(first) == *text)
                && match_segments(rest, &path[1..], params)
        }
        Segment::Param(name) => {
            let Some(first) = path.first() else {
                return false;
            };
            params.insert(name.clone(), ParamValue::Single(decode(first)));
            if match_segments(rest, &path[1..], params) {
                return true;
            }
            params.remove(name);
            false
        }
        Segment::Optional(name) => {
            if let Some(first) = path.first() {
                params.insert(name.clone(), ParamValue::Single(decode(first)));
                if match_segments(rest, &path[1..], params) {
                    return true;
                }
                params.remove(name);
            }
            match_segments(rest, path, params)
        }
        Segment::ZeroOrMore(name) | Segment::OneOrMore(name) => {
            if path.is_empty() && matches!(segment, Segment::OneOrMore(_)) {
                return false;
            }
            let values = path.iter().map(|part| decode(part)).collect();
            params.insert(name.clone(), ParamValue::Repeated(values));
            true
        }
    }
}

fn decode(part: &str) -> String {
    urlencoding::decode(part)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| part.to_string())
}

fn encode(part: &str) -> String {
    urlencoding::encode(part).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Pattern {
        Pattern::parse(source).unwrap()
    }

    #[test]
    fn test_classify_segments() {
        let pattern = parse("/users/:id/:tab?");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Static("users".to_string()),
                Segment::Param("id".to_string()),
                Segment::Optional("tab".to_string()),
            ]
        );
    }

    #[test]
    fn test_regex_catch_all_spelling() {
        let pattern = parse("/:catchAll(.*)*");
        assert_eq!(pattern.segments(), &[Segment::ZeroOrMore("catchAll".to_string())]);
        assert!(pattern.is_catch_all());
        assert_eq!(parse("/:rest*"), Pattern { source: "/:rest*".into(), ..pattern });
    }

    #[test]
    fn test_bare_regex_spans_segments() {
        let pattern = parse("/:pathMatch(.*)");
        assert_eq!(pattern.segments(), &[Segment::ZeroOrMore("pathMatch".to_string())]);
        assert!(pattern.is_catch_all());
        let params = pattern.matches(&["a", "b"]).unwrap();
        assert_eq!(
            params.get("pathMatch"),
            Some(&ParamValue::Repeated(vec!["a".to_string(), "b".to_string()]))
        );
        assert!(pattern.matches(&[]).is_some());

        let pattern = parse("/:rest(.*)+");
        assert_eq!(pattern.segments(), &[Segment::OneOrMore("rest".to_string())]);
        assert!(Pattern::parse("/:rest(.*)/edit").is_err());
    }

    #[test]
    fn test_one_or_more_is_not_catch_all() {
        assert!(!parse("/:rest+").is_catch_all());
        assert!(!parse("/").is_catch_all());
    }

    #[test]
    fn test_rejects_custom_regex() {
        let err = Pattern::parse("/:id(\\d+)").unwrap_err();
        assert!(matches!(err, RoutingError::InvalidPattern { .. }));
    }

    #[test]
    fn test_rejects_repeatable_before_end() {
        assert!(Pattern::parse("/:rest*/edit").is_err());
    }

    #[test]
    fn test_rejects_empty_param_name() {
        assert!(Pattern::parse("/:").is_err());
        assert!(Pattern::parse("/:?").is_err());
        assert!(Pattern::parse("/:(.*)*").is_err());
    }

    #[test]
    fn test_join() {
        let root = parse("/");
        assert_eq!(root.join(&parse("")).unwrap().as_str(), "/");
        assert_eq!(root.join(&parse("about")).unwrap().as_str(), "/about");
        assert_eq!(parse("/docs").join(&parse(":page")).unwrap().as_str(), "/docs/:page");
        assert_eq!(parse("/docs").join(&parse("/abs")).unwrap().as_str(), "/abs");
    }

    #[test]
    fn test_root_matches_only_empty_path() {
        let root = parse("/");
        assert!(root.matches(&[]).is_some());
        assert!(root.matches(&["about"]).is_none());
    }

    #[test]
    fn test_optional_backtracks() {
        let pattern = parse("/:lang?/docs");
        let params = pattern.matches(&["docs"]).unwrap();
        assert!(params.is_empty());
        let params = pattern.matches(&["en", "docs"]).unwrap();
        assert_eq!(params.get_one("lang"), Some("en"));
    }

    #[test]
    fn test_catch_all_captures_zero_or_more() {
        let pattern = parse("/:rest*");
        let params = pattern.matches(&[]).unwrap();
        assert_eq!(params.get("rest"), Some(&ParamValue::Repeated(vec![])));
        let params = pattern.matches(&["a", "b"]).unwrap();
        assert_eq!(
            params.get("rest"),
            Some(&ParamValue::Repeated(vec!["a".to_string(), "b".to_string()]))
        );
        assert!(parse("/:rest+").matches(&[]).is_none());
    }

    #[test]
    fn test_params_are_decoded() {
        let params = parse("/files/:name").matches(&["hello%20world"]).unwrap();
        assert_eq!(params.get_one("name"), Some("hello world"));
    }

    #[test]
    fn test_build() {
        let pattern = parse("/users/:id/:tab?");
        let params = Params::new().with("id", "42");
        assert_eq!(pattern.build(&params).unwrap(), "/users/42");
        assert_eq!(pattern.build(&Params::new()).unwrap_err(), "id");

        let pattern = parse("/:rest*");
        assert_eq!(pattern.build(&Params::new()).unwrap(), "/");
        let params = Params::new().with_repeated("rest", ["a b", "c"]);
        assert_eq!(pattern.build(&params).unwrap(), "/a%20b/c");
    }
}
