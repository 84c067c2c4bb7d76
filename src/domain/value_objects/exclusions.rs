//! Exclusion set value object
//!
//! The operator supplies one ordered list of glob-like patterns. Each engine
//! gets its own re-encoding of that list; there is no shared intermediate
//! form because unison `Path` matching and rsync filter rules disagree on
//! anchoring and `**` handling.

use std::fmt;

/// One flag/value pair in an engine's exclusion vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgFragment {
    pub flag: &'static str,
    pub value: String,
}

impl ArgFragment {
    pub fn new(flag: &'static str, value: impl Into<String>) -> Self {
        Self {
            flag,
            value: value.into(),
        }
    }

    /// The fragment as consecutive argument tokens
    pub fn tokens(&self) -> [String; 2] {
        [self.flag.to_string(), self.value.clone()]
    }
}

impl fmt::Display for ArgFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.value)
    }
}

/// Ordered exclusion patterns, kept exactly as supplied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// `-ignore "Path <pattern>"` per pattern, for the bidirectional engine.
    ///
    /// Unison paths are always relative to the sync root, so an rsync-style
    /// leading `/` anchor is dropped.
    pub fn path_fragments(&self) -> Vec<ArgFragment> {
        self.patterns
            .iter()
            .map(|p| {
                let p = p.strip_prefix('/').unwrap_or(p);
                ArgFragment::new("-ignore", format!("Path {}", p))
            })
            .collect()
    }

    /// `--exclude <pattern>` per pattern, for the one-way engine.
    pub fn glob_fragments(&self) -> Vec<ArgFragment> {
        self.patterns
            .iter()
            .map(|p| ArgFragment::new("--exclude", p.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_produces_no_fragments() {
        let set = ExclusionSet::default();
        assert!(set.path_fragments().is_empty());
        assert!(set.glob_fragments().is_empty());
    }

    #[test]
    fn path_fragments_keep_order() {
        let set = ExclusionSet::new(["logs/**", "*.tmp", "cache"]);
        let values: Vec<_> = set.path_fragments().into_iter().map(|f| f.value).collect();
        assert_eq!(values, ["Path logs/**", "Path *.tmp", "Path cache"]);
    }

    #[test]
    fn glob_fragments_pass_patterns_verbatim() {
        let set = ExclusionSet::new(["/build", "logs/**"]);
        let frags = set.glob_fragments();
        assert_eq!(frags[0], ArgFragment::new("--exclude", "/build"));
        assert_eq!(frags[1], ArgFragment::new("--exclude", "logs/**"));
    }

    #[test]
    fn path_fragments_drop_leading_anchor() {
        let set = ExclusionSet::new(["/build"]);
        assert_eq!(set.path_fragments()[0].value, "Path build");
    }

    #[test]
    fn duplicates_are_not_removed() {
        let set = ExclusionSet::new(["a", "a"]);
        assert_eq!(set.path_fragments().len(), 2);
        assert_eq!(set.glob_fragments().len(), 2);
    }

    #[test]
    fn fragment_tokens_are_flag_then_value() {
        let frag = ArgFragment::new("-ignore", "Path logs");
        assert_eq!(frag.tokens(), ["-ignore".to_string(), "Path logs".to_string()]);
        assert_eq!(frag.to_string(), "-ignore Path logs");
    }
}
