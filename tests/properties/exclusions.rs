use dirsync::ExclusionSet;
use proptest::prelude::*;

fn pattern() -> impl Strategy<Value = String> {
    "[a-z*?.]{1,6}(/[a-z*?.]{1,6}){0,2}"
}

proptest! {
    #[test]
    fn one_fragment_per_pattern_in_order(patterns in prop::collection::vec(pattern(), 0..8)) {
        let set = ExclusionSet::new(patterns.clone());

        let globs = set.glob_fragments();
        prop_assert_eq!(globs.len(), patterns.len());
        for (fragment, pattern) in globs.iter().zip(&patterns) {
            prop_assert_eq!(fragment.tokens(), ["--exclude".to_string(), pattern.clone()]);
        }

        let paths = set.path_fragments();
        prop_assert_eq!(paths.len(), patterns.len());
        for (fragment, pattern) in paths.iter().zip(&patterns) {
            prop_assert_eq!(fragment.tokens(), ["-ignore".to_string(), format!("Path {}", pattern)]);
        }
    }

    #[test]
    fn leading_slash_is_dropped_for_path_fragments(pattern in pattern()) {
        let set = ExclusionSet::new([format!("/{}", pattern)]);
        prop_assert_eq!(
            set.path_fragments()[0].tokens(),
            ["-ignore".to_string(), format!("Path {}", pattern)]
        );
        prop_assert_eq!(
            set.glob_fragments()[0].tokens(),
            ["--exclude".to_string(), format!("/{}", pattern)]
        );
    }
}
