use dirsync::{translate_remote, Dialect, Endpoint};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn local_paths_are_unchanged(parts in prop::collection::vec(segment(), 1..5), absolute in any::<bool>()) {
        let joined = parts.join("/");
        let path = if absolute { format!("/{}", joined) } else { joined };
        prop_assert_eq!(translate_remote(&path), path.clone());
        prop_assert_eq!(Endpoint::new(path).dialect(), Dialect::Local);
    }

    #[test]
    fn url_remotes_become_colon_remotes(
        user in "[a-z]{1,8}",
        host in "[a-z][a-z0-9.-]{0,15}",
        parts in prop::collection::vec(segment(), 1..5),
    ) {
        let path = parts.join("/");
        let raw = format!("ssh://{}@{}//{}", user, host, path);
        let translated = translate_remote(&raw);
        prop_assert_eq!(&translated, &format!("{}@{}:/{}", user, host, path));
        prop_assert_eq!(Endpoint::new(translated.clone()).dialect(), Dialect::ColonRemote);
        prop_assert_eq!(translate_remote(&translated), translated);
    }

    #[test]
    fn translation_never_panics(raw in ".*") {
        let _ = translate_remote(&raw);
        let endpoint = Endpoint::new(raw);
        let _ = endpoint.ambiguous_host();
        let _ = endpoint.as_contents_source();
    }

    #[test]
    fn contents_source_ends_with_exactly_one_added_slash(parts in prop::collection::vec(segment(), 1..4)) {
        let raw = parts.join("/");
        let source = Endpoint::new(raw.clone()).as_contents_source();
        prop_assert_eq!(source, format!("{}/", raw));
    }
}
