// crates/goto-core/src/complete.rs - Shell Completion Candidates
//
// Given the words typed so far (program name excluded, last word being the
// one under the cursor, possibly empty), work out what could come next:
//
//   goto <TAB>               every root
//   goto -s pr<TAB>          roots starting with "pr"
//   goto proj<TAB>           when "proj" is a root: its shortcuts
//   goto do<TAB>             otherwise: current root's shortcuts starting with "do"
//   goto proj do<TAB>        proj's shortcuts starting with "do"
//
// Matching is a case-sensitive prefix test. Shortcut candidates keep the
// order of the effective table; root candidates are sorted.

use crate::resolve::effective_shortcuts;
use crate::store::RootStore;

/// Flags whose value is a root identifier
const ROOT_FLAGS: &[&str] = &["-s", "--set", "-o", "--open", "-a", "--all"];

/// Completion candidates for `tokens`, given `current_root`
pub fn candidates(store: &RootStore, current_root: &str, tokens: &[&str]) -> Vec<String> {
    match tokens {
        [] => store.sorted_identifiers(),

        [flag, rest @ ..] if ROOT_FLAGS.contains(flag) => match rest {
            [] => store.sorted_identifiers(),
            [partial] => filter(store.sorted_identifiers(), partial),
            _ => Vec::new(),
        },

        [first] if store.contains(first) => shortcut_names(store, first, ""),

        [partial] => shortcut_names(store, current_root, partial),

        [root, partial] => shortcut_names(store, root, partial),

        _ => Vec::new(),
    }
}

fn shortcut_names(store: &RootStore, root: &str, partial: &str) -> Vec<String> {
    filter(effective_shortcuts(store, root).into_keys(), partial)
}

fn filter(options: impl IntoIterator<Item = String>, partial: &str) -> Vec<String> {
    options
        .into_iter()
        .filter(|option| option.starts_with(partial))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::root::Root;

    fn store() -> RootStore {
        let mut proj = Root::empty("proj", None, "/p").unwrap();
        proj.defaults = vec!["common".into()];
        for name in ["docs", "src", "dist"] {
            proj.shortcuts.insert(name.into(), name.into());
        }

        let mut common = Root::empty("common", None, "").unwrap();
        common.shortcuts.insert("root".into(), "".into());
        common.shortcuts.insert("Docs".into(), "".into());

        let mut home = Root::empty("home", None, "~").unwrap();
        home.shortcuts.insert("downloads".into(), "Downloads".into());

        RootStore::from_roots([proj, common, home])
    }

    #[test]
    fn test_no_tokens_lists_roots() {
        assert_eq!(candidates(&store(), "proj", &[]), vec!["common", "home", "proj"]);
    }

    #[test]
    fn test_root_flag_lists_roots() {
        let store = store();
        assert_eq!(candidates(&store, "proj", &["-s"]), vec!["common", "home", "proj"]);
        assert_eq!(candidates(&store, "proj", &["--set", ""]), vec!["common", "home", "proj"]);
        assert_eq!(candidates(&store, "proj", &["-o", "co"]), vec!["common"]);
        assert!(candidates(&store, "proj", &["-s", "x", "y"]).is_empty());
    }

    #[test]
    fn test_known_root_lists_its_shortcuts() {
        assert_eq!(
            candidates(&store(), "home", &["proj"]),
            vec!["docs", "src", "dist", "root", "Docs"]
        );
    }

    #[test]
    fn test_unknown_word_filters_current_root() {
        let store = store();
        assert_eq!(candidates(&store, "proj", &["d"]), vec!["docs", "dist"]);
        assert_eq!(candidates(&store, "home", &["d"]), vec!["downloads"]);
        assert_eq!(candidates(&store, "proj", &["D"]), vec!["Docs"]);
        assert!(candidates(&store, "proj", &["zzz"]).is_empty());
    }

    #[test]
    fn test_empty_word_matches_everything() {
        assert_eq!(
            candidates(&store(), "proj", &[""]),
            vec!["docs", "src", "dist", "root", "Docs"]
        );
    }

    #[test]
    fn test_second_word_filters_named_root() {
        let store = store();
        assert_eq!(candidates(&store, "home", &["proj", "s"]), vec!["src"]);
        assert_eq!(candidates(&store, "home", &["proj", ""]).len(), 5);
        assert!(candidates(&store, "home", &["ghost", ""]).is_empty());
    }

    #[test]
    fn test_dangling_current_root_gives_nothing() {
        assert!(candidates(&store(), "deleted", &["d"]).is_empty());
    }

    #[test]
    fn test_too_many_words_gives_nothing() {
        assert!(candidates(&store(), "proj", &["proj", "docs", "x"]).is_empty());
    }
}
