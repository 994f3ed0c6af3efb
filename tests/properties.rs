//! Property-based tests for the lexical path invariants.

use pathlex::{Dialect, PathLexer};
use proptest::prelude::*;

// ── Strategies ───────────────────────────────────────────────────

/// Paths assembled from names, dot elements, drive letters and both
/// separators, so that every interesting case shows up often.
fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("/".to_string()),
            Just("\\".to_string()),
            Just(".".to_string()),
            Just("..".to_string()),
            Just("C:".to_string()),
            Just("?".to_string()),
            "[a-z]{1,4}",
            "[a-z]{1,3}\\.[a-z]{1,3}",
        ],
        0..10,
    )
    .prop_map(|parts| parts.concat())
}

/// Arbitrary printable strings.
fn arb_text() -> impl Strategy<Value = String> {
    "\\PC{0,60}"
}

fn arb_lexer() -> impl Strategy<Value = PathLexer> {
    prop_oneof![Just(PathLexer::POSIX), Just(PathLexer::WINDOWS)]
}

/// A lexer paired with a path anchored at one of its roots. POSIX only
/// has `/`; Windows adds drive roots and UNC shares.
fn rooted_path() -> impl Strategy<Value = (PathLexer, String)> {
    let posix = arb_path().prop_map(|rest| (PathLexer::POSIX, format!("/{}", rest)));
    let windows = (
        prop_oneof![
            Just("/"),
            Just("\\"),
            Just("C:\\"),
            Just("\\\\srv\\shr\\"),
        ],
        arb_path(),
    )
        .prop_map(|(root, rest)| (PathLexer::WINDOWS, format!("{}{}", root, rest)));

    prop_oneof![posix, windows]
}

/// Anchored at a root: a leading separator (which covers UNC and
/// device volumes) or a separator right after a drive volume.
fn is_rooted(lexer: &PathLexer, path: &str) -> bool {
    let starts_with_sep = |s: &str| {
        s.chars()
            .next()
            .map_or(false, |c| lexer.dialect().is_separator(c))
    };

    starts_with_sep(path) || starts_with_sep(&path[lexer.volume_name_len(path)..])
}

// ── clean ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn clean_is_idempotent(lexer in arb_lexer(), path in arb_path()) {
        let once = lexer.clean(&path);
        let twice = lexer.clean(&once);
        prop_assert_eq!(&once, &twice, "input {:?}", path);
    }

    #[test]
    fn clean_is_idempotent_on_any_text(lexer in arb_lexer(), path in arb_text()) {
        let once = lexer.clean(&path);
        prop_assert_eq!(lexer.clean(&once), once);
    }

    #[test]
    fn clean_never_lengthens(lexer in arb_lexer(), path in arb_path()) {
        let vol_len = lexer.volume_name_len(&path);
        // "" becomes "." and a bare volume gains a "." or nothing.
        prop_assume!(path.len() > vol_len);
        prop_assert!(lexer.clean(&path).len() <= path.len());
    }

    #[test]
    fn clean_keeps_rooted_paths_rooted((lexer, path) in rooted_path()) {
        prop_assert!(is_rooted(&lexer, &path), "{:?}", path);
        let cleaned = lexer.clean(&path);
        prop_assert!(is_rooted(&lexer, &cleaned), "{:?} -> {:?}", path, cleaned);
    }

    #[test]
    fn clean_never_ends_in_separator_unless_root(lexer in arb_lexer(), path in arb_path()) {
        prop_assume!(!lexer.is_verbatim(&path));
        let cleaned = lexer.clean(&path);
        let vol_len = lexer.volume_name_len(&cleaned);
        let rest = &cleaned[vol_len..];
        if rest.len() > 1 {
            let last = rest.chars().last().unwrap();
            prop_assert!(!lexer.dialect().is_separator(last), "{:?}", cleaned);
        }
    }

    #[test]
    fn windows_clean_uses_backslashes(path in arb_path()) {
        let lexer = PathLexer::WINDOWS;
        prop_assume!(!lexer.is_verbatim(&path));
        prop_assert!(!lexer.clean(&path).contains('/'));
    }

    #[test]
    fn dir_is_already_clean(lexer in arb_lexer(), path in arb_path()) {
        prop_assume!(!lexer.is_verbatim(&path));
        let dir = lexer.dir(&path);
        prop_assert_eq!(lexer.clean(&dir), dir);
    }
}

// ── split / base / ext ───────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn split_reconstructs_path(lexer in arb_lexer(), path in arb_text()) {
        let (dir, file) = lexer.split(&path);
        prop_assert_eq!(format!("{}{}", dir, file), path);
    }

    #[test]
    fn split_file_has_no_separator(lexer in arb_lexer(), path in arb_path()) {
        let (_, file) = lexer.split(&path);
        prop_assert!(!file.chars().any(|c| lexer.dialect().is_separator(c)));
    }

    #[test]
    fn split_keeps_volume_in_dir(lexer in arb_lexer(), path in arb_path()) {
        let (dir, _) = lexer.split(&path);
        prop_assert!(dir.len() >= lexer.volume_name_len(&path));
    }

    #[test]
    fn base_is_never_empty(lexer in arb_lexer(), path in arb_text()) {
        prop_assert!(!lexer.base(&path).is_empty());
    }

    #[test]
    fn ext_is_suffix_of_base(lexer in arb_lexer(), path in arb_path()) {
        let ext = lexer.ext(&path);
        prop_assert!(path.ends_with(ext));
        // A dot inside a volume such as \\. belongs to no element.
        if !ext.is_empty() && path.len() - ext.len() >= lexer.volume_name_len(&path) {
            prop_assert!(ext.starts_with('.'));
            prop_assert!(lexer.base(&path).ends_with(ext));
        }
    }
}

// ── slashes and volumes ──────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn from_slash_undoes_to_slash(path in "[a-z.]{0,5}(\\\\[a-z.]{0,5}){0,4}") {
        let lexer = PathLexer::WINDOWS;
        prop_assert_eq!(lexer.from_slash(&lexer.to_slash(&path)), path);
    }

    #[test]
    fn posix_slash_conversion_is_identity(path in arb_text()) {
        let lexer = PathLexer::POSIX;
        prop_assert_eq!(lexer.to_slash(&path), path.clone());
        prop_assert_eq!(lexer.from_slash(&path), path);
    }

    #[test]
    fn volume_is_prefix(path in arb_path()) {
        let lexer = PathLexer::WINDOWS;
        let vol_len = lexer.volume_name_len(&path);
        prop_assert!(vol_len <= path.len());
        prop_assert_eq!(lexer.volume_name(&path), lexer.from_slash(&path[..vol_len]));
    }

    #[test]
    fn posix_has_no_volume(path in arb_text()) {
        prop_assert_eq!(PathLexer::new(Dialect::Posix).volume_name(&path), "");
    }
}
