use super::Syntax;

pub static PATH_SEPARATOR: char = '/';

pub fn is_path_separator(c: u8) -> bool {
    c == b'/'
}

/// POSIX paths never carry a volume.
pub fn volume_name_len(_path: &str) -> usize {
    0
}

fn is_verbatim(_path: &str) -> bool {
    false
}

fn post_clean(_vol_len: usize, _out: &mut String) {}

pub(crate) static SYNTAX: Syntax = Syntax {
    separator: PATH_SEPARATOR,
    is_separator: is_path_separator,
    volume_name_len,
    is_verbatim,
    post_clean,
};

#[test]
fn test_only_slash_separates() {
    assert!(is_path_separator(b'/'));
    assert!(!is_path_separator(b'\\'));
    assert!(!is_path_separator(b':'));
}

#[test]
fn test_volume_name_len() {
    let paths = [
        "",
        "/",
        "C:",
        "C:\\path",
        "\\\\server\\share",
        "//server/share",
        "\\\\?\\C:\\file",
    ];

    for path in paths.iter() {
        assert_eq!(volume_name_len(path), 0);
        assert!(!is_verbatim(path));
    }
}
