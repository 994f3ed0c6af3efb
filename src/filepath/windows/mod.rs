use fancy_regex::Regex;
use lazy_static::lazy_static;
use tracing::trace;

use super::Syntax;

pub static PATH_SEPARATOR: char = '\\';

/// Extended-length prefix. Only the literal backslash spelling
/// switches off path parsing on Windows.
const VERBATIM_PREFIX: &str = r"\\?\";

// Windows accepts forward slashes wherever it accepts backslashes,
// so both separate path elements. Output always uses backslashes.
pub fn is_path_separator(c: u8) -> bool {
    c == b'\\' || c == b'/'
}

lazy_static! {
    // Device (\\.\) and extended-length (\\?\) prefixes. The marker
    // absorbs the drive letter or the UNC\server\share it addresses;
    // for any other device name the bare marker is the volume.
    //
    // The lookaheads are why this needs fancy-regex: a drive letter
    // only counts when a separator or the end of input follows it.
    static ref DEVICE: Regex = Regex::new(
        r"(?s)^[\\/]{2}[?.][\\/](?=.)(?:[A-Za-z]:(?![^\\/])|(?i:unc)[\\/][^\\/]+(?:[\\/][^\\/]+)?)?"
    )
    .expect("device prefix pattern is valid");

    // UNC volume names look like \\server\share. The third character
    // cannot be another separator; a missing share leaves \\server.
    // See https://msdn.microsoft.com/en-us/library/windows/desktop/aa365247(v=vs.85).aspx
    static ref UNC: Regex = Regex::new(r"^[\\/]{2}[^\\/]+(?:[\\/][^\\/]+)?")
        .expect("UNC pattern is valid");
}

fn match_len(re: &Regex, path: &str) -> Option<usize> {
    match re.find(path) {
        Ok(Some(m)) => Some(m.end()),
        // A pattern that fails to run (backtrack limit) names no volume.
        _ => None,
    }
}

fn has_drive_letter(path: &[u8]) -> bool {
    path.len() >= 2 && path[0].is_ascii_alphabetic() && path[1] == b':'
}

/// Returns the byte length of the leading volume name.
///
/// Recognised, in order: `\\?\` or `\\.\` device prefixes, drive
/// letters such as `C:`, and UNC shares. Anything else has no volume.
pub fn volume_name_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    if bytes.len() < 2 {
        return 0;
    }

    if has_drive_letter(bytes) {
        return 2;
    }

    if !is_path_separator(bytes[0]) || !is_path_separator(bytes[1]) {
        return 0;
    }

    match_len(&DEVICE, path)
        .or_else(|| match_len(&UNC, path))
        .unwrap_or(0)
}

pub fn is_verbatim(path: &str) -> bool {
    path.len() > VERBATIM_PREFIX.len() && path.starts_with(VERBATIM_PREFIX)
}

// Cleaning a relative path such as a/../c: must not leave a drive
// volume behind, otherwise a second clean would read it differently.
fn post_clean(vol_len: usize, out: &mut String) {
    if vol_len == 0 && has_drive_letter(out.as_bytes()) {
        trace!(path = %out, "escaping drive-like first element");
        out.insert(0, PATH_SEPARATOR);
        out.insert(0, '.');
    }
}

pub(crate) static SYNTAX: Syntax = Syntax {
    separator: PATH_SEPARATOR,
    is_separator: is_path_separator,
    volume_name_len,
    is_verbatim,
    post_clean,
};

#[test]
fn test_volume_name_len() {
    let paths = [
        // non ascii
        ("\\\\ふー\\バー", "\\\\ふー\\バー"),
        // drive letters
        ("C:", "C:"),
        ("c:\\path\\to\\file", "c:"),
        ("C:foo", "C:"),
        ("C", ""),
        ("1:", ""),
        (":", ""),
        // UNC cases
        ("\\\\server\\share\\file", "\\\\server\\share"),
        ("//host/share/x", "//host/share"),
        ("\\\\first\\next", "\\\\first\\next"),
        ("\\\\some.dir\\file", "\\\\some.dir\\file"),
        ("\\\\server", "\\\\server"),
        ("\\\\teela\\", "\\\\teela"),
        ("\\\\server\\\\share", "\\\\server"),
        ("\\\\.", "\\\\."),
        // device and extended-length prefixes
        ("\\\\?\\C:\\file", "\\\\?\\C:"),
        ("\\\\?\\C:", "\\\\?\\C:"),
        ("\\\\.\\c:\\a", "\\\\.\\c:"),
        ("\\\\?\\C:foo", "\\\\?\\"),
        ("\\\\.\\COM1\\x", "\\\\.\\"),
        ("\\\\?\\REL\\..\\\\..", "\\\\?\\"),
        ("\\\\.\\UNC\\host\\share\\x", "\\\\.\\UNC\\host\\share"),
        ("\\\\?\\unc\\host\\share", "\\\\?\\unc\\host\\share"),
        ("\\\\?\\UNC\\host", "\\\\?\\UNC\\host"),
        // No volume cases
        ("", ""),
        (".\\temp.txt", ""),
        ("..\\Publications\\TravelBrochure.pdf", ""),
        ("\\\\\\", ""),
        ("\\\\\\abc", ""),
        ("\\abc\\", ""),
    ];

    for (path, expected) in paths.iter() {
        assert_eq!(volume_name_len(path), expected.len(), "{:?}", path);
    }
}

#[test]
fn test_is_verbatim() {
    assert!(is_verbatim("\\\\?\\C:\\foo"));
    assert!(is_verbatim("\\\\?\\REL"));
    assert!(!is_verbatim("\\\\?\\"));
    assert!(!is_verbatim("//?/C:/foo"));
    assert!(!is_verbatim("\\\\.\\C:\\foo"));
    assert!(!is_verbatim("C:\\foo"));
}

#[test]
fn test_post_clean() {
    let mut out = String::from("c:\\a");
    post_clean(0, &mut out);
    assert_eq!(out, ".\\c:\\a");

    let mut out = String::from("c:\\a");
    post_clean(2, &mut out);
    assert_eq!(out, "c:\\a");

    let mut out = String::from("foo:bar");
    post_clean(0, &mut out);
    assert_eq!(out, "foo:bar");
}
