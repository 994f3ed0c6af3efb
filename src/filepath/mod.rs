//! Lexical filepath manipulation for POSIX and Windows paths.
//!
//! Nothing here touches the filesystem: every function takes a path
//! string and returns a new string (or a slice of the input), using
//! only the text of the path. Both dialects are always available, so
//! Windows paths can be processed on a Unix host and vice versa.
//!
//! Eg. Directory `src`
//! src
//! ./src
//! ./src/
//! src/
//! All clean to the same string.
//!
//! The behaviour follows the `filepath` package of Golang.
//! To see the actual golang implementation, please visit
//! https://golang.org/src/path/filepath/path.go?h=path.

mod unix;
mod windows;

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};

/// Separator characters, volume parsing and clean-up hooks of one
/// dialect. The two dialects only differ in this table.
pub(crate) struct Syntax {
    separator: char,
    is_separator: fn(u8) -> bool,
    volume_name_len: fn(&str) -> usize,
    is_verbatim: fn(&str) -> bool,
    post_clean: fn(usize, &mut String),
}

/// Path syntax ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `/` separated paths without volumes.
    Posix,
    /// `\` or `/` separated paths with drive letters, UNC shares and
    /// device prefixes.
    Windows,
}

impl Dialect {
    /// The dialect of the platform this crate was compiled for.
    pub fn host() -> Dialect {
        if cfg!(windows) {
            return Dialect::Windows;
        }

        Dialect::Posix
    }

    fn syntax(self) -> &'static Syntax {
        match self {
            Dialect::Posix => &unix::SYNTAX,
            Dialect::Windows => &windows::SYNTAX,
        }
    }

    /// The separator written into output paths.
    pub fn separator(self) -> char {
        self.syntax().separator
    }

    /// Reports whether `c` separates path elements in this dialect.
    pub fn is_separator(self, c: char) -> bool {
        c.is_ascii() && (self.syntax().is_separator)(c as u8)
    }

    fn is_sep_byte(self, c: u8) -> bool {
        (self.syntax().is_separator)(c)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::host()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Posix => f.write_str("posix"),
            Dialect::Windows => f.write_str("windows"),
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Dialect::Posix),
            "windows" | "win" => Ok(Dialect::Windows),
            _ => Err(Error::UnknownDialect(s.to_owned())),
        }
    }
}

/// What `clean` does with extended-length (`\\?\`) paths.
///
/// Windows hands such paths to the filesystem without parsing them,
/// so `..` after the prefix may name a real directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verbatim {
    /// Return the path exactly as given.
    Preserve,
    /// Keep the volume (`\\?\C:`) and clean the rest like any other path.
    Normalize,
}

impl Default for Verbatim {
    fn default() -> Self {
        Verbatim::Preserve
    }
}

impl FromStr for Verbatim {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "preserve" => Ok(Verbatim::Preserve),
            "normalize" => Ok(Verbatim::Normalize),
            _ => Err(Error::UnknownVerbatim(s.to_owned())),
        }
    }
}

/// A dialect together with the policy choices that go with it.
///
/// ```
/// use pathlex::{Dialect, PathLexer};
///
/// let win = PathLexer::new(Dialect::Windows);
/// assert_eq!(win.clean("C:/path/to/../file"), "C:\\path\\file");
/// assert_eq!(win.volume_name("\\\\server\\share\\file"), "\\\\server\\share");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PathLexer {
    dialect: Dialect,
    verbatim: Verbatim,
}

impl PathLexer {
    /// POSIX paths, verbatim paths preserved.
    pub const POSIX: PathLexer = PathLexer {
        dialect: Dialect::Posix,
        verbatim: Verbatim::Preserve,
    };

    /// Windows paths, verbatim paths preserved.
    pub const WINDOWS: PathLexer = PathLexer {
        dialect: Dialect::Windows,
        verbatim: Verbatim::Preserve,
    };

    /// A lexer for `dialect` with the default [`Verbatim`] policy.
    pub fn new(dialect: Dialect) -> Self {
        PathLexer {
            dialect,
            verbatim: Verbatim::default(),
        }
    }

    /// A lexer for the dialect of the compilation target.
    pub fn host() -> Self {
        PathLexer::new(Dialect::host())
    }

    /// Replaces the policy for extended-length paths.
    pub fn with_verbatim(self, verbatim: Verbatim) -> Self {
        PathLexer { verbatim, ..self }
    }

    /// The path syntax in use.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The policy for extended-length paths.
    pub fn verbatim(&self) -> Verbatim {
        self.verbatim
    }

    fn is_sep(&self, c: u8) -> bool {
        self.dialect.is_sep_byte(c)
    }

    /// Returns the byte length of the leading volume name.
    /// It is always 0 for POSIX paths.
    pub fn volume_name_len(&self, path: &str) -> usize {
        (self.dialect.syntax().volume_name_len)(path)
    }

    /// Returns the leading volume name.
    /// Given `C:\foo\bar` it returns `C:` on Windows.
    /// Given `\\host\share\foo` it returns `\\host\share`.
    /// POSIX paths have no volume, so it returns "".
    pub fn volume_name(&self, path: &str) -> String {
        self.from_slash(&path[..self.volume_name_len(path)])
    }

    /// Reports whether `path` carries the extended-length `\\?\` prefix.
    pub fn is_verbatim(&self, path: &str) -> bool {
        (self.dialect.syntax().is_verbatim)(path)
    }

    /// Returns the shortest path name equivalent to path
    /// by purely lexical processing. It applies the following rules
    /// iteratively until no further processing can be done:
    ///
    ///  1. Replace multiple separators with a single one.
    ///  2. Eliminate each . path name element (the current directory).
    ///  3. Eliminate each inner .. path name element (the parent directory)
    ///     along with the non-.. element that precedes it.
    ///  4. Eliminate .. elements that begin a rooted path:
    ///     that is, replace "/.." by "/" at the beginning of a path.
    ///
    /// The returned path ends in a separator only if it represents a root
    /// directory, such as "/" or `C:\`. An empty result becomes ".".
    ///
    /// On Windows the volume name is only modified by replacing "/" with
    /// `\`, so `//host/share/../x` cleans to `\\host\share\x`. Paths with
    /// an extended-length prefix are handled according to [`Verbatim`].
    pub fn clean(&self, path: &str) -> String {
        let syntax = self.dialect.syntax();
        if self.verbatim == Verbatim::Preserve && self.is_verbatim(path) {
            trace!(path, "verbatim path left as is");
            return path.to_owned();
        }

        let vol_len = self.volume_name_len(path);
        let (volume, rest) = path.split_at(vol_len);

        if rest.is_empty() {
            let bytes = path.as_bytes();
            if vol_len > 1 && self.is_sep(bytes[0]) && self.is_sep(bytes[1]) {
                // UNC or device volume on its own.
                return self.from_slash(path);
            }
            return format!("{}.", path);
        }

        let bytes = rest.as_bytes();
        let n = bytes.len();
        let rooted = self.is_sep(bytes[0]);

        // r reads from rest, out holds the elements kept so far.
        // Everything before dotdot is either the root or leading ".."
        // elements that cannot be backtracked over.
        let mut out = String::with_capacity(n);
        let (mut r, mut dotdot) = (0, 0);

        if rooted {
            out.push(syntax.separator);
            r = 1;
            dotdot = 1;
        }

        while r < n {
            if self.is_sep(bytes[r]) {
                // Empty path element
                r += 1;
            } else if bytes[r] == b'.' && (r + 1 == n || self.is_sep(bytes[r + 1])) {
                // . element
                r += 1;
            } else if bytes[r] == b'.'
                && bytes[r + 1] == b'.'
                && (r + 2 == n || self.is_sep(bytes[r + 2]))
            {
                // .. element: remove to last separator
                r += 2;
                if out.len() > dotdot {
                    let mut w = out.len() - 1;
                    while w > dotdot && !self.is_sep(out.as_bytes()[w]) {
                        w -= 1;
                    }
                    out.truncate(w);
                } else if !rooted {
                    // Cannot backtrack, keep the .. element.
                    if !out.is_empty() {
                        out.push(syntax.separator);
                    }
                    out.push_str("..");
                    dotdot = out.len();
                }
            } else {
                // Real path element, add a separator unless at the start.
                if (rooted && out.len() != 1) || (!rooted && !out.is_empty()) {
                    out.push(syntax.separator);
                }

                let start = r;
                while r < n && !self.is_sep(bytes[r]) {
                    r += 1;
                }
                out.push_str(&rest[start..r]);
            }
        }

        if out.is_empty() {
            out.push('.');
        }

        (syntax.post_clean)(vol_len, &mut out);

        let mut cleaned = String::with_capacity(vol_len + out.len());
        cleaned.push_str(volume);
        cleaned.push_str(&out);
        self.from_slash(&cleaned)
    }

    // Byte index just past the final separator at or after `floor`,
    // or `floor` when there is none.
    fn file_start(&self, path: &str, floor: usize) -> usize {
        path.as_bytes()[floor..]
            .iter()
            .rposition(|&c| self.is_sep(c))
            .map_or(floor, |i| floor + i + 1)
    }

    /// Splits path immediately following the final separator,
    /// separating it into a directory and file name component.
    /// If there is no separator in path, split returns an empty dir
    /// and file set to path. The volume name always stays in dir.
    /// The returned values have the property that path = dir+file.
    pub fn split<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        let vol_len = self.volume_name_len(path);
        path.split_at(self.file_start(path, vol_len))
    }

    /// Returns the last element of path.
    /// Trailing path separators are removed before extracting the last
    /// element. If the path is empty, base returns ".". If the path
    /// consists entirely of separators, or of a volume name alone,
    /// base returns a single separator.
    pub fn base(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_owned();
        }

        let trimmed = path.trim_end_matches(|c: char| self.dialect.is_separator(c));
        let rest = &trimmed[self.volume_name_len(trimmed)..];
        let name = &rest[self.file_start(rest, 0)..];

        if name.is_empty() {
            return self.dialect.separator().to_string();
        }

        name.to_owned()
    }

    /// Returns all but the last element of path, typically the path's
    /// directory. After dropping the final element, dir calls
    /// [`PathLexer::clean`] on the rest and trailing separators are removed.
    /// If the path is empty, dir returns ".".
    /// The returned path does not end in a separator unless it is the
    /// root directory.
    ///
    /// Under [`Verbatim::Preserve`] a `\\?\` path is not cleaned: dir only
    /// drops the last element and the separators before it.
    pub fn dir(&self, path: &str) -> String {
        let vol_len = self.volume_name_len(path);
        let end = self.file_start(path, vol_len);

        if self.verbatim == Verbatim::Preserve && self.is_verbatim(path) {
            return self.verbatim_dir(path, vol_len, end);
        }

        // Cleaning with the volume attached keeps post_clean from
        // escaping a drive-like first element behind a drive volume.
        let dir = self.clean(&path[..end]);
        if vol_len > 2 && dir.get(vol_len..) == Some(".") {
            // UNC or device volume
            return self.from_slash(&path[..vol_len]);
        }

        dir
    }

    // Verbatim paths only lose their final element and the separators
    // before it, never anything inside the remaining directory.
    fn verbatim_dir(&self, path: &str, vol_len: usize, end: usize) -> String {
        let keep = (vol_len + 1).min(end);
        let mut dir = &path[..end];
        while dir.len() > keep && self.is_sep(dir.as_bytes()[dir.len() - 1]) {
            dir = &dir[..dir.len() - 1];
        }

        dir.to_owned()
    }

    /// Returns the file name extension used by path.
    /// The extension is the suffix beginning at the final dot
    /// in the final element of path; it is empty if there is
    /// no dot.
    pub fn ext<'a>(&self, path: &'a str) -> &'a str {
        for (i, &c) in path.as_bytes().iter().enumerate().rev() {
            if self.is_sep(c) {
                break;
            }
            if c == b'.' {
                return &path[i..];
            }
        }

        ""
    }

    /// Returns the result of replacing each separator character
    /// in path with a slash ('/') character. Multiple separators are
    /// replaced by multiple slashes.
    pub fn to_slash(&self, path: &str) -> String {
        let sep = self.dialect.separator();
        if sep == '/' {
            return path.to_owned();
        }

        path.replace(sep, "/")
    }

    /// Returns the result of replacing each slash ('/') character
    /// in path with a separator character. Multiple slashes are replaced
    /// by multiple separators.
    pub fn from_slash(&self, path: &str) -> String {
        let sep = self.dialect.separator();
        if sep == '/' {
            return path.to_owned();
        }

        path.replace('/', &sep.to_string())
    }
}

/// [`PathLexer::volume_name`] for the host dialect.
pub fn volume_name(path: &str) -> String {
    PathLexer::host().volume_name(path)
}

/// [`PathLexer::clean`] for the host dialect.
pub fn clean(path: &str) -> String {
    PathLexer::host().clean(path)
}

/// [`PathLexer::split`] for the host dialect.
pub fn split(path: &str) -> (&str, &str) {
    PathLexer::host().split(path)
}

/// [`PathLexer::base`] for the host dialect.
pub fn base(path: &str) -> String {
    PathLexer::host().base(path)
}

/// [`PathLexer::dir`] for the host dialect.
pub fn dir(path: &str) -> String {
    PathLexer::host().dir(path)
}

/// [`PathLexer::ext`] for the host dialect.
pub fn ext(path: &str) -> &str {
    PathLexer::host().ext(path)
}

/// [`PathLexer::to_slash`] for the host dialect.
pub fn to_slash(path: &str) -> String {
    PathLexer::host().to_slash(path)
}

/// [`PathLexer::from_slash`] for the host dialect.
pub fn from_slash(path: &str) -> String {
    PathLexer::host().from_slash(path)
}

#[test]
fn test_clean_posix() {
    let path_strs = [
        // Already clean
        ("abc", "abc"),
        ("abc/def", "abc/def"),
        ("a/b/c", "a/b/c"),
        (".", "."),
        ("..", ".."),
        ("../..", "../.."),
        ("../../abc", "../../abc"),
        ("/abc", "/abc"),
        ("/", "/"),
        // Empty is current dir
        ("", "."),
        // Remove trailing slash
        ("abc/", "abc"),
        ("abc/def/", "abc/def"),
        ("a/b/c/", "a/b/c"),
        ("./", "."),
        ("../", ".."),
        ("../../", "../.."),
        ("/abc/", "/abc"),
        // Remove doubled slash
        ("abc//def//ghi", "abc/def/ghi"),
        ("//abc", "/abc"),
        ("///abc", "/abc"),
        ("//abc//", "/abc"),
        ("abc//", "abc"),
        // Remove . elements
        ("abc/./def", "abc/def"),
        ("/./abc/def", "/abc/def"),
        ("abc/.", "abc"),
        ("/.", "/"),
        // Remove .. elements
        ("path/to/../file", "path/file"),
        ("/path/to/../file", "/path/file"),
        ("abc/def/ghi/../jkl", "abc/def/jkl"),
        ("abc/def/../ghi/../jkl", "abc/jkl"),
        ("abc/def/..", "abc"),
        ("abc/def/../..", "."),
        ("/abc/def/../..", "/"),
        ("abc/def/../../..", ".."),
        ("/abc/def/../../..", "/"),
        ("abc/def/../../../ghi/jkl/../../../mno", "../../mno"),
        ("/../abc", "/abc"),
        ("/..", "/"),
        ("a/b/../../c", "c"),
        // Combinations
        ("abc/./../def", "def"),
        ("abc//./../def", "def"),
        ("abc/../../././../def", "../../def"),
        // Windows syntax means nothing here
        ("C:foo/..", "."),
        ("path\\to/file", "path\\to/file"),
        ("\\\\?\\C:\\foo\\..", "\\\\?\\C:\\foo\\.."),
        // Non ascii elements
        ("héllo/wörld/../ü", "héllo/ü"),
        ("ふー//バー/.", "ふー/バー"),
    ];

    for (path_str, expected_output) in path_strs.iter() {
        assert_eq!(PathLexer::POSIX.clean(path_str), *expected_output, "{:?}", path_str);
    }
}

#[test]
fn test_clean_windows() {
    let path_strs = [
        ("c:", "c:."),
        ("c:\\", "c:\\"),
        ("c:\\abc", "c:\\abc"),
        ("c:abc\\..\\..\\.\\.\\..\\def", "c:..\\..\\def"),
        ("c:\\abc\\def\\..\\..", "c:\\"),
        ("c:\\..\\abc", "c:\\abc"),
        ("c:..\\abc", "c:..\\abc"),
        ("c:\\b:\\..\\..\\..\\d", "c:\\d"),
        ("C:foo/..", "C:."),
        ("C:\\foo\\..", "C:\\"),
        ("C:\\path\\to\\..\\file", "C:\\path\\file"),
        ("C:/path/to/../file", "C:\\path\\file"),
        ("\\", "\\"),
        ("/", "\\"),
        ("/..", "\\"),
        ("path\\to/file", "path\\to\\file"),
        ("path/to/../file", "path\\file"),
        ("abc//def\\\\ghi\\", "abc\\def\\ghi"),
        // UNC
        ("\\\\server\\share\\path\\..\\file", "\\\\server\\share\\file"),
        ("\\\\host\\share\\foo\\..\\..\\..\\..\\bar", "\\\\host\\share\\bar"),
        ("//host/share/foo/../baz", "\\\\host\\share\\baz"),
        ("\\\\i\\..\\c$", "\\\\i\\..\\c$"),
        ("\\\\a\\b\\..\\c", "\\\\a\\b\\c"),
        ("\\\\a\\b", "\\\\a\\b"),
        ("//abc", "\\\\abc"),
        ("\\\\server\\", "\\\\server\\"),
        ("\\\\server\\\\share", "\\\\server\\share"),
        ("///abc", "\\abc"),
        // Device paths are cleaned after their volume
        ("\\\\.\\C:\\a\\..\\..\\..\\..\\bar", "\\\\.\\C:\\bar"),
        ("\\\\.\\C:\\\\\\\\a", "\\\\.\\C:\\a"),
        ("\\\\.\\C:", "\\\\.\\C:"),
        ("\\\\.\\UNC\\host\\share\\a\\..", "\\\\.\\UNC\\host\\share\\"),
        ("//?/C:/foo/..", "\\\\?\\C:\\"),
        // Extended-length paths are verbatim
        ("\\\\?\\C:\\foo\\..", "\\\\?\\C:\\foo\\.."),
        ("\\\\?\\C:\\", "\\\\?\\C:\\"),
        ("\\\\?\\C:/a//b", "\\\\?\\C:/a//b"),
        // Relative paths never gain a drive
        (".\\c:", ".\\c:"),
        (".\\c:\\foo", ".\\c:\\foo"),
        (".\\c:foo", ".\\c:foo"),
        ("a/../c:", ".\\c:"),
        ("a\\..\\c:", ".\\c:"),
        ("a/../c:/a", ".\\c:\\a"),
        ("a/../../c:", "..\\c:"),
        ("foo:bar", "foo:bar"),
        ("", "."),
        ("..", ".."),
    ];

    for (path_str, expected_output) in path_strs.iter() {
        assert_eq!(PathLexer::WINDOWS.clean(path_str), *expected_output, "{:?}", path_str);
    }
}

#[test]
fn test_clean_verbatim_normalize() {
    let lexer = PathLexer::WINDOWS.with_verbatim(Verbatim::Normalize);
    let path_strs = [
        ("\\\\?\\C:\\foo\\..", "\\\\?\\C:\\"),
        ("\\\\?\\C:\\", "\\\\?\\C:\\"),
        ("\\\\?\\C:\\a//b\\.", "\\\\?\\C:\\a\\b"),
        ("\\\\?\\UNC\\host\\share\\x\\..", "\\\\?\\UNC\\host\\share\\"),
        ("\\\\?\\REL\\..\\..", "\\\\?\\.."),
        ("C:\\foo\\..", "C:\\"),
    ];

    for (path_str, expected_output) in path_strs.iter() {
        assert_eq!(lexer.clean(path_str), *expected_output, "{:?}", path_str);
    }
}

#[test]
fn test_clean_is_idempotent() {
    let paths = [
        "",
        "a/../c:",
        "c:abc\\..\\..\\def",
        "\\\\server\\\\share",
        "\\\\.\\a\\..",
        "//host/share/../x",
        "/../a/./b//",
    ];

    for lexer in [PathLexer::POSIX, PathLexer::WINDOWS].iter() {
        for path in paths.iter() {
            let once = lexer.clean(path);
            assert_eq!(lexer.clean(&once), once, "{:?}", path);
        }
    }
}

#[test]
fn test_split() {
    let posix = [
        ("a/b", "a/", "b"),
        ("a/b/", "a/b/", ""),
        ("a/", "a/", ""),
        ("a", "", "a"),
        ("/", "/", ""),
        ("", "", ""),
        ("path/to/file.txt", "path/to/", "file.txt"),
        ("/file.txt", "/", "file.txt"),
        ("C:", "", "C:"),
        ("a\\b", "", "a\\b"),
    ];

    for (path, dir, file) in posix.iter() {
        assert_eq!(PathLexer::POSIX.split(path), (*dir, *file), "{:?}", path);
    }

    let windows = [
        ("c:", "c:", ""),
        ("C:", "C:", ""),
        ("c:/", "c:/", ""),
        ("c:/foo", "c:/", "foo"),
        ("c:/foo/bar", "c:/foo/", "bar"),
        ("C:\\path\\file.txt", "C:\\path\\", "file.txt"),
        ("//host/share", "//host/share", ""),
        ("//host/share/", "//host/share/", ""),
        ("//host/share/foo", "//host/share/", "foo"),
        ("\\\\server\\share", "\\\\server\\share", ""),
        ("\\\\host\\share\\foo", "\\\\host\\share\\", "foo"),
        ("\\\\?\\C:\\file", "\\\\?\\C:\\", "file"),
        ("\\\\?\\REL", "\\\\?\\", "REL"),
        ("a\\b/c", "a\\b/", "c"),
        ("", "", ""),
    ];

    for (path, dir, file) in windows.iter() {
        assert_eq!(PathLexer::WINDOWS.split(path), (*dir, *file), "{:?}", path);
    }
}

#[test]
fn test_base() {
    let posix = [
        ("", "."),
        (".", "."),
        ("/.", "."),
        ("/", "/"),
        ("////", "/"),
        ("x/", "x"),
        ("abc", "abc"),
        ("abc/def", "def"),
        ("a/b/.x", ".x"),
        ("a/b/c.", "c."),
        ("a/b/c.x", "c.x"),
        ("path/to//", "to"),
        ("/path/to/file.txt", "file.txt"),
        ("C:", "C:"),
    ];

    for (path, expected) in posix.iter() {
        assert_eq!(PathLexer::POSIX.base(path), *expected, "{:?}", path);
    }

    let windows = [
        ("C:", "\\"),
        ("c:\\", "\\"),
        ("c:.", "."),
        ("c:\\a\\b", "b"),
        ("c:a\\b", "b"),
        ("c:a\\b\\c", "c"),
        ("C:\\path\\to\\file.txt", "file.txt"),
        ("\\\\host\\share\\", "\\"),
        ("\\\\host\\share\\a", "a"),
        ("\\\\host\\share\\a\\b", "b"),
        ("//host/share", "\\"),
        ("path/to//", "to"),
        ("\\\\\\", "\\"),
        ("", "."),
    ];

    for (path, expected) in windows.iter() {
        assert_eq!(PathLexer::WINDOWS.base(path), *expected, "{:?}", path);
    }
}

#[test]
fn test_dir() {
    let posix = [
        ("", "."),
        (".", "."),
        ("/.", "/"),
        ("/", "/"),
        ("////", "/"),
        ("/foo", "/"),
        ("x/", "x"),
        ("abc", "."),
        ("abc/def", "abc"),
        ("a/b/.x", "a/b"),
        ("a/b/c.", "a/b"),
        ("a/b/c.x", "a/b"),
        ("file.txt", "."),
        ("path/to/file.txt", "path/to"),
        ("/path/to/file.txt", "/path/to"),
        ("path/", "path"),
        ("a//b/../c/d", "a/c"),
        ("C:", "."),
    ];

    for (path, expected) in posix.iter() {
        assert_eq!(PathLexer::POSIX.dir(path), *expected, "{:?}", path);
    }

    let windows = [
        ("C:", "C:."),
        ("c:\\", "c:\\"),
        ("c:.", "c:."),
        ("c:\\a\\b", "c:\\a"),
        ("c:a\\b", "c:a"),
        ("c:a\\b\\c", "c:a\\b"),
        ("C:\\path\\to\\file.txt", "C:\\path\\to"),
        ("\\\\host\\share", "\\\\host\\share"),
        ("\\\\host\\share\\", "\\\\host\\share\\"),
        ("\\\\host\\share\\a", "\\\\host\\share\\"),
        ("\\\\server\\share\\file", "\\\\server\\share\\"),
        ("\\\\host\\share\\a\\b", "\\\\host\\share\\a"),
        ("//host/share/a/b", "\\\\host\\share\\a"),
        ("\\\\.\\C:\\a", "\\\\.\\C:\\"),
        ("\\\\.\\COM1", "\\\\.\\"),
        ("\\\\.\\a\\..\\b", "\\\\.\\"),
        ("C:a\\..\\d:\\x", "C:d:"),
        ("path/", "path"),
        ("", "."),
    ];

    for (path, expected) in windows.iter() {
        assert_eq!(PathLexer::WINDOWS.dir(path), *expected, "{:?}", path);
    }
}

#[test]
fn test_dir_verbatim() {
    let preserve = [
        ("\\\\?\\C:\\file", "\\\\?\\C:\\"),
        ("\\\\?\\C:\\a\\..\\b", "\\\\?\\C:\\a\\.."),
        ("\\\\?\\C:\\a\\\\b", "\\\\?\\C:\\a"),
        ("\\\\?\\REL", "\\\\?\\"),
    ];

    for (path, expected) in preserve.iter() {
        assert_eq!(PathLexer::WINDOWS.dir(path), *expected, "{:?}", path);
    }

    let lexer = PathLexer::WINDOWS.with_verbatim(Verbatim::Normalize);
    assert_eq!(lexer.dir("\\\\?\\C:\\a\\..\\b"), "\\\\?\\C:\\");
    assert_eq!(lexer.dir("\\\\?\\C:\\file"), "\\\\?\\C:\\");
}

#[test]
fn test_ext() {
    let posix = [
        ("path.go", ".go"),
        ("path.pb.go", ".go"),
        ("file.tar.gz", ".gz"),
        ("file.txt", ".txt"),
        ("file", ""),
        ("a.dir/b", ""),
        ("a.dir/b.go", ".go"),
        ("a.dir/", ""),
        (".gitignore", ".gitignore"),
        ("file..txt", ".txt"),
        ("path/.", "."),
        ("path/to/file.txt", ".txt"),
        ("path/to/file", ""),
        ("a.dir\\b", ".dir\\b"),
        ("", ""),
    ];

    for (path, expected) in posix.iter() {
        assert_eq!(PathLexer::POSIX.ext(path), *expected, "{:?}", path);
    }

    let windows = [
        ("a.dir\\b", ""),
        ("a.dir/b", ""),
        ("C:\\path\\to\\file.txt", ".txt"),
        ("c:.x", ".x"),
    ];

    for (path, expected) in windows.iter() {
        assert_eq!(PathLexer::WINDOWS.ext(path), *expected, "{:?}", path);
    }
}

#[test]
fn test_volume_name() {
    let posix = ["C:\\path\\to\\file", "\\\\server\\share\\file", "path/to/file", ""];

    for path in posix.iter() {
        assert_eq!(PathLexer::POSIX.volume_name(path), "");
    }

    let windows = [
        ("C:\\path\\to\\file", "C:"),
        ("\\\\server\\share\\file", "\\\\server\\share"),
        ("//server/share/file", "\\\\server\\share"),
        ("\\\\?\\C:\\file", "\\\\?\\C:"),
        ("\\\\server", "\\\\server"),
        ("C", ""),
        ("path/to/file", ""),
    ];

    for (path, expected) in windows.iter() {
        assert_eq!(PathLexer::WINDOWS.volume_name(path), *expected, "{:?}", path);
    }
}

#[test]
fn test_from_slash() {
    let str_path = "/test_dir/file.index.html";

    assert_eq!(PathLexer::POSIX.from_slash(str_path), str_path);
    assert_eq!(
        PathLexer::WINDOWS.from_slash(str_path),
        "\\test_dir\\file.index.html"
    );
    assert_eq!(PathLexer::WINDOWS.from_slash("path/to/file"), "path\\to\\file");
    assert_eq!(PathLexer::WINDOWS.from_slash(""), "");
}

#[test]
fn test_to_slash() {
    assert_eq!(PathLexer::POSIX.to_slash("path\\to/file"), "path\\to/file");
    assert_eq!(PathLexer::WINDOWS.to_slash("path\\to\\file"), "path/to/file");
    assert_eq!(PathLexer::WINDOWS.to_slash("path/to/file"), "path/to/file");
    assert_eq!(PathLexer::WINDOWS.to_slash("\\"), "/");
    assert_eq!(PathLexer::WINDOWS.to_slash(""), "");
}

#[test]
fn test_host_functions_follow_host_dialect() {
    let lexer = PathLexer::host();

    assert_eq!(clean("a/./b/../c"), lexer.clean("a/./b/../c"));
    assert_eq!(dir("a/b"), lexer.dir("a/b"));
    assert_eq!(base("a/b"), "b");
    assert_eq!(ext("a/b.rs"), ".rs");
    assert_eq!(split("a/b"), ("a/", "b"));
    assert_eq!(volume_name("C:/x"), lexer.volume_name("C:/x"));
    assert_eq!(from_slash(&to_slash("a/b")), from_slash("a/b"));
}

#[test]
fn test_dialect_from_str() {
    assert_eq!("posix".parse::<Dialect>(), Ok(Dialect::Posix));
    assert_eq!("Unix".parse::<Dialect>(), Ok(Dialect::Posix));
    assert_eq!("WINDOWS".parse::<Dialect>(), Ok(Dialect::Windows));
    assert_eq!("win".parse::<Dialect>(), Ok(Dialect::Windows));
    assert_eq!(
        "plan9".parse::<Dialect>(),
        Err(Error::UnknownDialect("plan9".to_owned()))
    );
    assert_eq!(Dialect::Windows.to_string(), "windows");
    assert_eq!("normalize".parse::<Verbatim>(), Ok(Verbatim::Normalize));
    assert!("keep".parse::<Verbatim>().is_err());
}

#[test]
fn test_separators() {
    assert_eq!(Dialect::Posix.separator(), '/');
    assert_eq!(Dialect::Windows.separator(), '\\');
    assert!(Dialect::Windows.is_separator('/'));
    assert!(Dialect::Windows.is_separator('\\'));
    assert!(!Dialect::Posix.is_separator('\\'));
    assert!(!Dialect::Windows.is_separator('ふ'));
}

#[test]
fn test_clean_root_never_escapes() {
    let paths = [
        (PathLexer::POSIX, "/..", "/"),
        (PathLexer::POSIX, "/../../a/..", "/"),
        (PathLexer::WINDOWS, "/..", "\\"),
        (PathLexer::WINDOWS, "\\..\\..", "\\"),
        (PathLexer::WINDOWS, "C:\\..", "C:\\"),
        (PathLexer::WINDOWS, "\\\\srv\\shr\\..\\..", "\\\\srv\\shr\\"),
    ];

    for (lexer, path, expected) in paths.iter() {
        assert_eq!(lexer.clean(path), *expected, "{:?}", path);
    }
}
