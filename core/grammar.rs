/// Comment syntax for one family of languages.
///
/// An empty marker disables that comment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    pub name: &'static str,
    pub single_line: &'static str,
    pub block_start: &'static str,
    pub block_end: &'static str,
    pub extensions: &'static [&'static str],
}

impl Grammar {
    pub fn has_single_line(&self) -> bool {
        !self.single_line.is_empty()
    }

    pub fn has_block(&self) -> bool {
        !self.block_start.is_empty()
    }

    /// Length of the block start marker if `rest` begins with it.
    pub(crate) fn block_start_at(&self, rest: &[u8]) -> Option<usize> {
        marker_at(self.block_start, rest)
    }

    pub(crate) fn block_end_at(&self, rest: &[u8]) -> Option<usize> {
        marker_at(self.block_end, rest)
    }

    pub(crate) fn single_line_at(&self, rest: &[u8]) -> Option<usize> {
        marker_at(self.single_line, rest)
    }
}

fn marker_at(marker: &str, rest: &[u8]) -> Option<usize> {
    let marker = marker.as_bytes();
    if !marker.is_empty() && rest.starts_with(marker) {
        Some(marker.len())
    } else {
        None
    }
}

const C_FAMILY_EXTENSIONS: &[&str] = &[
    ".c", ".h", ".cpp", ".hpp", ".cc", ".cxx", ".cs", ".java", ".js", ".kt", ".kts", ".swift",
];
const PYTHON_EXTENSIONS: &[&str] = &[".py"];
const SHELL_EXTENSIONS: &[&str] = &[".sh", ".bash", ".fish"];
const RUBY_EXTENSIONS: &[&str] = &[".rb", ".rake"];
const PERL_EXTENSIONS: &[&str] = &[".pl", ".pm"];
const MARKUP_EXTENSIONS: &[&str] = &[".html", ".htm", ".xml", ".xhtml"];
const CSS_EXTENSIONS: &[&str] = &[".css"];
const PHP_EXTENSIONS: &[&str] = &[".php"];
const LUA_EXTENSIONS: &[&str] = &[".lua"];

/// Lookup order matters: the first grammar listing an extension wins.
pub const LANGUAGES: &[Grammar] = &[
    Grammar {
        name: "c-family",
        single_line: "//",
        block_start: "/*",
        block_end: "*/",
        extensions: C_FAMILY_EXTENSIONS,
    },
    Grammar {
        name: "python",
        single_line: "#",
        block_start: "",
        block_end: "",
        extensions: PYTHON_EXTENSIONS,
    },
    Grammar {
        name: "shell",
        single_line: "#",
        block_start: "",
        block_end: "",
        extensions: SHELL_EXTENSIONS,
    },
    Grammar {
        name: "ruby",
        single_line: "#",
        block_start: "=begin",
        block_end: "=end",
        extensions: RUBY_EXTENSIONS,
    },
    Grammar {
        name: "perl",
        single_line: "#",
        block_start: "=pod",
        block_end: "=cut",
        extensions: PERL_EXTENSIONS,
    },
    Grammar {
        name: "markup",
        single_line: "",
        block_start: "<!--",
        block_end: "-->",
        extensions: MARKUP_EXTENSIONS,
    },
    Grammar {
        name: "css",
        single_line: "",
        block_start: "/*",
        block_end: "*/",
        extensions: CSS_EXTENSIONS,
    },
    Grammar {
        name: "php",
        single_line: "//",
        block_start: "/*",
        block_end: "*/",
        extensions: PHP_EXTENSIONS,
    },
    Grammar {
        name: "lua",
        single_line: "--",
        block_start: "--[[",
        block_end: "]]",
        extensions: LUA_EXTENSIONS,
    },
];

#[cfg(test)]
pub(crate) fn find_by_name(name: &str) -> Option<&'static Grammar> {
    LANGUAGES.iter().find(|g| g.name == name)
}
