pub mod state;

pub use state::{Mode, ScanState};

use crate::grammar::Grammar;
use state::{ScanAction, transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub output: Vec<u8>,
    pub comments_found: bool,
}

/// Removes every comment `grammar` recognises from `input` in a single pass.
///
/// Works on raw bytes, so any content is accepted. String and char literals
/// are tracked only far enough to keep comment markers inside them intact.
/// A line comment keeps its terminating newline. A block comment that is
/// never closed runs to the end of the input.
pub fn strip(input: &[u8], grammar: &Grammar) -> Stripped {
    let mut state = ScanState::default();
    let mut output = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let (next, action) = transition(state, &input[pos..], grammar);
        match action {
            ScanAction::Keep => {
                output.push(input[pos]);
                pos += 1;
            }
            ScanAction::Drop(len) => pos += len,
        }
        state = next;
    }

    if state.mode == Mode::BlockComment {
        tracing::debug!(
            language = grammar.name,
            "unterminated block comment, dropped to end of input"
        );
    }
    tracing::debug!(
        language = grammar.name,
        input_len = input.len(),
        output_len = output.len(),
        comments_found = state.comment_seen,
        "scan complete"
    );

    Stripped {
        output,
        comments_found: state.comment_seen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::find_by_name;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn run(lang: &str, input: &[u8]) -> (String, bool) {
        let grammar = find_by_name(lang).unwrap();
        let stripped = strip(input, grammar);
        (
            String::from_utf8_lossy(&stripped.output).into_owned(),
            stripped.comments_found,
        )
    }

    #[test]
    fn url_inside_string_is_not_a_comment() {
        let input = r#"x = "http://example.com";"#;
        assert_eq!(run("c-family", input.as_bytes()), (input.to_string(), false));
    }

    #[test]
    fn strips_single_line_comment_keeping_newline() {
        assert_eq!(
            run("c-family", b"int x = 1; // set x\n"),
            ("int x = 1; \n".to_string(), true)
        );
    }

    #[test]
    fn strips_block_comment_across_lines() {
        assert_eq!(
            run("c-family", b"a /* multi\nline */ b"),
            ("a  b".to_string(), true)
        );
    }

    #[test]
    fn escaped_quote_keeps_char_literal_open() {
        let input = r"c = '\'//' + 1;";
        assert_eq!(run("c-family", input.as_bytes()), (input.to_string(), false));
    }

    #[test]
    fn escaped_quote_keeps_string_literal_open() {
        let input = r#"s = "say \"hi\" // not a comment";"#;
        assert_eq!(run("c-family", input.as_bytes()), (input.to_string(), false));
    }

    #[test]
    fn escaped_backslash_does_not_escape_closing_quote() {
        assert_eq!(
            run("c-family", br"c = '\\'; // done"),
            (r"c = '\\'; ".to_string(), true)
        );
    }

    #[test]
    fn unterminated_block_comment_drops_rest_of_input() {
        assert_eq!(
            run("c-family", b"code /* never closed"),
            ("code ".to_string(), true)
        );
    }

    #[test]
    fn line_comment_at_end_of_file_without_newline() {
        assert_eq!(
            run("c-family", b"x = 1; // tail"),
            ("x = 1; ".to_string(), true)
        );
    }

    #[test]
    fn input_without_comments_is_untouched() {
        let input = "int main(void) {\n    return 0;\n}\n";
        assert_eq!(run("c-family", input.as_bytes()), (input.to_string(), false));
    }

    #[test]
    fn empty_input() {
        assert_eq!(run("c-family", b""), (String::new(), false));
    }

    #[test]
    fn quotes_inside_block_comment_do_not_open_literals() {
        assert_eq!(
            run("c-family", b"/* it's */ x // y\n"),
            (" x \n".to_string(), true)
        );
    }

    #[test]
    fn mismatched_quote_kinds_stay_inside_literal() {
        let input = r#"s = "it's // here";"#;
        assert_eq!(run("c-family", input.as_bytes()), (input.to_string(), false));
        assert_eq!(
            run("c-family", br#"c = '"'; // quote"#),
            (r#"c = '"'; "#.to_string(), true)
        );
    }

    #[test]
    fn backslash_in_code_does_not_escape() {
        let input = r#"\"// inside"#;
        assert_eq!(run("c-family", input.as_bytes()), (input.to_string(), false));
    }

    #[test]
    fn adjacent_block_comments() {
        assert_eq!(run("c-family", b"/*a*//*b*/x"), ("x".to_string(), true));
    }

    #[test]
    fn block_markers_inside_string_are_kept() {
        let input = r#"p = "/* keep */";"#;
        assert_eq!(run("c-family", input.as_bytes()), (input.to_string(), false));
    }

    #[test]
    fn lua_block_start_checked_before_line_marker() {
        assert_eq!(
            run("lua", b"x = 1 --[[ block\n]] y -- tail\n"),
            ("x = 1  y \n".to_string(), true)
        );
    }

    #[test]
    fn markup_comment_removed() {
        assert_eq!(
            run("markup", b"<p>a</p><!-- note -->\n<br/>"),
            ("<p>a</p>\n<br/>".to_string(), true)
        );
    }

    #[test]
    fn markup_has_no_single_line_form() {
        let input = "<a href=x>//not</a>";
        assert_eq!(run("markup", input.as_bytes()), (input.to_string(), false));
    }

    #[test]
    fn ruby_begin_end_block() {
        assert_eq!(
            run("ruby", b"x = 1\n=begin\ndoc\n=end\ny = 2 # two\n"),
            ("x = 1\n\ny = 2 \n".to_string(), true)
        );
    }

    #[test]
    fn perl_pod_block() {
        assert_eq!(
            run("perl", b"=pod\nusage\n=cut\nprint 1;\n"),
            ("\nprint 1;\n".to_string(), true)
        );
    }

    #[test]
    fn hash_comments_and_hash_in_strings() {
        assert_eq!(
            run("python", b"color = '#fff'  # white\nprint(color)\n"),
            ("color = '#fff'  \nprint(color)\n".to_string(), true)
        );
    }

    #[test]
    fn invalid_utf8_passes_through() {
        let grammar = find_by_name("c-family").unwrap();
        let stripped = strip(b"\xff\xfe // \xc3\n\x80", grammar);
        assert_eq!(stripped.output, b"\xff\xfe \n\x80".to_vec());
        assert!(stripped.comments_found);
    }

    #[test]
    fn added_extensions_keep_their_literals() {
        let cases: &[(&str, &str, &str)] = &[
            (
                "util.cc",
                "auto s = \"a//b\"; // note\n",
                "auto s = \"a//b\"; \n",
            ),
            (
                "util.cxx",
                "char c = '/'; /* c */\n",
                "char c = '/'; \n",
            ),
            (
                "Main.kt",
                "val u = \"http://x\" // url\n",
                "val u = \"http://x\" \n",
            ),
            (
                "build.kts",
                "val c = '\\'' // quote\n",
                "val c = '\\'' \n",
            ),
            (
                "View.swift",
                "let s = \"/* not */\" /* yes */\n",
                "let s = \"/* not */\" \n",
            ),
            ("tasks.rake", "puts \"#{x}\" # say\n", "puts \"#{x}\" \n"),
            ("Util.pm", "my $s = '# keep'; # drop\n", "my $s = '# keep'; \n"),
            (
                "config.fish",
                "echo 'a # b' # tail\n",
                "echo 'a # b' \n",
            ),
            (
                "init.lua",
                "local s = \"--[[ keep ]]\" -- drop\n",
                "local s = \"--[[ keep ]]\" \n",
            ),
        ];
        for (file, input, expected) in cases {
            let grammar = crate::detector::detect(file).unwrap();
            let stripped = strip(input.as_bytes(), grammar);
            assert_eq!(
                String::from_utf8_lossy(&stripped.output),
                *expected,
                "stripping {file}"
            );
            assert!(stripped.comments_found, "{file} should report a comment");
        }
    }

    fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
        let mut rest = haystack.iter();
        needle.iter().all(|b| rest.any(|h| h == b))
    }

    const SOURCE_ALPHABET: &str = r#"[a-z #/*'"\\\n]{0,64}"#;

    proptest! {
        #[test]
        fn stripping_is_idempotent(src in SOURCE_ALPHABET) {
            for lang in ["c-family", "python"] {
                let grammar = find_by_name(lang).unwrap();
                let once = strip(src.as_bytes(), grammar);
                let twice = strip(&once.output, grammar);
                prop_assert!(!twice.comments_found);
                prop_assert_eq!(&twice.output, &once.output);
            }
        }

        #[test]
        fn output_is_subsequence_of_input(src in SOURCE_ALPHABET) {
            for grammar in crate::grammar::LANGUAGES {
                let stripped = strip(src.as_bytes(), grammar);
                prop_assert!(stripped.output.len() <= src.len());
                prop_assert!(is_subsequence(&stripped.output, src.as_bytes()));
            }
        }

        #[test]
        fn no_comment_means_identity(src in SOURCE_ALPHABET) {
            for grammar in crate::grammar::LANGUAGES {
                let stripped = strip(src.as_bytes(), grammar);
                if !stripped.comments_found {
                    prop_assert_eq!(&stripped.output, &src.as_bytes().to_vec());
                }
            }
        }
    }
}
