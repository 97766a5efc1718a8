//! `tsconfig.json` is JSON with comments and trailing commas.

use std::iter::Peekable;
use std::str::Chars;

/// Strip `//` and `/* */` comments and drop commas directly before `}` or
/// `]`, leaving plain JSON. String contents are copied untouched. Newlines
/// inside comments are kept so parse errors report the original line.
pub(crate) fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    // Byte offset in `out` of a comma that is trailing if a closer comes next.
    let mut pending_comma: Option<usize> = None;

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                pending_comma = None;
                out.push(ch);
                copy_string(&mut chars, &mut out);
            }
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                skip_block_comment(&mut chars, &mut out);
            }
            ',' => {
                pending_comma = Some(out.len());
                out.push(ch);
            }
            '}' | ']' => {
                if let Some(at) = pending_comma.take() {
                    out.remove(at);
                }
                out.push(ch);
            }
            _ if ch.is_whitespace() => out.push(ch),
            _ => {
                pending_comma = None;
                out.push(ch);
            }
        }
    }

    out
}

fn copy_string(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    let mut escaped = false;
    for ch in chars.by_ref() {
        out.push(ch);
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            return;
        }
    }
}

fn skip_block_comment(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    while let Some(ch) = chars.next() {
        match ch {
            '*' if chars.peek() == Some(&'/') => {
                chars.next();
                return;
            }
            '\n' => out.push('\n'),
            _ => {}
        }
    }
}
