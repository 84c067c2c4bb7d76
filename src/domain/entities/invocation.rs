//! Invocation entity - one external command about to run

use crate::domain::value_objects::ArgFragment;
use std::fmt;

/// Program name plus ordered argument tokens
///
/// Built by an executor, then handed by value to a `CommandRunner`.
/// There are no mutating accessors once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn builder(program: impl Into<String>) -> InvocationBuilder {
        InvocationBuilder {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }

    /// Single-line, shell-pasteable rendering
    pub fn render(&self) -> String {
        self.tokens().map(shell_quote).collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub struct InvocationBuilder {
    program: String,
    args: Vec<String>,
}

impl InvocationBuilder {
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn fragments(mut self, fragments: &[ArgFragment]) -> Self {
        for fragment in fragments {
            self.args.extend(fragment.tokens());
        }
        self
    }

    pub fn build(self) -> Invocation {
        Invocation {
            program: self.program,
            args: self.args,
        }
    }
}

fn shell_quote(token: &str) -> String {
    if token.chars().any(char::is_control) {
        return ansi_c_quote(token);
    }

    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@=,+%".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', "'\\''"))
    }
}

/// `$'...'` quoting, so control characters never break the line
fn ansi_c_quote(token: &str) -> String {
    let mut out = String::from("$'");
    for c in token.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
