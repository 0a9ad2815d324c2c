//! Line grammar of the BMFont text format.
//!
//! Each record is one line: a command name followed by `key=value` tokens
//! separated by runs of spaces. Values may be wrapped in double quotes; the
//! quotes are stripped verbatim, there is no escape processing.

/// Splits one line into its command name and ordered `(key, value)` pairs.
///
/// Tokens split on the first `=` only; tokens without a `=` are dropped.
/// Never fails — malformed tokens simply produce no pair, and downstream
/// decoders ignore keys they do not recognize.
pub fn parse_line(line: &str) -> (&str, Vec<(&str, &str)>) {
    let mut tokens = line.split(' ').filter(|t| !t.is_empty());
    let cmd = tokens.next().unwrap_or("");
    let mut pairs = Vec::new();
    for token in tokens {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        pairs.push((key, unquote(value)));
    }
    (cmd, pairs)
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Builds one record line: `cmd key=value ...` terminated by a single `\n`.
///
/// The call order of the `int`/`str`/`list` methods is the emission order.
/// There is deliberately no boolean method — the format drops flag fields on
/// save, so flags never reach the encoder.
pub struct LineEncoder {
    buf: String,
}

impl LineEncoder {
    pub fn new(cmd: &str) -> Self {
        Self {
            buf: cmd.to_string(),
        }
    }

    pub fn int(mut self, key: &str, value: impl std::fmt::Display) -> Self {
        let text = value.to_string();
        self.push(key, &text);
        self
    }

    /// Double-quoted, verbatim. Embedded quotes are the caller's problem.
    pub fn str(mut self, key: &str, value: &str) -> Self {
        self.buf.push(' ');
        self.buf.push_str(key);
        self.buf.push_str("=\"");
        self.buf.push_str(value);
        self.buf.push('"');
        self
    }

    pub fn list(mut self, key: &str, values: &[u32]) -> Self {
        let joined = values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.push(key, &joined);
        self
    }

    fn push(&mut self, key: &str, value: &str) {
        self.buf.push(' ');
        self.buf.push_str(key);
        self.buf.push('=');
        self.buf.push_str(value);
    }

    pub fn finish(mut self) -> String {
        self.buf.push('\n');
        self.buf
    }
}
