use std::io::{self, BufRead, Stdout, StdinLock, Write};

use chatdesk_core::messages::{BOT_PREFIX, USER_PROMPT};

/// Line-oriented terminal surface the conversation talks through.
pub trait Console {
    /// Writes one bot message, prefixed with `Bot: `.
    fn say(&mut self, message: &str) -> io::Result<()>;

    /// Prompts with `You: ` and reads one line without its line ending.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LineConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Console for LineConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{BOT_PREFIX}{message}")?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.writer, "{USER_PROMPT}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{Console, LineConsole};

    #[test]
    fn bot_messages_are_prefixed() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.say("Hello!").expect("write to buffer");

        let output = String::from_utf8(console.into_writer()).expect("utf-8 output");
        assert_eq!(output, "Bot: Hello!\n");
    }

    #[test]
    fn reads_prompt_with_user_marker_and_strips_line_endings() {
        let mut console = LineConsole::new(Cursor::new("Ann\r\nsecond\n"), Vec::new());

        assert_eq!(console.read_line().expect("read"), Some("Ann".to_string()));
        assert_eq!(console.read_line().expect("read"), Some("second".to_string()));

        let output = String::from_utf8(console.into_writer()).expect("utf-8 output");
        assert_eq!(output, "You: You: ");
    }

    #[test]
    fn exhausted_input_reads_as_none() {
        let mut console = LineConsole::new(Cursor::new("last"), Vec::new());

        assert_eq!(console.read_line().expect("read"), Some("last".to_string()));
        assert_eq!(console.read_line().expect("read"), None);
    }

    #[test]
    fn blank_line_is_distinct_from_end_of_input() {
        let mut console = LineConsole::new(Cursor::new("\n"), Vec::new());

        assert_eq!(console.read_line().expect("read"), Some(String::new()));
        assert_eq!(console.read_line().expect("read"), None);
    }
}
