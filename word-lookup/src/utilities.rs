use std::io::{self, BufRead, Write};



/// Prints `prompt` and reads one line, without its line terminator.
/// Returns `None` once input is exhausted.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_term(&mut io::stdin().lock())
}

fn read_term(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

pub fn is_quit_command(line: &str) -> bool {
    matches!(line.trim(), ":q" | ":quit" | ":exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_surrounding_spaces() {
        let mut reader = io::Cursor::new(" hello \r\nworld\n");
        assert_eq!(read_term(&mut reader).unwrap().as_deref(), Some(" hello "));
        assert_eq!(read_term(&mut reader).unwrap().as_deref(), Some("world"));
        assert_eq!(read_term(&mut reader).unwrap(), None);
    }

    #[test]
    fn quit_commands() {
        assert!(is_quit_command(":q"));
        assert!(is_quit_command(" :quit "));
        assert!(!is_quit_command("quit"));
        assert!(!is_quit_command("hello"));
    }
}
