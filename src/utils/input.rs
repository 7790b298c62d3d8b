use std::io::{self, BufRead, Write};

/// Prints `prompt` and reads one trimmed line. `Ok(None)` means stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let stdin = io::stdin();
    read_line_from(&mut stdin.lock(), &mut io::stdout(), prompt)
}

pub fn read_line_from<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
