//! ExecCommand value object - a parsed desktop entry command template
//!
//! Turning `Exec=` into a process is the launcher's job; this only produces
//! the environment and argument vector it needs.

use crate::domain::errors::EntryError;

/// Field code letters removed from arguments (we never substitute files or URLs)
const FIELD_CODES: [char; 13] = ['f', 'F', 'u', 'U', 'i', 'c', 'k', 'd', 'D', 'n', 'N', 'v', 'm'];

/// Environment assignments and arguments of an exec template
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecCommand {
    /// Leading `KEY=VALUE` assignments, in order
    pub env: Vec<(String, String)>,
    /// Program followed by its arguments
    pub argv: Vec<String>,
}

impl ExecCommand {
    /// Parse an exec template
    pub fn parse(exec: &str) -> Result<Self, EntryError> {
        let mut words = split_words(exec)
            .into_iter()
            .map(|word| strip_field_codes(&word))
            .filter(|word| !word.is_empty())
            .peekable();

        let mut env = Vec::new();
        while let Some((key, value)) = words.peek().and_then(|word| env_assignment(word)) {
            env.push((key, value));
            words.next();
        }

        let argv: Vec<String> = words.collect();
        if argv.is_empty() {
            return Err(EntryError::EmptyExec);
        }

        Ok(Self { env, argv })
    }

    /// Program to execute
    pub fn program(&self) -> &str {
        self.argv.first().map_or("", String::as_str)
    }

    /// Arguments after the program
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// Remove field codes from one argument and unescape `%%`
///
/// Unknown `%x` sequences are kept as written.
pub fn strip_field_codes(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                result.push('%');
            }
            Some(code) if FIELD_CODES.contains(&code) => {
                chars.next();
            }
            _ => result.push('%'),
        }
    }
    result
}

/// Split on whitespace, honouring quotes and backslash escapes
pub fn split_words(exec: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = exec.chars();

    while let Some(c) = chars.next() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            (c, None) if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            ('\\', _) => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            (c, _) => current.push(c),
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn env_assignment(word: &str) -> Option<(String, String)> {
    let (key, value) = word.split_once('=')?;
    is_valid_env_name(key).then(|| (key.to_string(), value.to_string()))
}

/// Letters, digits and underscores, not starting with a digit
pub fn is_valid_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_field_codes() {
        assert_eq!(strip_field_codes("firefox"), "firefox");
        assert_eq!(strip_field_codes("%u"), "");
        assert_eq!(strip_field_codes("--file=%f"), "--file=");
        assert_eq!(strip_field_codes("+%%d"), "+%d");
        assert_eq!(strip_field_codes("%%u"), "%u");
        assert_eq!(strip_field_codes("50%"), "50%");
        assert_eq!(strip_field_codes("%z"), "%z");
    }

    #[test]
    fn test_parse_drops_field_code_arguments() {
        let command = ExecCommand::parse("firefox  %u   %U").unwrap();
        assert_eq!(command.argv, vec!["firefox"]);
    }

    #[test]
    fn test_parse_percent_escape() {
        let command = ExecCommand::parse("date +%%d").unwrap();
        assert_eq!(command.argv, vec!["date", "+%d"]);
    }

    #[test]
    fn test_parse_keeps_quoted_spacing() {
        let command = ExecCommand::parse(r#"sh -c "echo  a" %f"#).unwrap();
        assert_eq!(command.argv, vec!["sh", "-c", "echo  a"]);
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("firefox --new-window"), vec!["firefox", "--new-window"]);
        assert_eq!(
            split_words(r#"firefox "https://example.com""#),
            vec!["firefox", "https://example.com"]
        );
        assert_eq!(split_words("echo 'hello world'"), vec!["echo", "hello world"]);
        assert_eq!(split_words(r"echo hello\ world"), vec!["echo", "hello world"]);
    }

    #[test]
    fn test_env_name_validation() {
        assert!(is_valid_env_name("PATH"));
        assert!(is_valid_env_name("MY_VAR"));
        assert!(is_valid_env_name("VAR123"));
        assert!(is_valid_env_name("path"));
        assert!(!is_valid_env_name("123VAR"));
        assert!(!is_valid_env_name("MY-VAR"));
        assert!(!is_valid_env_name(""));
    }

    #[test]
    fn test_parse_with_env() {
        let command = ExecCommand::parse("GDK_BACKEND=x11 FOO=1 app --flag=on %U").unwrap();

        assert_eq!(
            command.env,
            vec![
                ("GDK_BACKEND".to_string(), "x11".to_string()),
                ("FOO".to_string(), "1".to_string())
            ]
        );
        assert_eq!(command.program(), "app");
        assert_eq!(command.args(), ["--flag=on".to_string()]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ExecCommand::parse("%U"), Err(EntryError::EmptyExec));
        assert_eq!(ExecCommand::parse("ONLY=env"), Err(EntryError::EmptyExec));
    }
}
