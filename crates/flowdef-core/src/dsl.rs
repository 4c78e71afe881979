//! Pipeline DSL parsing and canonical rendering.
//!
//! A task definition is an ordered sequence of pipeline steps. Each step is
//! a step name plus an ordered `--key=value` argument list. The control
//! plane re-renders submitted definitions in its own surface syntax, so the
//! declared text and the observed `dslText` can differ in whitespace and
//! quoting while describing the same pipeline. Parsing both sides and
//! re-serializing through [`Pipeline::canonical`] gives the stable equality
//! notion drift detection depends on.
//!
//! Step order and argument order are semantically meaningful: a reordered
//! pipeline is a different pipeline and must register as drift.

use crate::error::{ProjectionError, Result};

/// One step of a pipeline: a step name plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStep {
    /// Name of the application the step refers to.
    pub name: String,
    /// Arguments in declared order, unquoted values.
    pub args: Vec<(String, String)>,
}

impl PipelineStep {
    fn render(&self, out: &mut String) {
        out.push_str(&self.name);
        for (key, value) in &self.args {
            out.push_str(" --");
            out.push_str(key);
            out.push('=');
            out.push_str(&quote_value(value));
        }
    }
}

/// A parsed pipeline expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// Parses a definition or `dslText` into its pipeline structure.
    ///
    /// # Errors
    ///
    /// Returns a [`ProjectionError`] when the text is empty or does not
    /// follow the `name --key=value (| name --key=value)*` grammar.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = Scanner::new(input).tokenize()?;
        Parser { tokens, pos: 0 }.parse_pipeline()
    }

    /// Renders the canonical form of this pipeline.
    ///
    /// Steps are joined by `" | "`, arguments keep their declared order, and
    /// values are quoted only when the bare form would be ambiguous. Two
    /// pipelines are equivalent exactly when their canonical forms are equal.
    #[must_use]
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            step.render(&mut out);
        }
        out
    }
}

/// Quotes an argument value for canonical rendering.
///
/// Bare values stay bare. Values that would not survive a re-parse (empty,
/// whitespace, structural characters, quotes) are wrapped in single quotes,
/// or double quotes when the value itself contains a single quote.
fn quote_value(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value.starts_with("--")
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '|' | '=' | '\'' | '"'));
    if !needs_quoting {
        value.to_string()
    } else if value.contains('\'') {
        format!("\"{value}\"")
    } else {
        format!("'{value}'")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Pipe,
    Eq,
    DashDash,
    Word,
    Quoted,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    text: String,
    position: usize,
}

struct Scanner {
    input: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            while self.pos < self.input.len() && self.input[self.pos].is_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.input.len() {
                break;
            }

            let start = self.pos;
            let c = self.input[self.pos];
            let token = match c {
                '|' => {
                    self.pos += 1;
                    Token {
                        kind: TokenKind::Pipe,
                        text: "|".to_string(),
                        position: start,
                    }
                }
                '=' => {
                    self.pos += 1;
                    Token {
                        kind: TokenKind::Eq,
                        text: "=".to_string(),
                        position: start,
                    }
                }
                '\'' | '"' => {
                    self.pos += 1;
                    let mut text = String::new();
                    loop {
                        if self.pos >= self.input.len() {
                            return Err(ProjectionError::unterminated_quote(start));
                        }
                        let inner = self.input[self.pos];
                        self.pos += 1;
                        if inner == c {
                            break;
                        }
                        text.push(inner);
                    }
                    Token {
                        kind: TokenKind::Quoted,
                        text,
                        position: start,
                    }
                }
                '-' if self.peek_next() == Some('-') => {
                    self.pos += 2;
                    Token {
                        kind: TokenKind::DashDash,
                        text: "--".to_string(),
                        position: start,
                    }
                }
                _ => {
                    let mut text = String::new();
                    while self.pos < self.input.len() {
                        let w = self.input[self.pos];
                        if w.is_whitespace() || matches!(w, '|' | '=' | '\'' | '"') {
                            break;
                        }
                        text.push(w);
                        self.pos += 1;
                    }
                    Token {
                        kind: TokenKind::Word,
                        text,
                        position: start,
                    }
                }
            };
            tokens.push(token);
        }

        if tokens.is_empty() {
            return Err(ProjectionError::EmptyDefinition);
        }
        Ok(tokens)
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.pos + 1).copied()
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn parse_pipeline(mut self) -> Result<Pipeline> {
        let mut steps = Vec::new();
        loop {
            steps.push(self.parse_step()?);
            match self.peek() {
                None => break,
                Some(token) if token.kind == TokenKind::Pipe => {
                    self.pos += 1;
                }
                Some(token) => {
                    return Err(ProjectionError::malformed_argument(
                        token.text.clone(),
                        token.position,
                    ));
                }
            }
        }
        Ok(Pipeline { steps })
    }

    fn parse_step(&mut self) -> Result<PipelineStep> {
        let name = match self.peek() {
            Some(token) if token.kind == TokenKind::Word => {
                let name = token.text.clone();
                self.pos += 1;
                name
            }
            Some(token) => return Err(ProjectionError::missing_step_name(token.position)),
            None => {
                let end = self.tokens.last().map_or(0, |t| t.position + t.text.len());
                return Err(ProjectionError::missing_step_name(end));
            }
        };

        let mut args = Vec::new();
        while let Some(token) = self.peek() {
            if token.kind != TokenKind::DashDash {
                break;
            }
            let arg_position = token.position;
            self.pos += 1;
            args.push(self.parse_argument(arg_position)?);
        }

        Ok(PipelineStep { name, args })
    }

    fn parse_argument(&mut self, arg_position: usize) -> Result<(String, String)> {
        let key = match self.peek() {
            Some(token) if token.kind == TokenKind::Word => {
                let key = token.text.clone();
                self.pos += 1;
                key
            }
            _ => return Err(ProjectionError::malformed_argument("--", arg_position)),
        };

        match self.peek() {
            Some(token) if token.kind == TokenKind::Eq => {
                self.pos += 1;
            }
            _ => {
                return Err(ProjectionError::malformed_argument(
                    format!("--{key}"),
                    arg_position,
                ));
            }
        }

        let value = match self.peek() {
            Some(token) if matches!(token.kind, TokenKind::Word | TokenKind::Quoted) => {
                let value = token.text.clone();
                self.pos += 1;
                value
            }
            _ => {
                return Err(ProjectionError::malformed_argument(
                    format!("--{key}="),
                    arg_position,
                ));
            }
        };

        Ok((key, value))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(input: &str) -> String {
        Pipeline::parse(input).unwrap().canonical()
    }

    #[test]
    fn test_single_step() {
        assert_eq!(canonical("Test010"), "Test010");
        assert_eq!(canonical("  Test010  "), "Test010");
    }

    #[test]
    fn test_arguments_keep_declared_order() {
        let pipeline = Pipeline::parse("timestamp --format=yyyy --zone=UTC").unwrap();
        assert_eq!(pipeline.steps.len(), 1);
        assert_eq!(
            pipeline.steps[0].args,
            vec![
                ("format".to_string(), "yyyy".to_string()),
                ("zone".to_string(), "UTC".to_string()),
            ]
        );
        assert_eq!(
            pipeline.canonical(),
            "timestamp --format=yyyy --zone=UTC"
        );
    }

    #[test]
    fn test_whitespace_and_quoting_are_equivalent() {
        let declared = canonical("timestamp --format=yyyy");
        assert_eq!(canonical("timestamp   --format = 'yyyy'"), declared);
        assert_eq!(canonical("timestamp --format=\"yyyy\""), declared);
        assert_eq!(canonical("  timestamp\t--format= yyyy "), declared);
    }

    #[test]
    fn test_multi_step_pipeline() {
        assert_eq!(
            canonical("source --port=8080|transform --expression='a b'  | sink"),
            "source --port=8080 | transform --expression='a b' | sink"
        );
    }

    #[test]
    fn test_step_order_is_significant() {
        assert_ne!(canonical("alpha | beta"), canonical("beta | alpha"));
    }

    #[test]
    fn test_argument_change_is_significant() {
        assert_ne!(
            canonical("timestamp --format=yyyy"),
            canonical("timestamp --format=yyyy-MM-dd")
        );
    }

    #[test]
    fn test_values_with_spaces_round_trip() {
        let first = canonical("transform --expression='payload + 1'");
        let second = canonical(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_value_containing_single_quote_uses_double_quotes() {
        let rendered = canonical("log --prefix=\"it's\"");
        assert_eq!(rendered, "log --prefix=\"it's\"");
        assert_eq!(canonical(&rendered), rendered);
    }

    #[test]
    fn test_empty_definition() {
        assert_eq!(
            Pipeline::parse("").unwrap_err(),
            ProjectionError::EmptyDefinition
        );
        assert_eq!(
            Pipeline::parse("   \t ").unwrap_err(),
            ProjectionError::EmptyDefinition
        );
    }

    #[test]
    fn test_missing_step_name() {
        assert!(matches!(
            Pipeline::parse("| timestamp").unwrap_err(),
            ProjectionError::MissingStepName { position: 0 }
        ));
        assert!(matches!(
            Pipeline::parse("timestamp |").unwrap_err(),
            ProjectionError::MissingStepName { .. }
        ));
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(
            Pipeline::parse("timestamp --format='yyyy").unwrap_err(),
            ProjectionError::UnterminatedQuote { .. }
        ));
    }

    #[test]
    fn test_malformed_argument() {
        assert!(matches!(
            Pipeline::parse("timestamp --format").unwrap_err(),
            ProjectionError::MalformedArgument { .. }
        ));
        assert!(matches!(
            Pipeline::parse("timestamp --=x").unwrap_err(),
            ProjectionError::MalformedArgument { .. }
        ));
        assert!(matches!(
            Pipeline::parse("timestamp 'stray'").unwrap_err(),
            ProjectionError::MalformedArgument { .. }
        ));
    }
}
