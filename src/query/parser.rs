use thiserror::Error;

use super::column::ColumnDef;

/// Parses a column spec such as `status,date,connect_boards(text_column,link(name))`.
///
/// Plain IDs become simple columns; `id(...)` becomes a relation column whose
/// parenthesised list is expanded on the linked items. Whitespace around IDs
/// is ignored. An empty spec yields no columns.
pub fn parse_columns(spec: &str) -> Result<Vec<ColumnDef>, ColumnParseError> {
    let mut parser = ColumnParser::new(spec);
    parser.skip_whitespace();
    if parser.at_end() {
        return Ok(Vec::new());
    }

    let columns = parser.parse_list()?;
    parser.skip_whitespace();
    match parser.current_char() {
        None => Ok(columns),
        Some(c) => Err(ColumnParseError::UnexpectedCharacter {
            position: parser.position,
            char: c,
        }),
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ColumnParseError {
    #[error("Unexpected character at position {position}: '{char}'")]
    UnexpectedCharacter { position: usize, char: char },

    #[error("Expected column id at position {position}")]
    ExpectedColumnId { position: usize },

    #[error("Missing closing parenthesis for column '{0}'")]
    MissingClosingParen(String),
}

struct ColumnParser {
    chars: Vec<char>,
    position: usize,
}

impl ColumnParser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    fn parse_list(&mut self) -> Result<Vec<ColumnDef>, ColumnParseError> {
        let mut columns = vec![self.parse_column()?];

        loop {
            self.skip_whitespace();
            if self.current_char() != Some(',') {
                return Ok(columns);
            }
            self.position += 1;
            columns.push(self.parse_column()?);
        }
    }

    fn parse_column(&mut self) -> Result<ColumnDef, ColumnParseError> {
        self.skip_whitespace();
        let id = self.parse_id()?;
        self.skip_whitespace();

        if self.current_char() != Some('(') {
            return Ok(ColumnDef::Simple(id));
        }
        self.position += 1;
        self.skip_whitespace();

        let linked_columns = if self.current_char() == Some(')') {
            Vec::new()
        } else {
            self.parse_list()?
        };

        self.skip_whitespace();
        if self.current_char() != Some(')') {
            return Err(ColumnParseError::MissingClosingParen(id));
        }
        self.position += 1;

        Ok(ColumnDef::Linked { id, linked_columns })
    }

    fn parse_id(&mut self) -> Result<String, ColumnParseError> {
        let start = self.position;
        while let Some(c) = self.current_char() {
            if c == ',' || c == '(' || c == ')' || c.is_whitespace() {
                break;
            }
            self.position += 1;
        }

        if self.position == start {
            return Err(ColumnParseError::ExpectedColumnId { position: start });
        }
        Ok(self.chars[start..self.position].iter().collect())
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_list() {
        let columns = parse_columns("status, date").unwrap();
        assert_eq!(columns, vec![ColumnDef::simple("status"), ColumnDef::simple("date")]);
    }

    #[test]
    fn test_nested_relations() {
        let columns = parse_columns("status,connect_boards(text_column,link(name))").unwrap();
        assert_eq!(
            columns,
            vec![
                ColumnDef::simple("status"),
                ColumnDef::linked(
                    "connect_boards",
                    [ColumnDef::simple("text_column"), ColumnDef::linked("link", ["name"])]
                ),
            ]
        );
    }

    #[test]
    fn test_empty_spec() {
        assert_eq!(parse_columns("   ").unwrap(), Vec::new());
    }

    #[test]
    fn test_empty_relation_list() {
        let columns = parse_columns("rel()").unwrap();
        assert_eq!(columns, vec![ColumnDef::linked("rel", Vec::<ColumnDef>::new())]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_columns("rel(a,b"),
            Err(ColumnParseError::MissingClosingParen("rel".to_string()))
        );
        assert_eq!(
            parse_columns("a,,b"),
            Err(ColumnParseError::ExpectedColumnId { position: 2 })
        );
        assert_eq!(
            parse_columns("a)"),
            Err(ColumnParseError::UnexpectedCharacter { position: 1, char: ')' })
        );
    }
}
