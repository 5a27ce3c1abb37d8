use crate::expression_parser::{build_tree, preprocess, tokenize, validate, Token};
use crate::log_targets;
use crate::{Ast, ConstraintError, ConstraintParser, OperatorVocabulary};

/// Parse a constraint using the standard `OperatorVocabulary` and no size limits.
///
/// ```rust
/// use logic_constraints::{parse_constraint, ConstraintError};
///
/// let ast = parse_constraint("not A or B").unwrap();
/// assert_eq!("OR[NOT[A][]][B]", ast.to_string());
/// assert!(matches!(parse_constraint("A B"), Err(ConstraintError::AdjacentOperands { .. })));
/// ```
pub fn parse_constraint(text: &str) -> Result<Ast, ConstraintError> {
    ConstraintParser::new().parse(text)
}

impl ConstraintParser {
    /// A parser with the standard vocabulary and no limits.
    pub fn new() -> ConstraintParser {
        ConstraintParser::default()
    }

    /// A parser with a custom vocabulary and no limits.
    pub fn with_vocabulary(vocabulary: OperatorVocabulary) -> ConstraintParser {
        ConstraintParser {
            vocabulary,
            max_tokens: None,
            max_depth: None,
        }
    }

    /// Reject expressions with more than `limit` tokens.
    pub fn with_max_tokens(mut self, limit: usize) -> ConstraintParser {
        self.max_tokens = Some(limit);
        self
    }

    /// Reject expressions with parentheses nested deeper than `limit`.
    pub fn with_max_depth(mut self, limit: usize) -> ConstraintParser {
        self.max_depth = Some(limit);
        self
    }

    pub fn vocabulary(&self) -> &OperatorVocabulary {
        &self.vocabulary
    }

    /// Modify the vocabulary of this parser. Other parsers are not affected.
    pub fn vocabulary_mut(&mut self) -> &mut OperatorVocabulary {
        &mut self.vocabulary
    }

    /// Preprocess `text` and classify its words using the vocabulary of this parser.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(&preprocess(text))
            .iter()
            .enumerate()
            .map(|(position, word)| Token::classify(word, position, &self.vocabulary))
            .collect()
    }

    /// Parse `text` into an `Ast`.
    ///
    /// The first violated syntax rule (or configured limit) is reported as an error.
    pub fn parse(&self, text: &str) -> Result<Ast, ConstraintError> {
        if text.trim().is_empty() {
            return Err(ConstraintError::EmptyExpression);
        }
        let tokens = self.tokenize(text);
        log::trace!(
            target: log_targets::PARSER,
            "Tokens of `{}`: {:?}",
            text,
            tokens.iter().map(|t| t.text()).collect::<Vec<_>>()
        );
        self.check_limits(&tokens)?;
        validate(&tokens)?;
        let root = build_tree(&tokens)?;
        log::debug!(
            target: log_targets::PARSER,
            "Parsed {} tokens into a tree of height {}.",
            tokens.len(),
            root.height()
        );
        Ok(Ast::new(root))
    }

    /// **(internal)** Check the configured size limits. Runs before validation, so an
    /// oversized input is rejected without any recursive processing.
    fn check_limits(&self, tokens: &[Token]) -> Result<(), ConstraintError> {
        if let Some(limit) = self.max_tokens {
            if tokens.len() > limit {
                return Err(ConstraintError::ExpressionTooComplex {
                    measure: "token count",
                    actual: tokens.len(),
                    limit,
                });
            }
        }
        if let Some(limit) = self.max_depth {
            let depth = max_parenthesis_depth(tokens);
            if depth > limit {
                return Err(ConstraintError::ExpressionTooComplex {
                    measure: "parenthesis depth",
                    actual: depth,
                    limit,
                });
            }
        }
        Ok(())
    }
}

/// **(internal)** The deepest parenthesis nesting reached while reading `tokens`.
fn max_parenthesis_depth(tokens: &[Token]) -> usize {
    let mut depth: usize = 0;
    let mut max: usize = 0;
    for token in tokens {
        depth += token.opening();
        max = max.max(depth);
        depth = depth.saturating_sub(token.closing());
    }
    max
}
