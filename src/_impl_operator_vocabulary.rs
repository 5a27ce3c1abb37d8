use super::*;
use fxhash::FxHashMap;

/// **(internal)** Keywords of the standard vocabulary.
const STANDARD_UNARY: [(&str, UnaryOperator); 1] = [("not", UnaryOperator::Not)];

/// **(internal)** Keywords of the standard vocabulary, including the symbolic aliases.
const STANDARD_BINARY: [(&str, BinaryOperator); 15] = [
    ("and", BinaryOperator::And),
    ("&&", BinaryOperator::And),
    ("&", BinaryOperator::And),
    ("or", BinaryOperator::Or),
    ("||", BinaryOperator::Or),
    ("|", BinaryOperator::Or),
    ("implies", BinaryOperator::Implies),
    ("=>", BinaryOperator::Implies),
    ("requires", BinaryOperator::Requires),
    ("excludes", BinaryOperator::Excludes),
    ("equivalence", BinaryOperator::Equivalence),
    ("iff", BinaryOperator::Equivalence),
    ("<=>", BinaryOperator::Equivalence),
    ("xor", BinaryOperator::Xor),
    ("^", BinaryOperator::Xor),
];

impl OperatorVocabulary {
    /// The standard vocabulary: `not`, `and`, `or`, `implies`, `requires`, `excludes`,
    /// `equivalence` and `xor`, plus the symbolic aliases `&&`, `&`, `||`, `|`, `=>`,
    /// `iff`, `<=>` and `^`. Matching is case-insensitive.
    pub fn standard() -> OperatorVocabulary {
        OperatorVocabulary {
            unary: STANDARD_UNARY
                .iter()
                .map(|(k, op)| (k.to_string(), *op))
                .collect(),
            binary: STANDARD_BINARY
                .iter()
                .map(|(k, op)| (k.to_string(), *op))
                .collect(),
            case_sensitive: false,
            lookup: STANDARD_UNARY
                .iter()
                .map(|(k, op)| (k.to_string(), Operator::Unary(*op)))
                .chain(
                    STANDARD_BINARY
                        .iter()
                        .map(|(k, op)| (k.to_string(), Operator::Binary(*op))),
                )
                .collect(),
        }
    }

    /// Keywords currently recognized as unary operators.
    pub fn unary_operators(&self) -> &[(String, UnaryOperator)] {
        &self.unary
    }

    /// Keywords currently recognized as binary operators.
    pub fn binary_operators(&self) -> &[(String, BinaryOperator)] {
        &self.binary
    }

    /// Replace the unary keywords. On error, the vocabulary is left unchanged.
    pub fn set_unary_operators(
        &mut self,
        keywords: &[(&str, UnaryOperator)],
    ) -> Result<(), ConstraintError> {
        let unary: Vec<(String, UnaryOperator)> =
            keywords.iter().map(|(k, op)| (k.to_string(), *op)).collect();
        self.lookup = Self::build_lookup(&unary, &self.binary, self.case_sensitive)?;
        self.unary = unary;
        Ok(())
    }

    /// Replace the binary keywords. On error, the vocabulary is left unchanged.
    pub fn set_binary_operators(
        &mut self,
        keywords: &[(&str, BinaryOperator)],
    ) -> Result<(), ConstraintError> {
        let binary: Vec<(String, BinaryOperator)> =
            keywords.iter().map(|(k, op)| (k.to_string(), *op)).collect();
        self.lookup = Self::build_lookup(&self.unary, &binary, self.case_sensitive)?;
        self.binary = binary;
        Ok(())
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Switch between exact and case-insensitive keyword matching. Fails when two keywords
    /// that differ only in case map to different operators.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) -> Result<(), ConstraintError> {
        self.lookup = Self::build_lookup(&self.unary, &self.binary, case_sensitive)?;
        self.case_sensitive = case_sensitive;
        Ok(())
    }

    /// Find the operator denoted by `word`, or `None` if `word` is an operand.
    pub fn operator(&self, word: &str) -> Option<Operator> {
        if self.case_sensitive {
            self.lookup.get(word).cloned()
        } else {
            self.lookup.get(&word.to_lowercase()).cloned()
        }
    }

    /// True if `word` is any known operator keyword.
    pub fn is_operator(&self, word: &str) -> bool {
        self.operator(word).is_some()
    }

    /// **(internal)** Build and check the keyword lookup table.
    fn build_lookup(
        unary: &[(String, UnaryOperator)],
        binary: &[(String, BinaryOperator)],
        case_sensitive: bool,
    ) -> Result<FxHashMap<String, Operator>, ConstraintError> {
        let mut lookup: FxHashMap<String, Operator> = FxHashMap::default();
        let all = unary
            .iter()
            .map(|(k, op)| (k, Operator::Unary(*op)))
            .chain(binary.iter().map(|(k, op)| (k, Operator::Binary(*op))));
        for (keyword, op) in all {
            if keyword.is_empty() {
                return Err(ConstraintError::InvalidKeyword {
                    keyword: keyword.clone(),
                    reason: "keyword is empty",
                });
            }
            if keyword.chars().any(|c| c.is_whitespace()) {
                return Err(ConstraintError::InvalidKeyword {
                    keyword: keyword.clone(),
                    reason: "keyword contains whitespace",
                });
            }
            if keyword.chars().any(|c| NOT_IN_KEYWORD.contains(&c)) {
                return Err(ConstraintError::InvalidKeyword {
                    keyword: keyword.clone(),
                    reason: "keyword contains a parenthesis",
                });
            }
            let key = if case_sensitive {
                keyword.clone()
            } else {
                keyword.to_lowercase()
            };
            match lookup.insert(key, op) {
                Some(previous) if previous != op => {
                    return Err(ConstraintError::InvalidKeyword {
                        keyword: keyword.clone(),
                        reason: "keyword denotes two different operators",
                    });
                }
                _ => {}
            }
        }
        Ok(lookup)
    }
}

impl Default for OperatorVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
