//! Whitespace tokenization with line tracking.

use crate::error::{DesignError, DesignResult};

/// One whitespace-delimited token and the 1-based line it came from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

impl<'a> Token<'a> {
    pub fn as_f64(&self) -> DesignResult<f64> {
        self.text
            .parse::<f64>()
            .map_err(|_| DesignError::InvalidValue { line: self.line })
    }

    pub fn as_u32(&self) -> DesignResult<u32> {
        self.text
            .parse::<u32>()
            .map_err(|_| DesignError::InvalidValue { line: self.line })
    }

    /// Legacy boolean: an integer, nonzero means true.
    pub fn as_flag(&self) -> DesignResult<bool> {
        Ok(self
            .text
            .parse::<i64>()
            .map_err(|_| DesignError::InvalidValue { line: self.line })?
            != 0)
    }
}

/// One non-empty source line split into tokens.
#[derive(Debug)]
pub(crate) struct Row<'a> {
    pub line: usize,
    pub tokens: Vec<Token<'a>>,
}

/// Split the file into token rows, dropping blank lines but keeping real
/// line numbers for diagnostics.
pub(crate) fn tokenize(text: &str) -> Vec<Row<'_>> {
    text.lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let line = i + 1;
            let tokens: Vec<Token<'_>> = raw
                .split_whitespace()
                .map(|text| Token { text, line })
                .collect();
            if tokens.is_empty() {
                None
            } else {
                Some(Row { line, tokens })
            }
        })
        .collect()
}

/// Flat forward-only cursor over the field block's tokens.
#[derive(Debug)]
pub(crate) struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn from_rows(rows: &[Row<'a>]) -> Self {
        Self {
            tokens: rows.iter().flat_map(|r| r.tokens.iter().copied()).collect(),
            pos: 0,
        }
    }

    /// Next token; a truncated field block is a structural error.
    pub fn next(&mut self) -> DesignResult<Token<'a>> {
        let tok = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or(DesignError::InvalidDesignFile)?;
        self.pos += 1;
        Ok(tok)
    }
}
