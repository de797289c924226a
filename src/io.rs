//! Plain-text tree and query formats
//!
//! Blank lines and lines starting with `#` are skipped everywhere.
//!
//! - edge list: a line holding `n`, then one `u v` line per edge
//! - matrix: `n` lines of `n` entries, each `0` or `1`
//! - queries: one `u v` line per query

use std::str::FromStr;

use thiserror::Error;

use crate::tree::{AdjacencyList, InputError, NodeId};

/// Failure while reading a text description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No node count before the first edge.
    #[error("missing node count")]
    MissingNodeCount,

    /// A token could not be parsed.
    #[error("line {line}: invalid token '{token}'")]
    InvalidToken {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A line had the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Fields required.
        expected: usize,
        /// Fields present.
        found: usize,
    },

    /// Parsed text does not form valid adjacency.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Layout of a tree description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeFormat {
    /// Node count followed by `u v` edges.
    Edges,
    /// Square 0/1 adjacency matrix.
    Matrix,
}

/// Parse `text` in the given format.
pub fn parse_tree(text: &str, format: TreeFormat) -> Result<AdjacencyList, ParseError> {
    match format {
        TreeFormat::Edges => parse_edge_list(text),
        TreeFormat::Matrix => parse_matrix(text),
    }
}

/// Parse an edge list: node count, then `u v` per line.
pub fn parse_edge_list(text: &str) -> Result<AdjacencyList, ParseError> {
    let mut lines = content_lines(text);
    let (line, header) = lines.next().ok_or(ParseError::MissingNodeCount)?;
    let [n] = fields::<usize, 1>(line, header)?;

    let edges = lines
        .map(|(line, content)| fields::<NodeId, 2>(line, content).map(|[u, v]| (u, v)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AdjacencyList::from_edges(n, &edges)?)
}

/// Parse a whitespace-separated 0/1 matrix.
pub fn parse_matrix(text: &str) -> Result<AdjacencyList, ParseError> {
    let rows = content_lines(text)
        .map(|(line, content)| {
            content
                .split_whitespace()
                .map(|token| match token {
                    "0" => Ok(false),
                    "1" => Ok(true),
                    other => Err(ParseError::InvalidToken {
                        line,
                        token: other.to_string(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AdjacencyList::from_matrix(&rows)?)
}

/// Parse `u v` query pairs.
pub fn parse_queries(text: &str) -> Result<Vec<(NodeId, NodeId)>, ParseError> {
    content_lines(text)
        .map(|(line, content)| fields::<NodeId, 2>(line, content).map(|[u, v]| (u, v)))
        .collect()
}

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn fields<T: FromStr + Copy + Default, const N: usize>(
    line: usize,
    content: &str,
) -> Result<[T; N], ParseError> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ParseError::FieldCount {
            line,
            expected: N,
            found: tokens.len(),
        });
    }

    let mut out = [T::default(); N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| ParseError::InvalidToken {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_list_with_comments() {
        let text = "# sample\n5\n0 1\n0 2\n\n1 3\n1 4\n";
        let adjacency = parse_edge_list(text).unwrap();
        assert_eq!(adjacency.len(), 5);
        assert_eq!(adjacency.edge_count(), 4);
    }

    #[test]
    fn matrix_text() {
        let text = "0 1 1\n1 0 0\n1 0 0\n";
        let adjacency = parse_tree(text, TreeFormat::Matrix).unwrap();
        assert_eq!(adjacency.neighbors(0), Some(&[1, 2][..]));
    }

    #[test]
    fn bad_matrix_entry() {
        assert_eq!(
            parse_matrix("0 2\n2 0\n"),
            Err(ParseError::InvalidToken {
                line: 1,
                token: "2".to_string()
            })
        );
    }

    #[test]
    fn ragged_matrix_surfaces_input_error() {
        assert_eq!(
            parse_matrix("0 1\n1\n"),
            Err(ParseError::Input(InputError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }))
        );
    }

    #[test]
    fn query_lines() {
        assert_eq!(parse_queries("3 4\n# x\n2 0\n"), Ok(vec![(3, 4), (2, 0)]));
        assert_eq!(
            parse_queries("3 4 5\n"),
            Err(ParseError::FieldCount {
                line: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            parse_queries("a 1\n"),
            Err(ParseError::InvalidToken {
                line: 1,
                token: "a".to_string()
            })
        );
    }

    #[test]
    fn empty_edge_list() {
        assert_eq!(parse_edge_list("# nothing\n"), Err(ParseError::MissingNodeCount));
    }
}
