use crate::error::{Error, ParseError};
use crate::graph::Graph;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

/// Reads a graph from a file.
///
/// Edge-list input:
/// - the first line holds the number of vertices,
/// - every following line holds one edge as two vertex ids from `0` to `|V|-1`,
/// - ids are separated by whitespace or punctuation, so `0 1`, `0,1` and `(0, 1)` are all accepted.
///
/// Blank lines are skipped. Negative ids are rejected.
///
/// Example input:
/// ```text
/// 6
/// 0,1
/// 1,2
/// 2,0
/// 3,4
/// 4,5
/// 5,3
/// 2,3
/// ```
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Graph, Error> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Graph, Error> {
    from_reader(BufReader::new(Cursor::new(input)))
}

/// This is equivalent to [`from_file`], but reads from any buffered reader.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph, Error> {
    let (vertex_count, edges) = parse_edge_list(reader)?;
    Ok(Graph::build(vertex_count, edges)?)
}

/// Parses the vertex count and the edge list without checking edges against the vertex count.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<(usize, Vec<(usize, usize)>), ParseError> {
    let mut vertex_count = None;
    let mut edges = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_number = i + 1;
        let line = line.map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => ParseError::InvalidEncoding { line: line_number },
            _ => ParseError::IoFailure(err),
        })?;
        let tokens: Vec<&str> = tokens(&line).collect();
        if tokens.is_empty() {
            continue;
        }

        match vertex_count {
            None => {
                if tokens.len() != 1 {
                    return Err(ParseError::WrongHeaderTokenCount {
                        line: line_number,
                        found: tokens.len(),
                    });
                }
                vertex_count = Some(parse_id(tokens[0], line_number)?);
            }
            Some(_) => {
                if tokens.len() != 2 {
                    return Err(ParseError::WrongEdgeTokenCount {
                        line: line_number,
                        found: tokens.len(),
                    });
                }
                let u = parse_id(tokens[0], line_number)?;
                let v = parse_id(tokens[1], line_number)?;
                edges.push((u, v));
            }
        }
    }

    let vertex_count = vertex_count.ok_or(ParseError::MissingVertexCount)?;
    log::debug!("parsed {} vertices and {} edges", vertex_count, edges.len());
    Ok((vertex_count, edges))
}

/// Splits a line on whitespace and punctuation, keeping signs attached to their numbers.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || (c.is_ascii_punctuation() && c != '-' && c != '+'))
        .filter(|token| !token.is_empty())
}

fn parse_id(token: &str, line: usize) -> Result<usize, ParseError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidToken {
            line,
            token: token.to_string(),
        });
    }
    token.parse().map_err(|_| ParseError::InvalidToken {
        line,
        token: token.to_string(),
    })
}
