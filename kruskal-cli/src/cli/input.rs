//! Edge-list parsing for graph input files.

use kruskal_core::{Edge, Graph, VertexId};
use thiserror::Error;
use tracing::debug;

/// Errors raised while parsing an edge-list file.
///
/// Line numbers are one-based and count every physical line, including
/// blank and comment lines.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// The input has no data lines.
    #[error("input is empty; expected a vertex count on the first data line")]
    MissingVertexCount,
    /// The first data line is not a non-negative integer.
    #[error("line {line}: vertex count `{raw}` is not a non-negative integer")]
    InvalidVertexCount {
        /// Line holding the vertex count.
        line: usize,
        /// Rejected text.
        raw: String,
    },
    /// An edge line does not have exactly three fields.
    #[error("line {line}: expected `source destination weight`, found {found} field(s)")]
    MalformedEdge {
        /// Offending line.
        line: usize,
        /// Number of whitespace-separated fields present.
        found: usize,
    },
    /// An edge field is not an integer of the expected kind.
    #[error("line {line}: {field} `{raw}` is not a valid {expected}")]
    InvalidField {
        /// Offending line.
        line: usize,
        /// Field name: `source`, `destination` or `weight`.
        field: &'static str,
        /// Rejected text.
        raw: String,
        /// Description of the accepted values.
        expected: &'static str,
    },
}

const VERTEX_EXPECTATION: &str = "vertex index";
const WEIGHT_EXPECTATION: &str = "64-bit integer weight";

/// Parses an edge-list document into a [`Graph`].
///
/// The format is line oriented. Text after `#` is a comment, and blank lines
/// are skipped. The first data line is the vertex count; each remaining line
/// is `source destination weight`, separated by whitespace. Vertex indices
/// are not range-checked here, that is left to the MST builder so its error
/// codes apply.
///
/// # Errors
/// Returns [`InputError`] describing the first malformed line.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::parse_graph;
///
/// let graph = parse_graph("# triangle\n3\n0 1 4\n1 2 -1\n2 0 7\n")?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 3);
/// # Ok::<(), kruskal_cli::cli::InputError>(())
/// ```
pub fn parse_graph(text: &str) -> Result<Graph, InputError> {
    let mut lines = data_lines(text);
    let (count_line, raw_count) = lines.next().ok_or(InputError::MissingVertexCount)?;
    let vertex_count =
        raw_count
            .parse::<usize>()
            .map_err(|_| InputError::InvalidVertexCount {
                line: count_line,
                raw: raw_count.to_owned(),
            })?;

    let edges = lines
        .map(|(line, content)| parse_edge(line, content))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(vertex_count, edge_count = edges.len(), "parsed edge list");
    Ok(Graph::new(vertex_count, edges))
}

/// Yields `(line_number, content)` for every line with data.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let content = line.split_once('#').map_or(line, |(data, _)| data).trim();
        (!content.is_empty()).then_some((index + 1, content))
    })
}

fn parse_edge(line: usize, content: &str) -> Result<Edge, InputError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let &[source, destination, weight] = fields.as_slice() else {
        return Err(InputError::MalformedEdge {
            line,
            found: fields.len(),
        });
    };

    Ok(Edge::new(
        parse_field::<VertexId>(line, "source", source, VERTEX_EXPECTATION)?,
        parse_field::<VertexId>(line, "destination", destination, VERTEX_EXPECTATION)?,
        parse_field::<i64>(line, "weight", weight, WEIGHT_EXPECTATION)?,
    ))
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, InputError> {
    raw.parse().map_err(|_| InputError::InvalidField {
        line,
        field,
        raw: raw.to_owned(),
        expected,
    })
}
