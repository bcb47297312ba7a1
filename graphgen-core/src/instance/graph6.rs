//! graph6 text for simple undirected graphs.
//!
//! The format stores the vertex count followed by the upper triangle of the
//! adjacency matrix, column by column, packed six bits per printable byte
//! (each byte offset by 63). Parsing is delegated to the `graph6` crate,
//! which only reads the format; encoding is done here.

use graph6::Graph as Graph6;

use crate::{Graph, error::Graph6Error};

/// Optional header that may precede graph6 data in a file.
pub const GRAPH6_HEADER: &str = ">>graph6<<";

const BIAS: u8 = 63;
const LONG_PREFIX: u8 = 126;
const SHORT_LIMIT: usize = 62;
const MEDIUM_LIMIT: usize = 258_047;
/// Largest vertex count graph6 can describe (`2^36 - 1`).
pub const GRAPH6_VERTEX_LIMIT: usize = 68_719_476_735;

/// Encodes `graph` as graph6 text without header or trailing newline.
///
/// # Errors
/// Returns [`Graph6Error::TooManyVertices`] when the graph is too large for
/// the format.
///
/// # Examples
/// ```
/// use graphgen_core::{Graph, encode_graph6};
///
/// let path = Graph::from_edges(3, [(0, 1), (1, 2)]).expect("valid edges");
/// assert_eq!(encode_graph6(&path).expect("encodable"), "Bg");
/// ```
pub fn encode_graph6(graph: &Graph) -> Result<String, Graph6Error> {
    let vertex_count = graph.vertex_count();
    let bit_count = triangle_bits(vertex_count)?;
    let mut packed = vec![0_u8; bit_count.div_ceil(6)];
    for (low, high) in graph.edges() {
        let position = bit_position(low, high);
        if let Some(byte) = packed.get_mut(position / 6) {
            *byte |= 1 << (5 - position % 6);
        }
    }

    let mut encoded = encode_vertex_count(vertex_count)?;
    encoded.extend(packed.into_iter().map(|bits| bits + BIAS));
    Ok(encoded.into_iter().map(char::from).collect())
}

/// Decodes graph6 text into a [`Graph`].
///
/// Surrounding whitespace and a leading [`GRAPH6_HEADER`] are ignored. The
/// body is parsed by the `graph6` crate once its bytes are known to lie in
/// the graph6 alphabet.
///
/// # Errors
/// Returns [`Graph6Error::Empty`] for blank input,
/// [`Graph6Error::InvalidByte`] for bytes outside `63..=126` and
/// [`Graph6Error::Malformed`] when the body does not describe a graph.
///
/// # Examples
/// ```
/// use graphgen_core::decode_graph6;
///
/// let graph = decode_graph6(">>graph6<<Bg\n").expect("valid graph6");
/// assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
/// ```
pub fn decode_graph6(text: &str) -> Result<Graph, Graph6Error> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix(GRAPH6_HEADER).unwrap_or(trimmed);
    if body.is_empty() {
        return Err(Graph6Error::Empty);
    }
    if let Some((offset, byte)) = body
        .bytes()
        .enumerate()
        .find(|(_, byte)| !(BIAS..=LONG_PREFIX).contains(byte))
    {
        return Err(Graph6Error::InvalidByte { offset, byte });
    }

    let parsed = Graph6::from_graph6(body).map_err(|source| Graph6Error::Malformed {
        message: source.to_string(),
    })?;
    let vertex_count = parsed.n();
    let mut graph = Graph::with_vertices(vertex_count);
    for low in 0..vertex_count {
        for high in (low + 1)..vertex_count {
            if parsed.has_edge(low, high) {
                graph.add_edge(low, high)?;
            }
        }
    }
    Ok(graph)
}

fn triangle_bits(vertex_count: usize) -> Result<usize, Graph6Error> {
    let too_many = || Graph6Error::TooManyVertices {
        vertex_count,
        limit: GRAPH6_VERTEX_LIMIT,
    };
    if vertex_count > GRAPH6_VERTEX_LIMIT {
        return Err(too_many());
    }
    vertex_count
        .checked_mul(vertex_count.saturating_sub(1))
        .map(|product| product / 2)
        .ok_or_else(too_many)
}

const fn bit_position(low: usize, high: usize) -> usize {
    high * (high - 1) / 2 + low
}

fn sextet(value: usize, shift: u32) -> u8 {
    u8::try_from((value >> shift) & 0x3f).map_or(BIAS, |bits| bits + BIAS)
}

fn encode_vertex_count(vertex_count: usize) -> Result<Vec<u8>, Graph6Error> {
    if vertex_count <= SHORT_LIMIT {
        return Ok(vec![sextet(vertex_count, 0)]);
    }
    if vertex_count <= MEDIUM_LIMIT {
        return Ok(vec![
            LONG_PREFIX,
            sextet(vertex_count, 12),
            sextet(vertex_count, 6),
            sextet(vertex_count, 0),
        ]);
    }
    if vertex_count <= GRAPH6_VERTEX_LIMIT {
        let mut prefix = vec![LONG_PREFIX, LONG_PREFIX];
        prefix.extend((0..6).rev().map(|group| sextet(vertex_count, group * 6)));
        return Ok(prefix);
    }
    Err(Graph6Error::TooManyVertices {
        vertex_count,
        limit: GRAPH6_VERTEX_LIMIT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(0, &[], "?")]
    #[case::single(1, &[], "@")]
    #[case::edge(2, &[(0, 1)], "A_")]
    #[case::path(3, &[(0, 1), (1, 2)], "Bg")]
    #[case::triangle(3, &[(0, 1), (0, 2), (1, 2)], "Bw")]
    #[case::long_edge(5, &[(0, 4)], "D?_")]
    fn encodes_known_strings(
        #[case] vertex_count: usize,
        #[case] edges: &[(usize, usize)],
        #[case] expected: &str,
    ) {
        let graph = Graph::from_edges(vertex_count, edges.iter().copied()).expect("valid edges");
        assert_eq!(encode_graph6(&graph).expect("encodable"), expected);
        assert_eq!(decode_graph6(expected).expect("decodable"), graph);
    }

    #[rstest]
    fn medium_vertex_counts_use_four_byte_prefix() {
        let graph = Graph::with_vertices(63);
        let encoded = encode_graph6(&graph).expect("encodable");
        assert!(encoded.starts_with("~??~"));
        let decoded = decode_graph6(&encoded).expect("decodable");
        assert_eq!(decoded.vertex_count(), 63);
    }

    #[rstest]
    fn decoding_ignores_header_and_newline() {
        let headed = decode_graph6(">>graph6<<Bw\n").expect("decodable");
        let bare = decode_graph6("Bw").expect("decodable");
        assert_eq!(headed, bare);
        assert_eq!(bare.edge_count(), 3);
    }

    #[rstest]
    fn decoding_keeps_every_vertex() {
        let graph = decode_graph6("D?_").expect("decodable");
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edges(), vec![(0, 4)]);
    }

    #[rstest]
    #[case::blank("  \n", Graph6Error::Empty)]
    #[case::header_only(">>graph6<<", Graph6Error::Empty)]
    #[case::bad_byte("B!", Graph6Error::InvalidByte { offset: 1, byte: b'!' })]
    #[case::non_ascii("Bé", Graph6Error::InvalidByte { offset: 1, byte: 0xc3 })]
    fn rejects_text_outside_the_alphabet(#[case] text: &str, #[case] expected: Graph6Error) {
        assert_eq!(decode_graph6(text), Err(expected));
    }
}
