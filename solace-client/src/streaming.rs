//! Event-stream consumption for streamed chat replies.
//!
//! The endpoint answers with blank-line separated frames:
//! ```text
//! data: {"content":"I hear "}
//!
//! data: {"content":"you."}
//!
//! ```
//! Each `data:` frame carries a JSON object; its `content` string is the
//! next fragment of the reply. Frames with any other prefix are ignored,
//! and a frame whose payload does not parse is logged and skipped without
//! ending the stream. The stream ends when the body does.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::Response;
use solace_types::StreamError;

/// Literal prefix of frames that carry a payload.
pub const DATA_PREFIX: &[u8] = b"data: ";

/// Frame delimiter.
const DELIMITER: &[u8] = b"\n\n";

/// Splits a byte stream into frames.
///
/// Bytes are buffered across pushes and only decoded once a full frame is
/// available. The delimiter never occurs inside a multi-byte UTF-8
/// sequence, so a character split across two chunks is always
/// reassembled before decoding.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buf: Vec<u8>,
}

impl FrameDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return every frame it completes, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        self.buf.extend_from_slice(chunk);

        let mut frames = Vec::new();
        let mut start = 0;
        while let Some(pos) = find_delimiter(&self.buf[start..]) {
            frames.push(self.buf[start..start + pos].to_vec());
            start += pos + DELIMITER.len();
        }
        self.buf.drain(..start);
        frames
    }

    /// Bytes received after the last complete frame.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }
}

fn find_delimiter(buf: &[u8]) -> Option<usize> {
    buf.windows(DELIMITER.len()).position(|w| w == DELIMITER)
}

/// What a single frame contributes to the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A non-empty `content` fragment.
    Content(String),
    /// A well-formed event with no usable `content`.
    Empty,
    /// Not a `data:` frame.
    Ignored,
    /// A `data:` frame whose payload could not be decoded.
    Malformed(String),
}

/// Classify one frame.
pub fn parse_frame(frame: &[u8]) -> FrameOutcome {
    let Some(payload) = frame.strip_prefix(DATA_PREFIX) else {
        return FrameOutcome::Ignored;
    };

    let payload = match std::str::from_utf8(payload) {
        Ok(s) => s,
        Err(e) => return FrameOutcome::Malformed(format!("UTF-8 decode error: {e}")),
    };

    let json: serde_json::Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => return FrameOutcome::Malformed(format!("JSON parse error in SSE: {e}")),
    };

    if !json.is_object() {
        return FrameOutcome::Malformed("payload is not a JSON object".into());
    }

    match json["content"].as_str() {
        Some(content) if !content.is_empty() => FrameOutcome::Content(content.to_string()),
        _ => FrameOutcome::Empty,
    }
}

/// Wrap an HTTP response body into a stream of reply fragments.
pub fn stream_response(
    response: Response,
) -> impl Stream<Item = Result<String, StreamError>> + Send + 'static {
    consume_stream(response.bytes_stream())
}

/// Turn a raw byte stream into a stream of reply fragments.
///
/// Each item is the `content` of one event, yielded as soon as the frame
/// carrying it is complete. A read failure yields one error and ends the
/// stream. Bytes left over after the last delimiter when the body ends
/// are not a frame and are dropped.
pub fn consume_stream<S, E>(
    byte_stream: S,
) -> impl Stream<Item = Result<String, StreamError>> + Send + 'static
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    async_stream::stream! {
        let mut decoder = FrameDecoder::new();
        let mut bytes_stream = std::pin::pin!(byte_stream);
        let mut frames_seen: usize = 0;

        while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    tracing::warn!(error = %e, frames = frames_seen, "reply stream read failed");
                    yield Err(StreamError::Read(e.to_string()));
                    return;
                }
            };

            for frame in decoder.push(&chunk) {
                frames_seen += 1;
                match parse_frame(&frame) {
                    FrameOutcome::Content(text) => {
                        yield Ok(text);
                    }
                    FrameOutcome::Malformed(reason) => {
                        tracing::warn!(
                            reason = %reason,
                            frame = %String::from_utf8_lossy(&frame),
                            "skipping malformed frame"
                        );
                    }
                    FrameOutcome::Empty | FrameOutcome::Ignored => {}
                }
            }
        }

        if !decoder.pending().is_empty() {
            tracing::debug!(
                bytes = decoder.pending().len(),
                "discarding unterminated trailing frame"
            );
        }
        tracing::debug!(frames = frames_seen, "reply stream complete");
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run a list of chunks through the stream and collect the fragments.
    async fn collect(chunks: &[&str]) -> Vec<String> {
        collect_bytes(chunks.iter().map(|c| c.as_bytes().to_vec()).collect()).await
    }

    async fn collect_bytes(chunks: Vec<Vec<u8>>) -> Vec<String> {
        let owned: Vec<Result<Bytes, std::io::Error>> =
            chunks.into_iter().map(|c| Ok(Bytes::from(c))).collect();
        consume_stream(futures::stream::iter(owned))
            .map(|r| r.unwrap())
            .collect()
            .await
    }

    #[test]
    fn decoder_splits_on_blank_line() {
        let mut decoder = FrameDecoder::new();
        let frames = decoder.push(b"data: a\n\ndata: b\n\nda");
        assert_eq!(frames, vec![b"data: a".to_vec(), b"data: b".to_vec()]);
        assert_eq!(decoder.pending(), b"da");
    }

    #[test]
    fn decoder_holds_delimiter_split_across_chunks() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.push(b"data: x\n").is_empty());
        assert_eq!(decoder.push(b"\n"), vec![b"data: x".to_vec()]);
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn parse_frame_extracts_content() {
        assert_eq!(
            parse_frame(br#"data: {"content":"hi"}"#),
            FrameOutcome::Content("hi".into())
        );
    }

    #[test]
    fn parse_frame_without_content_is_empty() {
        assert_eq!(parse_frame(br#"data: {"other":1}"#), FrameOutcome::Empty);
        assert_eq!(parse_frame(br#"data: {"content":""}"#), FrameOutcome::Empty);
        assert_eq!(parse_frame(br#"data: {"content":42}"#), FrameOutcome::Empty);
    }

    #[test]
    fn parse_frame_ignores_other_prefixes() {
        assert_eq!(parse_frame(b"event: ping"), FrameOutcome::Ignored);
        assert_eq!(parse_frame(b": keep-alive"), FrameOutcome::Ignored);
        assert_eq!(parse_frame(br#"data:{"content":"x"}"#), FrameOutcome::Ignored);
        assert_eq!(parse_frame(b""), FrameOutcome::Ignored);
    }

    #[test]
    fn parse_frame_reports_malformed_payloads() {
        assert!(matches!(parse_frame(b"data: {bad"), FrameOutcome::Malformed(_)));
        assert!(matches!(parse_frame(b"data: [DONE]"), FrameOutcome::Malformed(_)));
        assert!(matches!(parse_frame(b"data: \"text\""), FrameOutcome::Malformed(_)));
        assert!(matches!(parse_frame(b"data: \xff\xfe"), FrameOutcome::Malformed(_)));
    }

    #[tokio::test]
    async fn malformed_frame_does_not_stop_the_stream() {
        let out = collect(&["data: {bad\n\ndata: {\"content\":\"ok\"}\n\n"]).await;
        assert_eq!(out, vec!["ok"]);
    }

    #[tokio::test]
    async fn frame_without_content_contributes_nothing() {
        let out = collect(&["data: {\"other\":1}\n\n"]).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn frame_split_inside_json_is_reassembled() {
        let out = collect(&["data: {\"cont", "ent\":\"hi\"}\n", "\n"]).await;
        assert_eq!(out, vec!["hi"]);
    }

    #[tokio::test]
    async fn multibyte_character_split_across_chunks() {
        let body = "data: {\"content\":\"caf\u{e9} \u{1f331}\"}\n\n".as_bytes();
        // Split inside the four-byte emoji.
        let split = body.len() - 6;
        let out = collect_bytes(vec![body[..split].to_vec(), body[split..].to_vec()]).await;
        assert_eq!(out, vec!["caf\u{e9} \u{1f331}"]);
    }

    #[tokio::test]
    async fn unterminated_trailing_frame_is_dropped() {
        let out = collect(&["data: {\"content\":\"a\"}\n\ndata: {\"content\":\"b\"}"]).await;
        assert_eq!(out, vec!["a"]);
    }

    #[tokio::test]
    async fn read_error_yields_error_and_ends() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from_static(b"data: {\"content\":\"partial\"}\n\n")),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
            Ok(Bytes::from_static(b"data: {\"content\":\"never\"}\n\n")),
        ];
        let items: Vec<_> = consume_stream(futures::stream::iter(chunks)).collect().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Ok("partial".to_string()));
        assert_eq!(items[1], Err(StreamError::Read("reset".into())));
    }
}
