//! Fragment streams — decoding of server-sent chat-completion chunks into text pieces.
//!
//! A `FragmentStream` is finite and one-shot: it yields the text deltas of a single
//! generation call in arrival order and ends at `[DONE]` or at end of body.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::BytesMut;
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;

use super::{ApiErrorBody, LlmError};

const DATA_PREFIX: &str = "data:";
const DONE_MARKER: &str = "[DONE]";

#[derive(Debug, Deserialize)]
struct ChatChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    content: Option<String>,
}

#[derive(Debug, PartialEq)]
enum SseEvent {
    Fragment(String),
    Done,
}

/// Line-oriented SSE decoder. Buffers partial lines across network chunks.
#[derive(Default)]
struct SseDecoder {
    buf: BytesMut,
}

impl SseDecoder {
    fn push(&mut self, chunk: &[u8]) -> Result<Vec<SseEvent>, LlmError> {
        self.buf.extend_from_slice(chunk);
        let mut events = Vec::new();
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line = self.buf.split_to(pos + 1);
            if let Some(event) = decode_line(&line)? {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Flushes a trailing line that arrived without a newline.
    fn finish(&mut self) -> Result<Option<SseEvent>, LlmError> {
        if self.buf.is_empty() {
            return Ok(None);
        }
        let line = self.buf.split();
        decode_line(&line)
    }
}

fn decode_line(raw: &[u8]) -> Result<Option<SseEvent>, LlmError> {
    let line = std::str::from_utf8(raw).map_err(|e| LlmError::Stream(e.to_string()))?;
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');

    // Blank separators, comments and non-data fields carry no text.
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Ok(None);
    };
    let payload = payload.trim_start();
    if payload == DONE_MARKER {
        return Ok(Some(SseEvent::Done));
    }

    let chunk: ChatChunk = serde_json::from_str(payload)?;
    // Vendors report failures after the response has started as an in-band event.
    if let Some(error) = chunk.error {
        return Err(LlmError::Stream(error.message));
    }
    let text = chunk
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.delta.content)
        .unwrap_or_default();
    Ok(Some(SseEvent::Fragment(text)))
}

struct SseState {
    body: Pin<Box<dyn Stream<Item = Result<bytes::Bytes, LlmError>> + Send>>,
    decoder: SseDecoder,
    pending: VecDeque<String>,
    finished: bool,
}

/// Ordered, one-shot sequence of generated text pieces.
pub struct FragmentStream {
    inner: Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>,
}

impl FragmentStream {
    /// Wraps a raw SSE byte stream (e.g. `reqwest::Response::bytes_stream`).
    pub fn from_sse<S, E>(body: S) -> Self
    where
        S: Stream<Item = Result<bytes::Bytes, E>> + Send + 'static,
        E: Into<LlmError>,
    {
        let state = SseState {
            body: Box::pin(body.map(|r| r.map_err(Into::into))),
            decoder: SseDecoder::default(),
            pending: VecDeque::new(),
            finished: false,
        };

        let inner = stream::unfold(state, |mut st| async move {
            loop {
                if let Some(fragment) = st.pending.pop_front() {
                    return Some((Ok(fragment), st));
                }
                if st.finished {
                    return None;
                }
                match st.body.next().await {
                    Some(Ok(chunk)) => match st.decoder.push(&chunk) {
                        Ok(events) => st.enqueue(events),
                        Err(e) => {
                            st.finished = true;
                            return Some((Err(e), st));
                        }
                    },
                    Some(Err(e)) => {
                        st.finished = true;
                        return Some((Err(e), st));
                    }
                    None => {
                        st.finished = true;
                        match st.decoder.finish() {
                            Ok(event) => st.enqueue(event),
                            Err(e) => return Some((Err(e), st)),
                        }
                    }
                }
            }
        });

        Self {
            inner: Box::pin(inner),
        }
    }

    /// A stream over already-known fragments.
    #[cfg(test)]
    pub fn from_fragments<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: Send + 'static,
    {
        Self {
            inner: Box::pin(stream::iter(fragments.into_iter().map(Ok))),
        }
    }
}

impl SseState {
    fn enqueue(&mut self, events: impl IntoIterator<Item = SseEvent>) {
        for event in events {
            match event {
                SseEvent::Fragment(text) => self.pending.push_back(text),
                SseEvent::Done => {
                    self.finished = true;
                    break;
                }
            }
        }
    }
}

impl Stream for FragmentStream {
    type Item = Result<String, LlmError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Drains the stream, concatenating fragments in arrival order.
pub async fn collect_fragments(mut fragments: FragmentStream) -> Result<String, LlmError> {
    let mut text = String::new();
    while let Some(fragment) = fragments.next().await {
        text.push_str(&fragment?);
    }
    Ok(text)
}
