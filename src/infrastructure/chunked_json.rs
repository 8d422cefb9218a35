// Chunked JSON streaming utilities
use crate::application::streaming_service::StreamMessage;
use async_compression::tokio::bufread::BrotliEncoder;
use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::Stream;
use tokio::io::AsyncReadExt;
use tokio_stream::wrappers::ReceiverStream;

pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";
pub const FRAMED_BROTLI_CONTENT_TYPE: &str = "application/x-ndjson-br-framed";

/// Create a chunked streaming response: one JSON line per message,
/// or length-prefixed Brotli frames when `compress` is set
pub async fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = StreamMessage> + Send + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_chunk(msg, compress).await });

    let body = Body::from_stream(byte_stream);

    // Frames are compressed individually, so no Content-Encoding on the response itself
    let content_type = if compress {
        FRAMED_BROTLI_CONTENT_TYPE
    } else {
        NDJSON_CONTENT_TYPE
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, "no-cache")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn serialize_chunk(msg: StreamMessage, compress: bool) -> Result<Bytes, std::io::Error> {
    let mut line = serde_json::to_vec(&msg).map_err(std::io::Error::other)?;
    line.push(b'\n');

    if !compress {
        return Ok(Bytes::from(line));
    }

    let mut encoder = BrotliEncoder::new(std::io::Cursor::new(line));
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;

    // 4-byte big-endian length, then the frame
    let mut chunk = BytesMut::with_capacity(4 + compressed.len());
    chunk.put_u32(compressed.len() as u32);
    chunk.put_slice(&compressed);

    Ok(chunk.freeze())
}

/// Helper to create a streaming response from a receiver
pub async fn stream_from_receiver(
    rx: tokio::sync::mpsc::Receiver<StreamMessage>,
    compress: bool,
) -> impl IntoResponse {
    match chunked_json_stream(ReceiverStream::new(rx), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flight::FlightStatus;

    fn status_message() -> StreamMessage {
        StreamMessage::Status {
            seq: 1,
            status: FlightStatus::TakingOff,
            text: FlightStatus::TakingOff.display_line(),
        }
    }

    #[tokio::test]
    async fn test_plain_chunk_is_json_line() {
        let chunk = serialize_chunk(status_message(), false).await.unwrap();
        let text = std::str::from_utf8(&chunk).unwrap();
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["type"], "status");
        assert_eq!(value["status"], "taking_off");
        assert_eq!(value["text"], "Drone Status: Taking off");
    }

    #[tokio::test]
    async fn test_compressed_chunk_is_length_prefixed() {
        let chunk = serialize_chunk(status_message(), true).await.unwrap();
        let length = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize;
        assert_eq!(length, chunk.len() - 4);
    }
}
