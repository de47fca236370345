//! Native messaging transport.
//!
//! Each message is a 32-bit little-endian length followed by that many bytes
//! of UTF-8 JSON, in both directions.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::host::event::{Directive, HostEvent};
use crate::host::runtime::Runtime;
use crate::host::HostError;

/// Largest frame produced or accepted (1 MiB).
///
/// The browser refuses host-to-browser messages above this size. Incoming
/// frames are held to the same cap.
pub const MAX_FRAME_LEN: usize = 1024 * 1024;

/// Read one frame. Returns `None` when the stream ends before a new header.
///
/// A stream that ends partway through a header or payload is an I/O error.
pub async fn read_frame<R>(reader: &mut R) -> Result<Option<Vec<u8>>, HostError>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; 4];
    let mut filled = 0;
    while filled < header.len() {
        let n = reader.read(&mut header[filled..]).await?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("stream ended after {filled} of 4 header bytes"),
            )
            .into());
        }
        filled += n;
    }

    let len = u32::from_le_bytes(header) as usize;
    if len > MAX_FRAME_LEN {
        return Err(HostError::FrameTooLarge { len, max: MAX_FRAME_LEN });
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;
    Ok(Some(payload))
}

/// Write one frame and flush it. Nothing is written for an oversized payload.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> Result<(), HostError>
where
    W: AsyncWrite + Unpin,
{
    if payload.len() > MAX_FRAME_LEN {
        return Err(HostError::FrameTooLarge {
            len: payload.len(),
            max: MAX_FRAME_LEN,
        });
    }
    writer.write_all(&(payload.len() as u32).to_le_bytes()).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn write_directive<W>(writer: &mut W, directive: &Directive) -> Result<(), HostError>
where
    W: AsyncWrite + Unpin,
{
    let payload = serde_json::to_vec(directive)?;
    write_frame(writer, &payload).await
}

/// Shorten a suggestion list so the encoded directive fits in one frame.
///
/// Suggestions keep their order; the tail is dropped. Other directives are
/// left unchanged.
pub fn fit_to_frame(directive: &mut Directive) -> Result<(), HostError> {
    let Directive::Suggest { suggestions } = directive else {
        return Ok(());
    };

    let mut used = serde_json::to_vec(&Directive::Suggest {
        suggestions: Vec::new(),
    })?
    .len();
    let mut keep = 0;
    for suggestion in suggestions.iter() {
        // Element plus its separating comma.
        let len = serde_json::to_vec(suggestion)?.len() + 1;
        if used + len > MAX_FRAME_LEN {
            break;
        }
        used += len;
        keep += 1;
    }

    if keep < suggestions.len() {
        tracing::warn!(
            total = suggestions.len(),
            kept = keep,
            "Suggestion list truncated to fit a frame"
        );
        suggestions.truncate(keep);
    }
    Ok(())
}

/// Totals for one serve session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub events: u64,
    pub malformed: u64,
    pub directives: u64,
    /// Directives that could not be encoded into a frame.
    pub dropped: u64,
}

/// Serve events from `reader` until end of stream, writing directives to `writer`.
///
/// Only I/O failures end the session.
pub async fn serve<R, W>(runtime: &mut Runtime, mut reader: R, mut writer: W) -> Result<SessionStats, HostError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = SessionStats::default();

    while let Some(frame) = read_frame(&mut reader).await? {
        let event: HostEvent = match serde_json::from_slice(&frame) {
            Ok(event) => event,
            Err(e) => {
                stats.malformed += 1;
                tracing::warn!(error = %e, len = frame.len(), "Skipping malformed host message");
                continue;
            }
        };
        stats.events += 1;

        for mut directive in runtime.dispatch(event) {
            let written = match fit_to_frame(&mut directive) {
                Ok(()) => write_directive(&mut writer, &directive).await,
                Err(e) => Err(e),
            };
            match written {
                Ok(()) => stats.directives += 1,
                Err(HostError::Io(e)) => return Err(HostError::Io(e)),
                Err(e) => {
                    stats.dropped += 1;
                    tracing::warn!(directive = directive.kind(), error = %e, "Dropping directive");
                }
            }
        }
    }

    tracing::info!(
        events = stats.events,
        malformed = stats.malformed,
        directives = stats.directives,
        dropped = stats.dropped,
        "Host channel closed"
    );
    Ok(stats)
}
