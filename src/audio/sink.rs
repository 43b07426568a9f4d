//! Build paused, looping `rodio` sinks from in-memory WAV blobs.

use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, Sink, Source};

/// Create a paused `Sink` that loops `wav` forever.
pub(super) fn create_looping_sink(
    stream: &OutputStream,
    wav: Arc<[u8]>,
) -> Result<Sink, rodio::decoder::DecoderError> {
    let source = Decoder::new(Cursor::new(wav))?.repeat_infinite();

    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    sink.append(source);
    Ok(sink)
}
