//! Transcript adapters - implementations of the [`TranscriptSink`](crate::ports::TranscriptSink) port.

mod csv_transcript_sink;

pub use csv_transcript_sink::CsvTranscriptSink;
