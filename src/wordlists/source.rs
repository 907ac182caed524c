//! Streaming word list reader
//!
//! A producer thread reads the word list line by line and hands normalized
//! candidates to the consumer over a rendezvous channel, so scoring starts
//! before the whole file is read and at most one candidate is in flight.

use crate::core::Candidate;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Lazy, single-pass sequence of candidates read from a word list
///
/// Candidates arrive in file order. The underlying reader is owned by the
/// producer thread and is closed once the sequence ends; a second pass needs
/// a fresh [`LineSource::open`].
#[derive(Debug)]
pub struct LineSource {
    receiver: Receiver<Candidate>,
    producer: Option<JoinHandle<()>>,
}

impl LineSource {
    /// Open a word list file and start streaming its candidates
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file does not exist or cannot be read,
    /// and [`Error::Spawn`] if the reader thread cannot be started.
    ///
    /// # Examples
    /// ```no_run
    /// use dicrank::wordlists::LineSource;
    ///
    /// let source = LineSource::open("en_GB.dic").unwrap();
    /// for candidate in source {
    ///     println!("{candidate}");
    /// }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "opened word list");
        Self::from_reader(BufReader::new(file))
    }

    /// Stream candidates from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] if the reader thread cannot be started.
    pub fn from_reader<R>(reader: R) -> Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (sender, receiver) = mpsc::sync_channel(0);
        let producer = thread::Builder::new()
            .name("wordlist-reader".into())
            .spawn(move || produce(reader, &sender))
            .map_err(Error::Spawn)?;

        Ok(Self {
            receiver,
            producer: Some(producer),
        })
    }

    fn finish(&mut self) {
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                warn!("word list reader panicked");
            }
        }
    }
}

impl Iterator for LineSource {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if let Ok(candidate) = self.receiver.recv() {
            Some(candidate)
        } else {
            // Sender dropped: the producer is done and has released the reader
            self.finish();
            None
        }
    }
}

impl FusedIterator for LineSource {}

/// Producer loop: one candidate per line until EOF, a read error, or the
/// consumer hanging up
fn produce<R: BufRead>(mut reader: R, sender: &SyncSender<Candidate>) {
    let mut buf = Vec::new();
    let mut lines = 0_usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(trim_line_ending(&buf));
                if sender.send(Candidate::normalize(&line)).is_err() {
                    debug!(lines, "consumer hung up, stopping word list reader");
                    return;
                }
                lines += 1;
            }
            Err(err) => {
                warn!(error = %err, lines, "read error, ending word list early");
                break;
            }
        }
    }

    debug!(lines, "word list exhausted");
}

/// Strip one trailing `\n` and then one trailing `\r`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::NamedTempFile;

    /// Serves a large word list in small chunks, counting the bytes handed out
    struct Metered {
        data: Vec<u8>,
        pos: usize,
        served: Arc<AtomicUsize>,
    }

    impl Read for Metered {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let end = (self.pos + 64).min(self.data.len());
            let n = (end - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            self.served.fetch_add(n, Ordering::SeqCst);
            Ok(n)
        }
    }

    fn texts(source: LineSource) -> Vec<String> {
        source.map(Candidate::into_text).collect()
    }

    fn from_bytes(bytes: &[u8]) -> LineSource {
        LineSource::from_reader(Cursor::new(bytes.to_vec())).unwrap()
    }

    #[test]
    fn streams_candidates_in_file_order() {
        let source = from_bytes(b"heterozygous/X\ncat\ndog\n");
        assert_eq!(texts(source), ["heterozygous", "cat", "dog"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        assert_eq!(texts(from_bytes(b"cat\ndog")), ["cat", "dog"]);
    }

    #[test]
    fn empty_lines_become_empty_candidates() {
        assert_eq!(texts(from_bytes(b"cat\n\ndog\n")), ["cat", "", "dog"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(texts(from_bytes(b"")).is_empty());
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        assert_eq!(texts(from_bytes(b"Cat\r\ndog/S\r\n")), ["cat", "dog"]);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let source = from_bytes(b"ca\xfft\ndog\n");
        assert_eq!(texts(source), ["ca\u{fffd}t", "dog"]);
    }

    #[test]
    fn iterator_is_fused() {
        let mut source = from_bytes(b"cat\n");
        assert_eq!(source.next().map(Candidate::into_text).as_deref(), Some("cat"));
        assert!(source.next().is_none());
        assert!(source.next().is_none());
    }

    #[test]
    fn dropping_early_stops_producer() {
        let lines: String = (0..1000).map(|i| format!("word{i}\n")).collect();
        let mut source = from_bytes(lines.as_bytes());
        assert_eq!(source.next().map(Candidate::into_text).as_deref(), Some("word0"));
        drop(source);
    }

    #[test]
    fn candidates_arrive_before_input_is_read() {
        let data: Vec<u8> = (0..100_000)
            .flat_map(|i| format!("word{i:06}\n").into_bytes())
            .collect();
        let total = data.len();
        let served = Arc::new(AtomicUsize::new(0));
        let reader = Metered {
            data,
            pos: 0,
            served: Arc::clone(&served),
        };

        let mut source = LineSource::from_reader(BufReader::new(reader)).unwrap();
        assert_eq!(
            source.next().map(Candidate::into_text).as_deref(),
            Some("word000000")
        );

        // The producer stays parked on the next handoff instead of reading ahead
        thread::sleep(Duration::from_millis(50));
        assert!(served.load(Ordering::SeqCst) <= 256);

        assert_eq!(source.count(), 99_999);
        assert_eq!(served.load(Ordering::SeqCst), total);
    }

    #[test]
    fn read_error_ends_sequence() {
        struct Failing(usize);

        impl Read for Failing {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.0 == 0 {
                    return Err(std::io::Error::other("disk on fire"));
                }
                self.0 -= 1;
                let line = b"cat\n";
                buf[..line.len()].copy_from_slice(line);
                Ok(line.len())
            }
        }

        let source = LineSource::from_reader(BufReader::new(Failing(2))).unwrap();
        assert_eq!(texts(source), ["cat", "cat"]);
    }

    #[test]
    fn open_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Heterozygous/X\ncat\ndog\n").unwrap();

        let source = LineSource::open(file.path()).unwrap();
        assert_eq!(texts(source), ["heterozygous", "cat", "dog"]);
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.dic");

        let err = LineSource::open(&missing).unwrap_err();
        assert!(matches!(err, Error::Open { ref path, .. } if *path == missing));
    }

    #[test]
    fn trim_line_ending_variants() {
        assert_eq!(trim_line_ending(b"cat\r\n"), b"cat");
        assert_eq!(trim_line_ending(b"cat\n"), b"cat");
        assert_eq!(trim_line_ending(b"cat"), b"cat");
        assert_eq!(trim_line_ending(b"cat\r"), b"cat");
        assert_eq!(trim_line_ending(b"\n"), b"");
    }
}
