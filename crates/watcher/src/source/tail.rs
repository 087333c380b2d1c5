//! Tail — follow a growing server.log on the local filesystem.

use std::io::SeekFrom;
use std::path::PathBuf;
use std::time::Duration;

use async_stream::try_stream;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tracing::{debug, warn};

use super::{map_read_err, LineStream, SourceError};

/// Follow `path`, yielding complete lines as they are appended.
///
/// With `from_start` the existing content is replayed first; otherwise
/// reading begins at the current end of file. A partial line at end of
/// file is carried until its terminator arrives. A shrinking file
/// (rotation or truncation) restarts the tail at offset zero.
pub fn tail_file(path: PathBuf, from_start: bool, poll_interval: Duration) -> LineStream {
    Box::pin(try_stream! {
        let file = open(&path).await?;
        let mut reader = BufReader::new(file);
        let mut pos = if from_start {
            0
        } else {
            reader.seek(SeekFrom::End(0)).await.map_err(SourceError::Read)?
        };
        debug!(path = %path.display(), pos, "tailing log file");

        let mut pending = String::new();
        let mut chunk = String::new();
        loop {
            chunk.clear();
            let n = reader.read_line(&mut chunk).await.map_err(map_read_err)?;
            if n == 0 {
                let len = tokio::fs::metadata(&path)
                    .await
                    .map_err(SourceError::Read)?
                    .len();
                if len < pos {
                    warn!(path = %path.display(), "log file shrank, restarting tail from the beginning");
                    reader = BufReader::new(open(&path).await?);
                    pos = 0;
                    pending.clear();
                }
                tokio::time::sleep(poll_interval).await;
                continue;
            }

            pos += n as u64;
            pending.push_str(&chunk);
            if pending.ends_with('\n') {
                let line = pending
                    .trim_end_matches('\n')
                    .trim_end_matches('\r')
                    .to_string();
                pending.clear();
                yield line;
            }
            // no terminator yet: the writer is mid-line, keep the carry
        }
    })
}

async fn open(path: &PathBuf) -> Result<File, SourceError> {
    File::open(path).await.map_err(|source| SourceError::Open {
        path: path.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_stream::StreamExt;

    const POLL: Duration = Duration::from_millis(10);

    async fn next_line(stream: &mut LineStream) -> String {
        tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("timed out waiting for a line")
            .expect("stream ended")
            .expect("stream errored")
    }

    #[tokio::test]
    async fn test_from_start_replays_existing_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();
        file.flush().unwrap();

        let mut stream = tail_file(file.path().to_path_buf(), true, POLL);
        assert_eq!(next_line(&mut stream).await, "first");
        assert_eq!(next_line(&mut stream).await, "second");
    }

    #[tokio::test]
    async fn test_appended_lines_are_picked_up() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "old").unwrap();
        file.flush().unwrap();

        let mut stream = tail_file(file.path().to_path_buf(), true, POLL);
        assert_eq!(next_line(&mut stream).await, "old");

        writeln!(file, "new").unwrap();
        file.flush().unwrap();
        assert_eq!(next_line(&mut stream).await, "new");
    }

    #[tokio::test]
    async fn test_crlf_terminators_are_stripped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "windows line\r\n").unwrap();
        file.flush().unwrap();

        let mut stream = tail_file(file.path().to_path_buf(), true, POLL);
        assert_eq!(next_line(&mut stream).await, "windows line");
    }

    #[tokio::test]
    async fn test_partial_line_waits_for_terminator() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "incomp").unwrap();
        file.flush().unwrap();

        let mut stream = tail_file(file.path().to_path_buf(), true, POLL);

        // finish the line after the tail has already seen the fragment
        let path = file.path().to_path_buf();
        let writer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let mut f = std::fs::OpenOptions::new().append(true).open(path).unwrap();
            writeln!(f, "lete").unwrap();
        });

        assert_eq!(next_line(&mut stream).await, "incomplete");
        writer.await.unwrap();
    }

    #[tokio::test]
    async fn test_truncated_file_restarts_from_beginning() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a rather long first line").unwrap();
        file.flush().unwrap();

        let mut stream = tail_file(file.path().to_path_buf(), true, POLL);
        assert_eq!(next_line(&mut stream).await, "a rather long first line");

        // rotate: replace with a strictly shorter file
        let mut f = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(file.path())
            .unwrap();
        writeln!(f, "x").unwrap();
        f.flush().unwrap();

        assert_eq!(next_line(&mut stream).await, "x");
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_open_error() {
        let mut stream = tail_file(PathBuf::from("/nonexistent/server.log"), true, POLL);
        let result = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("timed out")
            .expect("stream ended");
        assert!(matches!(result, Err(SourceError::Open { .. })));
    }
}
