//! Pipe — lines from any async byte stream (remote pipe, child stdout).

use async_stream::try_stream;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use super::{map_read_err, LineStream};

/// Wrap a piped byte stream into the shared line-stream shape. The stream
/// ends when the pipe reaches end of file.
pub fn piped_lines<R>(reader: R) -> LineStream
where
    R: AsyncRead + Send + Unpin + 'static,
{
    Box::pin(try_stream! {
        let mut lines = BufReader::new(reader).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => yield line,
                Ok(None) => break,
                Err(e) => Err(map_read_err(e))?,
            }
        }
    })
}
