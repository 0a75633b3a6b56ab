use crate::error::AppError;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

/// Abstract producer of newline-terminated status lines.
///
/// The display pulls exactly one line per readiness event; the event itself
/// is the `next_line` future resolving inside the event loop. Keeping the
/// source abstract lets tests and the demo feed inject lines without a real
/// OS input stream.
#[allow(async_fn_in_trait)] // consumed within the crate's single-task event loop
pub trait LineSource {
    /// Pulls the next line, with the terminator already stripped.
    /// Resolves to `Ok(None)` when the stream has ended.
    async fn next_line(&mut self) -> Result<Option<String>, AppError>;
}

/// Line source backed by the process's standard input.
pub struct StdinLineSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinLineSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLineSource {
    async fn next_line(&mut self) -> Result<Option<String>, AppError> {
        Ok(self.lines.next_line().await?)
    }
}

/// Line source backed by an in-process channel.
///
/// Used by the demo feed and by tests; the stream ends when every sender
/// has been dropped.
pub struct ChannelLineSource {
    rx: mpsc::UnboundedReceiver<String>,
}

impl ChannelLineSource {
    /// Creates the source together with the sending half that feeds it.
    pub fn new() -> (Self, mpsc::UnboundedSender<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, tx)
    }
}

impl LineSource for ChannelLineSource {
    async fn next_line(&mut self) -> Result<Option<String>, AppError> {
        Ok(self.rx.recv().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_source_delivers_lines_in_order() {
        let (mut source, tx) = ChannelLineSource::new();
        tx.send("Starting".to_string()).unwrap();
        tx.send(String::new()).unwrap();
        tx.send("42".to_string()).unwrap();

        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("Starting"));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_channel_source_ends_when_sender_dropped() {
        let (mut source, tx) = ChannelLineSource::new();
        tx.send("last".to_string()).unwrap();
        drop(tx);

        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(source.next_line().await.unwrap(), None);
    }
}
