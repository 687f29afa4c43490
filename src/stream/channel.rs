//! Channel-backed sources
//!
//! The only place a pipeline blocks: `next` waits on the receiver until an
//! element arrives or every sender has been dropped. The pipeline cannot tell
//! a producer to stop, so a consumer that stops early (after `take` or a
//! short-circuiting `find`) leaves the producer responsible for not blocking
//! forever. [`Feeder::send`] reports a dropped consumer as an error for that
//! reason.
//!
//! The tokio receivers use `blocking_recv`, which panics when called from
//! inside an async runtime. Drain tokio-backed streams from a plain thread
//! or `spawn_blocking`.

use super::core::Stream;
use super::core::Source;
use crate::error::StreamResult;
use crate::stream_configuration::StreamConfig;
use tokio::sync::mpsc;

/// Receivers that can block the calling thread until a value or closure
pub trait BlockingRecv {
    type Item;

    /// Wait for the next value, `None` once the channel is closed and empty
    fn recv_blocking(&mut self) -> Option<Self::Item>;
}

impl<T> BlockingRecv for std::sync::mpsc::Receiver<T> {
    type Item = T;

    fn recv_blocking(&mut self) -> Option<T> {
        self.recv().ok()
    }
}

impl<T> BlockingRecv for mpsc::Receiver<T> {
    type Item = T;

    fn recv_blocking(&mut self) -> Option<T> {
        self.blocking_recv()
    }
}

impl<T> BlockingRecv for mpsc::UnboundedReceiver<T> {
    type Item = T;

    fn recv_blocking(&mut self) -> Option<T> {
        self.blocking_recv()
    }
}

pub struct ChannelSource<R: BlockingRecv> {
    // dropped as soon as the channel reports closure
    receiver: Option<R>,
    current: Option<R::Item>,
    received: usize,
}

impl<R: BlockingRecv> ChannelSource<R> {
    pub fn new(receiver: R) -> Self {
        Self {
            receiver: Some(receiver),
            current: None,
            received: 0,
        }
    }
}

impl<R: BlockingRecv> Source for ChannelSource<R> {
    type Item = R::Item;

    fn next(&mut self) -> bool {
        let Some(receiver) = self.receiver.as_mut() else {
            return false;
        };
        self.current = receiver.recv_blocking();
        if self.current.is_some() {
            self.received += 1;
            return true;
        }
        log::debug!("Channel source closed after {} elements", self.received);
        self.receiver = None;
        false
    }

    fn get(&mut self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        self.current.take()
    }
}

/// Build a stream that pulls from a channel receiver
pub fn from_channel<R: BlockingRecv>(receiver: R) -> Stream<ChannelSource<R>> {
    Stream::new(ChannelSource::new(receiver))
}

/// Producer half of a channel-backed stream
#[derive(Debug)]
pub struct Feeder<T> {
    sender: mpsc::Sender<T>,
}

impl<T> Clone for Feeder<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> Feeder<T> {
    /// Send an element, blocking while the channel is full.
    ///
    /// Fails with [`StreamError::ChannelClosed`](crate::StreamError::ChannelClosed)
    /// once the stream has been dropped. Must not be called from inside an
    /// async runtime.
    pub fn send(&self, item: T) -> StreamResult<()> {
        self.sender.blocking_send(item)?;
        log::trace!("Fed element into channel stream");
        Ok(())
    }

    /// Close this handle. The stream ends once every feeder is closed or
    /// dropped and the buffered elements are drained.
    pub fn close(self) {
        drop(self);
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Create a bounded channel and the stream draining it
pub fn channel<T>(
    capacity: usize,
) -> StreamResult<(Feeder<T>, Stream<ChannelSource<mpsc::Receiver<T>>>)> {
    channel_with(StreamConfig::default().channel_capacity(capacity))
}

/// Like [`channel`], with capacity and logging taken from `config`
pub fn channel_with<T>(
    config: StreamConfig,
) -> StreamResult<(Feeder<T>, Stream<ChannelSource<mpsc::Receiver<T>>>)> {
    config.validate()?;
    let (sender, receiver) = mpsc::channel(config.channel_capacity);
    log::debug!(
        "Created channel stream '{}' with capacity {}",
        config.name,
        config.channel_capacity
    );
    Ok((
        Feeder { sender },
        from_channel(receiver).with_config(config),
    ))
}
