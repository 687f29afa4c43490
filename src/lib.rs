//! Lazy, pull-based sequence pipelines.
//!
//! ```
//! use pullstream::from_vec;
//!
//! let shouted: Vec<String> = from_vec(vec!["a", "bb", "c", "ddd", "e"])
//!     .filter(|name| name.len() == 1)
//!     .map(|name| format!("{}!", name))
//!     .collect();
//! assert_eq!(shouted, vec!["a!", "c!", "e!"]);
//! ```

pub mod error;
pub mod stream;
pub mod stream_configuration;

pub use error::{StreamError, StreamResult};
pub use stream::{
    absent, channel, channel_with, empty, from_channel, from_iter, from_slice, from_source,
    from_vec, BlockingRecv, Collector, Feeder, Indexed, Source, Stream, NOT_FOUND,
};
pub use stream_configuration::StreamConfig;
