//! Lazy pull-based pipelines
//!
//! A pipeline starts from a [`Source`], is extended with operators on
//! [`Stream`], and runs only when a terminal operation drives a
//! [`Collector`] over it.

pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;
pub mod channel;
pub mod collector;

// Re-export core types
pub use self::core::{Filter, Map, MapIndexed, OnEach, Skip, Source, Stream, Take};

// Re-export constructors
pub use self::constructors::{
    absent, empty, from_iter, from_slice, from_source, from_vec, Empty, IterSource, SliceSource,
};

// Re-export stateful stages
pub use self::advanced::{DistinctBy, FlatMapConcat, Scan, Zip, ZipWith, ZipWithPrev};

// Re-export utility stages
pub use self::utility::{BoxSource, Indexed, IntoIter, WithIndex};

// Re-export channel sources
pub use self::channel::{channel, channel_with, from_channel, BlockingRecv, ChannelSource, Feeder};

// Re-export terminal collectors
pub use self::collector::{
    All, Any, Collect, Collector, Count, Find, FindIndex, FindLast, FindLastIndex, ForEach,
    ForEachIndexed, Reduce, NOT_FOUND,
};
