//! lf-network: network model layer for loopflow.
//!
//! Provides:
//! - Core network data structures (Pipe, LoopPath, Network)
//! - Incremental network builder with validation
//! - Serde document schema + YAML/JSON loading
//!
//! # Example
//!
//! ```
//! use lf_network::{NetworkBuilder, Orientation};
//!
//! let mut builder = NetworkBuilder::new();
//! let p1 = builder.add_pipe("main", 2.0);
//! let p2 = builder.add_pipe("return", 3.0);
//! builder.add_loop([(p1, Orientation::Aligned), (p2, Orientation::Opposed)]);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.pipe_count(), 2);
//! assert_eq!(network.loop_count(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod network;
pub mod schema;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{NetworkBuilder, Orientation};
pub use error::{NetworkError, NetworkResult};
pub use network::{LoopPath, Network, Pipe};
pub use schema::{NetworkDoc, load_json, load_yaml, save_yaml};
