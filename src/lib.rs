// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # gdwg
//!
//! A generic directed weighted multigraph. Nodes are identified by value, edges by
//! their `(source, destination, weight)` triple, and everything the graph hands
//! back comes out in a canonical ascending order.
//!
//! ## Features
//!
//! - **Value-identified nodes** - no handles or indices, a node is its value
//! - **Multigraph edges** - parallel edges with different weights, and self-loops
//! - **Canonical ordering** - nodes, weights, connections and edges are sorted
//! - **Structural rewiring** - replace or merge nodes while keeping their edges
//! - **Stable cursors** - erase edges while walking the edge sequence
//! - **Deterministic rendering** - a fixed [`Display`](std::fmt::Display) format
//!
//! ## Quick Start
//!
//! ```rust
//! use gdwg::prelude::*;
//!
//! let mut graph: WeightedGraph<String, i32> = WeightedGraph::new();
//! graph.insert_node("hello".to_string());
//! graph.insert_node("how".to_string());
//! graph.insert_node("are".to_string());
//! graph.insert_node("you?".to_string());
//!
//! graph.insert_edge(&"hello".to_string(), &"how".to_string(), 5)?;
//! graph.insert_edge(&"hello".to_string(), &"are".to_string(), 8)?;
//! graph.insert_edge(&"hello".to_string(), &"are".to_string(), 2)?;
//! graph.insert_edge(&"how".to_string(), &"you?".to_string(), 1)?;
//! graph.insert_edge(&"how".to_string(), &"hello".to_string(), 4)?;
//! graph.insert_edge(&"are".to_string(), &"you?".to_string(), 3)?;
//!
//! let expected = "\
//! are (
//!   you? | 3
//! )
//! hello (
//!   are | 2
//!   are | 8
//!   how | 5
//! )
//! how (
//!   hello | 4
//!   you? | 1
//! )
//! you? (
//! )
//! ";
//! assert_eq!(graph.to_string(), expected);
//! # Ok::<(), gdwg::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Operations that reference nodes outside the graph return [`Error`] through
//! [`Result`]. Everything else that may or may not have an effect, such as
//! inserting a node twice, reports through a `bool`. A failed operation never
//! modifies the graph.
//!
//! ## Logging
//!
//! Mutations emit [`tracing`] events: `debug` for structural changes touching
//! many edges and for rejected calls, `trace` for single-edge changes. Enable the
//! `strip_debug_logging` feature to compile these out of release builds.
//!
//! ## Thread Safety
//!
//! [`WeightedGraph`] is [`Send`] and [`Sync`] whenever its node and weight types
//! are. It carries no internal locking.

mod error;

/// Directed weighted multigraph types
pub mod graph;

/// Convenient re-exports of the most commonly used types
pub mod prelude;

/// `gdwg` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use gdwg::{Result, WeightedGraph};
///
/// fn link(graph: &mut WeightedGraph<i32, i32>) -> Result<bool> {
///     graph.insert_edge(&1, &2, 10)
/// }
///
/// let mut graph = WeightedGraph::from_nodes([1, 2]);
/// assert_eq!(link(&mut graph), Ok(true));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `gdwg` Error type
///
/// The error type for all fallible graph operations. See [`Error`] for the
/// individual variants and their fixed messages.
pub use error::Error;

/// The directed weighted multigraph.
///
/// See [`graph::WeightedGraph`] for the full API.
pub use graph::WeightedGraph;

pub use graph::{Edge, EdgeCursor, EdgeRef, Edges};
