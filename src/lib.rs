//! # nodebind - Typed Bindings for Node-Graph Hosts
//!
//! **nodebind** bridges a host platform's dynamically registered computation nodes into a
//! statically typed graph-construction API. It does not execute anything itself: it builds,
//! validates and serializes execution requests, submits them to the host over HTTP and polls
//! until they finish.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the host**: Load the host registry (`GET /object_info`, or a saved copy) as a
//!     [`HostRegistry`](definition::HostRegistry) and convert it with
//!     [`IntoDefinition`](definition::IntoDefinition). Any other source works too, as long as
//!     it yields [`NodeDefinition`](definition::NodeDefinition)s.
//! 2.  **Generate**: [`Generator::builder`](generator::Generator::builder) renders one Rust
//!     module with a builder per node type, typed accessors for every slot and a `nodes` tree
//!     grouped by category. Commit the output into your crate.
//! 3.  **Build graphs**: Inside [`Workflow::scope`](graph::Workflow::scope), create builders
//!     with `new_in` and wire them with `scope.connect(out, in)`. Mismatched slot types fail
//!     to compile. When the scope ends every required input is checked.
//! 4.  **Submit**: [`Workflow::submit`](graph::Workflow::submit) blocks until the host reports
//!     completion, [`Workflow::submit_async`](graph::Workflow::submit_async) awaits instead.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nodebind::prelude::*;
//!
//! // Generated module, see `nodebind-cli generate`.
//! mod comfy;
//! use comfy::nodes;
//!
//! fn main() -> Result<()> {
//!     let mut workflow = Workflow::new();
//!     workflow.scope(|scope| {
//!         let ckpt = nodes::loaders::CheckpointLoaderSimple::new_in(scope)
//!             .with_ckpt_name(comfy::types::CheckpointLoaderSimple_ckpt_name::model_safetensors);
//!         let latent = nodes::latent::EmptyLatentImage::new_in(scope);
//!         let sampler = nodes::sampling::KSampler::new_in(scope).with_seed(42);
//!         scope.connect(&ckpt.out_MODEL(), &sampler.in_model())?;
//!         scope.connect(&latent.out_LATENT(), &sampler.in_latent_image())?;
//!         // ...
//!         Ok(())
//!     })?;
//!
//!     let history = workflow.submit(&HostConfig::default())?;
//!     println!("{}", history);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod definition;
pub mod error;
pub mod generator;
pub mod graph;
pub mod prelude;
pub mod types;

#[doc(hidden)]
pub use serde_json;
