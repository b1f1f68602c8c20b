#![allow(clippy::doc_markdown)] // Allow technical terms like WS-Man, OBM in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # BIOS Configuration Task
//!
//! Workflow task that applies BIOS configuration (attributes, boot order, HDD
//! order, boot device enable/disable lists) to a Dell server by delegating to
//! the SCP configuration microservice over HTTP.
//!
//! ## Overview
//!
//! One task instance runs one sequential pipeline:
//!
//! 1. resolve the service topology (fails fast when it is not configured),
//! 2. look up the target node; non-compute nodes finish early as a success,
//! 3. fetch the node's WS-Man OBM credentials,
//! 4. POST the updateComponents request and check the `status` in its body,
//! 5. optionally discard the staged configuration file,
//! 6. report exactly one terminal outcome to the host.
//!
//! ## Module Organization
//!
//! - [`config`] - Service topology loading and resolution
//! - [`eligibility`] - Node class check and OBM credential lookup
//! - [`invoker`] - updateComponents request and response handling
//! - [`transport`] - HTTP transport contract and `reqwest` implementation
//! - [`services`] - Datastore and encryption contracts
//! - [`state_machine`] - Task lifecycle states
//! - [`task`] - Task controller, completion reporting, cleanup
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bios_config_task::config::ConfigManager;
//! use bios_config_task::models::{ConfigureBiosOptions, TaskContext};
//! use bios_config_task::services::{Encryption, InMemoryNodeStore};
//! use bios_config_task::task::{
//!     ConfigureBiosTask, LoggingCompletion, TaskLifecycle, TaskServices, TokioFileCleaner,
//! };
//! use bios_config_task::transport::ReqwestTransport;
//!
//! struct Plaintext;
//! impl Encryption for Plaintext {
//!     fn decrypt(&self, ciphertext: &str) -> bios_config_task::Result<String> {
//!         Ok(ciphertext.to_string())
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let services = TaskServices {
//!     configuration: ConfigManager::load()?.resolver(),
//!     store: Arc::new(InMemoryNodeStore::new()),
//!     transport: Arc::new(ReqwestTransport::new()?),
//!     encryption: Arc::new(Plaintext),
//!     cleaner: Arc::new(TokioFileCleaner),
//!     completion: Arc::new(LoggingCompletion),
//! };
//!
//! let options: ConfigureBiosOptions = serde_json::from_str(
//!     r#"{"serverIP":"10.240.19.130","shareAddress":"10.240.19.10"}"#,
//! )?;
//! let task = ConfigureBiosTask::new(options, TaskContext::new("node-1"), services);
//! let outcome = task.run().await;
//! println!("success: {}", outcome.is_success());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod eligibility;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod models;
pub mod services;
pub mod state_machine;
pub mod task;
pub mod transport;

pub use config::{ConfigurationResolver, ServiceTopology, SmiConfig};
pub use eligibility::{Eligibility, EligibilityResolver};
pub use error::{BiosTaskError, Result};
pub use invoker::{RemoteConfigurationInvoker, RemoteResponse, UpdateComponentsRequest};
pub use state_machine::{TaskEvent, TaskState, TaskStateMachine};
pub use task::{ConfigureBiosTask, TaskLifecycle, TaskOutcome, TaskServices};
