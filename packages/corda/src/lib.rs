//! Corda REST - parameter-driven adapter for R3 Corda node REST gateways
//!
//! A host hands over a batch of records plus named parameters. The adapter picks a
//! resource and an operation, turns each record into one HTTP request against the
//! gateway and returns one output record per input record.
//!
//! ## Resources
//!
//! | Resource | Default operation | Operations |
//! |----------|-------------------|------------|
//! | `vaultQueries` | `queryVaultStates` | vault state and transaction queries |
//! | `flowExecution` | `startFlow` | start, track, inspect and kill flows |
//! | `tokenManagement` | `issueTokens` | issue, move, redeem and query tokens |
//! | `networkMap` | `getNetworkNodes` | nodes, parties and notaries |
//! | `attachments` | `uploadAttachment` | upload, download, verify and delete attachments |
//!
//! Every operation is a row in [`operations`]; [`builder`] interprets a row into a
//! [`RequestDescriptor`] and a [`Transport`] sends it.

pub mod builder;
pub mod config;
pub mod credentials;
pub mod description;
pub mod error;
pub mod executor;
pub mod node;
pub mod operations;
pub mod parameters;
pub mod request;
pub mod transport;
pub mod types;

pub use config::AdapterConfig;
pub use credentials::{CredentialResolver, Credentials, EnvCredentials};
pub use description::{NodeDescription, node_description};
pub use error::{CordaError, CordaResult, ErrorKind};
pub use executor::{ExecutionContext, ResourceExecutor};
pub use node::CordaNode;
pub use parameters::{ItemParameters, ParameterSource, StaticParameters};
pub use request::{HttpMethod, RequestBody, RequestDescriptor};
pub use transport::{HttpTransport, ResponseBody, Transport, TransportError};
pub use types::{BinaryData, OutputRecord, PairedItem, Resource};
