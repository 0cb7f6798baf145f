// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Google Cloud Client Libraries for Rust - Cloud Resource Manager API
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains a hand-written client for the [Folder] resource of the
//! Cloud Resource Manager API. A [Folder][model::Folder] is a local, mutable
//! mirror of the remote resource: each operation performs one HTTP request
//! against the service and copies the relevant response fields back into the
//! local value.
//!
//! All operations go through the [ApiConnection][connection::ApiConnection]
//! trait. The provided [ReqwestConnection][connection::ReqwestConnection]
//! implements it over HTTP/JSON; applications wrap it with their own
//! authentication and retry layers, or substitute a mock in tests.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use google_cloud_resourcemanager_v1beta1::connection::ReqwestConnection;
//! use google_cloud_resourcemanager_v1beta1::model::Folder;
//!
//! let conn = ReqwestConnection::new();
//! let mut folder = Folder::new()
//!     .set_display_name("purple-spaceship")
//!     .set_parent("organizations/123");
//! folder.create(&conn).await?;
//! println!("created {:?}", folder.name);
//! # google_cloud_resourcemanager_v1beta1::Result::<()>::Ok(()) });
//! ```
//!
//! [Folder]: https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by this client.
pub mod error;

/// The messages and enums that are part of this client library.
pub mod model;

/// The transport seam: a trait for issuing API requests, and its default
/// HTTP implementation.
pub mod connection;

mod folder;

pub use error::Error;
