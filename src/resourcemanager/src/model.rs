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

use serde::{Deserialize, Serialize};

/// A Folder in an organization's resource hierarchy, used to organize that
/// organization's resources.
///
/// This type is a local, mutable mirror of the remote resource. Local edits to
/// [display_name][Folder::display_name] and [parent][Folder::parent] are
/// provisional until [create][Folder::create] or [update][Folder::update]
/// confirms them; [name][Folder::name] and
/// [lifecycle_state][Folder::lifecycle_state] are authoritative only
/// immediately after a successful server response. Two `Folder` values
/// mirroring the same resource are not kept consistent with each other.
///
/// # Example
/// ```
/// use google_cloud_resourcemanager_v1beta1::model::Folder;
/// let folder = Folder::new()
///     .set_display_name("purple-spaceship")
///     .set_parent("organizations/123");
/// assert!(folder.name.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Folder {
    /// Output only. The resource name of the Folder, in the form
    /// `folders/{folder_id}`. Assigned by the server on
    /// [create][Folder::create].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The folder's display name. A folder's display name must be unique
    /// amongst its siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The Folder's parent's resource name, e.g. `organizations/{org_id}` or
    /// `folders/{folder_id}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Output only. The lifecycle state of the folder. Owned by the server;
    /// this client never sets it directly, it is only overwritten from
    /// responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifecycleState>,
}

impl Folder {
    /// Creates a folder with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Folder::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Folder::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [parent][Folder::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }
}

/// Lifecycle states of a [Folder].
///
/// The state is reported by the server and mirrored verbatim by this client;
/// the transitions happen server-side. [delete][Folder::delete] moves an
/// `Active` folder to `DeleteRequested`; at an unspecified later time the
/// service moves it to `DeleteInProgress` and eventually purges it.
/// [undelete][Folder::undelete] moves a `DeleteRequested` folder back to
/// `Active`, and fails once the folder has reached `DeleteInProgress`.
///
/// Unrecognized values returned by the service are preserved in
/// [UnknownValue][LifecycleState::UnknownValue], so that a newer service does
/// not break an older client.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum LifecycleState {
    /// Unspecified state.
    #[default]
    Unspecified,

    /// The normal and active state.
    Active,

    /// The folder has been marked for deletion by the user.
    DeleteRequested,

    /// The process of deleting the folder has begun. Deletion can no longer
    /// be reversed.
    DeleteInProgress,

    /// A lifecycle state not recognized by this client library.
    UnknownValue(String),
}

impl LifecycleState {
    /// The string used to represent this value on the wire.
    pub fn name(&self) -> &str {
        match self {
            LifecycleState::Unspecified => "LIFECYCLE_STATE_UNSPECIFIED",
            LifecycleState::Active => "ACTIVE",
            LifecycleState::DeleteRequested => "DELETE_REQUESTED",
            LifecycleState::DeleteInProgress => "DELETE_IN_PROGRESS",
            LifecycleState::UnknownValue(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for LifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "LIFECYCLE_STATE_UNSPECIFIED" => LifecycleState::Unspecified,
            "ACTIVE" => LifecycleState::Active,
            "DELETE_REQUESTED" => LifecycleState::DeleteRequested,
            "DELETE_IN_PROGRESS" => LifecycleState::DeleteInProgress,
            v => LifecycleState::UnknownValue(v.to_string()),
        }
    }
}

impl From<String> for LifecycleState {
    fn from(value: String) -> Self {
        LifecycleState::from(value.as_str())
    }
}

impl Serialize for LifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for LifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(LifecycleState::from)
    }
}

/// An Identity and Access Management (IAM) policy, which specifies access
/// controls for Google Cloud resources.
///
/// Returned by [get_iam_policy][Folder::get_iam_policy]. A policy is a
/// distinct resource representation; it is never merged into [Folder] fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Policy {
    /// Specifies the format of the policy.
    pub version: i32,

    /// Associates a list of `members` to a `role`.
    pub bindings: Vec<Binding>,

    /// `etag` is used for optimistic concurrency control as a way to help
    /// prevent simultaneous updates of a policy from overwriting each other.
    pub etag: String,
}

impl Policy {
    /// Creates an empty policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [version][Policy::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [bindings][Policy::bindings].
    pub fn set_bindings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Binding>,
    {
        self.bindings = v.into_iter().map(|b| b.into()).collect();
        self
    }

    /// Sets the value of [etag][Policy::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = v.into();
        self
    }
}

/// Associates `members` with a `role`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Binding {
    /// Role that is assigned to `members`, e.g. `roles/viewer`.
    pub role: String,

    /// Specifies the identities requesting access for a Cloud Platform
    /// resource.
    pub members: Vec<String>,
}

impl Binding {
    /// Creates a binding with no role or members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [role][Binding::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = v.into();
        self
    }

    /// Sets the value of [members][Binding::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.members = v.into_iter().map(|m| m.into()).collect();
        self
    }
}
