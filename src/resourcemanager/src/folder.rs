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

//! The REST operations on the [Folder] resource.

use crate::Result;
use crate::connection::ApiConnection;
use crate::error::Error;
use crate::model::{Folder, Policy};
use http::Method;
use serde_json::{Value, json};

impl Folder {
    /// Constructs a folder from its API representation.
    ///
    /// # Example
    /// ```
    /// use google_cloud_resourcemanager_v1beta1::model::Folder;
    /// let folder = Folder::from_api_repr(&serde_json::json!({
    ///     "name": "folders/42",
    ///     "lifecycleState": "ACTIVE",
    /// }));
    /// assert_eq!(folder.name.as_deref(), Some("folders/42"));
    /// ```
    pub fn from_api_repr(resource: &Value) -> Self {
        let mut folder = Self::new();
        folder.set_properties_from_api_repr(resource);
        folder
    }

    /// The request path for this folder, e.g. `/folders/42`.
    ///
    /// Fails with a binding error when [name][Folder::name] is not set, that
    /// is, before [create][Folder::create] assigned a resource name.
    pub fn path(&self) -> Result<String> {
        self.name
            .as_deref()
            .map(|name| format!("/{name}"))
            .ok_or_else(|| Error::binding("the folder resource name is not set"))
    }

    /// Updates specific properties from an API representation.
    ///
    /// Only keys present in `resource` overwrite local state; absent keys
    /// leave the existing local values untouched. This is the merge applied
    /// after create, update, and get requests.
    fn set_properties_from_api_repr(&mut self, resource: &Value) {
        if let Some(v) = resource.get("name").and_then(Value::as_str) {
            self.name = Some(v.to_string());
        }
        if let Some(v) = resource.get("parent").and_then(Value::as_str) {
            self.parent = Some(v.to_string());
        }
        if let Some(v) = resource.get("lifecycleState").and_then(Value::as_str) {
            self.lifecycle_state = Some(v.into());
        }
    }

    /// API call: create the folder via a `POST` request.
    ///
    /// Sends the locally set [name][Folder::name] and
    /// [display_name][Folder::display_name], with [parent][Folder::parent] as
    /// a query parameter, then merges the response into this value. On
    /// success the server assigns the resource name and lifecycle state.
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/create>
    pub async fn create(&mut self, conn: &dyn ApiConnection) -> Result<()> {
        let mut body = serde_json::Map::new();
        if let Some(name) = &self.name {
            body.insert("name".to_string(), json!(name));
        }
        if let Some(display_name) = &self.display_name {
            body.insert("displayName".to_string(), json!(display_name));
        }
        let query = self
            .parent
            .iter()
            .map(|parent| ("parent".to_string(), parent.clone()))
            .collect();
        let resource = conn
            .request(
                Method::POST,
                "/folders".to_string(),
                Some(Value::Object(body)),
                query,
            )
            .await?
            .ok_or_else(empty_response)?;
        self.set_properties_from_api_repr(&resource);
        Ok(())
    }

    /// API call: reload the folder via a `GET` request.
    ///
    /// This method retrieves the newest metadata for the folder and replaces
    /// ALL local fields with the server's representation.
    ///
    /// **Warning:** this overwrites any local changes you have made and not
    /// saved via [update][Folder::update].
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/get>
    pub async fn reload(&mut self, conn: &dyn ApiConnection) -> Result<()> {
        // We assume the folder exists; if it does not, the request fails with
        // a not-found error.
        let resource = conn
            .request(Method::GET, self.path()?, None, Vec::new())
            .await?
            .ok_or_else(empty_response)?;
        *self = serde_json::from_value(resource).map_err(Error::deser)?;
        Ok(())
    }

    /// API call: test the existence of the folder via a `GET` request.
    ///
    /// Returns `Ok(false)` exactly when the service reports the folder as not
    /// found; any other error propagates unchanged.
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/get>
    pub async fn exists(&self, conn: &dyn ApiConnection) -> Result<bool> {
        // The API does not provide a cheaper existence check, we have to
        // request the entire resource.
        match conn
            .request(Method::GET, self.path()?, None, Vec::new())
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// API call: update the folder via a `PUT` request.
    ///
    /// Sends the locally set [display_name][Folder::display_name] and
    /// [parent][Folder::parent], then merges the response into this value. A
    /// failed update leaves the local fields exactly as the caller set them.
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/update>
    pub async fn update(&mut self, conn: &dyn ApiConnection) -> Result<()> {
        let mut body = serde_json::Map::new();
        if let Some(display_name) = &self.display_name {
            body.insert("displayName".to_string(), json!(display_name));
        }
        if let Some(parent) = &self.parent {
            body.insert("parent".to_string(), json!(parent));
        }
        let resource = conn
            .request(
                Method::PUT,
                self.path()?,
                Some(Value::Object(body)),
                Vec::new(),
            )
            .await?
            .ok_or_else(empty_response)?;
        self.set_properties_from_api_repr(&resource);
        Ok(())
    }

    /// API call: delete the folder via a `DELETE` request.
    ///
    /// This is a soft delete: it changes the
    /// [lifecycle_state][Folder::lifecycle_state] from `ACTIVE` to
    /// `DELETE_REQUESTED`. Later, at an unspecified time, the service moves
    /// the folder to `DELETE_IN_PROGRESS` and the deletion actually begins.
    ///
    /// The DELETE response carries no body, so the local state is not
    /// refreshed unless `reload_data` is set; pass `true` to follow up with
    /// one [reload][Folder::reload] and observe the updated state.
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/delete>
    pub async fn delete(&mut self, conn: &dyn ApiConnection, reload_data: bool) -> Result<()> {
        conn.request(Method::DELETE, self.path()?, None, Vec::new())
            .await?;
        if reload_data {
            self.reload(conn).await?;
        }
        Ok(())
    }

    /// API call: undelete the folder via a `POST` request.
    ///
    /// This changes the [lifecycle_state][Folder::lifecycle_state] from
    /// `DELETE_REQUESTED` back to `ACTIVE`. If the folder has already reached
    /// `DELETE_IN_PROGRESS` the request fails and the folder cannot be
    /// restored; that point of no return is enforced by the service and
    /// opaque to this client.
    ///
    /// The response carries no body; pass `reload_data = true` to follow up
    /// with one [reload][Folder::reload]. A failed undelete leaves the local
    /// fields untouched.
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/undelete>
    pub async fn undelete(&mut self, conn: &dyn ApiConnection, reload_data: bool) -> Result<()> {
        let path = format!("{}:undelete", self.path()?);
        conn.request(Method::POST, path, None, Vec::new()).await?;
        if reload_data {
            self.reload(conn).await?;
        }
        Ok(())
    }

    /// API call: fetch a folder by resource name via a `GET` request.
    ///
    /// Merges the response into this value and returns the raw API
    /// representation.
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/get>
    pub async fn get_folder(&mut self, conn: &dyn ApiConnection, name: &str) -> Result<Value> {
        let resource = conn
            .request(Method::GET, format!("/{name}"), None, Vec::new())
            .await?
            .ok_or_else(empty_response)?;
        self.set_properties_from_api_repr(&resource);
        Ok(resource)
    }

    /// API call: fetch the IAM policy of a folder via a `POST` request.
    ///
    /// A policy is a distinct resource representation; it is returned as a
    /// [Policy] and never merged into [Folder] fields.
    ///
    /// See <https://cloud.google.com/resource-manager/reference/rest/v1beta1/folders/getIamPolicy>
    pub async fn get_iam_policy(conn: &dyn ApiConnection, name: &str) -> Result<Policy> {
        let resource = conn
            .request(
                Method::POST,
                format!("/{name}/:getIamPolicy"),
                None,
                Vec::new(),
            )
            .await?
            .ok_or_else(empty_response)?;
        serde_json::from_value(resource).map_err(Error::deser)
    }
}

fn empty_response() -> Error {
    Error::deser("the service returned an empty response body")
}

#[cfg(test)]
mod tests {
    use crate::model::{Folder, LifecycleState};
    use serde_json::json;

    #[test]
    fn path() {
        let folder = Folder::new().set_name("folders/42");
        assert_eq!(folder.path().unwrap(), "/folders/42");
    }

    #[test]
    fn path_requires_name() {
        let folder = Folder::new().set_display_name("spaceship");
        let err = folder.path().unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test]
    fn from_api_repr() {
        let folder = Folder::from_api_repr(&json!({
            "name": "folders/42",
            "parent": "organizations/123",
            "lifecycleState": "ACTIVE",
        }));
        assert_eq!(folder.name.as_deref(), Some("folders/42"));
        assert_eq!(folder.parent.as_deref(), Some("organizations/123"));
        assert_eq!(folder.lifecycle_state, Some(LifecycleState::Active));
        assert_eq!(folder.display_name, None);
    }

    #[test]
    fn merge_is_keyed_on_presence() {
        let mut folder = Folder::new()
            .set_name("folders/42")
            .set_display_name("spaceship")
            .set_parent("organizations/123");
        folder.set_properties_from_api_repr(&json!({"name": "folders/1"}));
        assert_eq!(folder.name.as_deref(), Some("folders/1"));
        assert_eq!(folder.display_name.as_deref(), Some("spaceship"));
        assert_eq!(folder.parent.as_deref(), Some("organizations/123"));
        assert_eq!(folder.lifecycle_state, None);
    }

    #[test]
    fn merge_preserves_unknown_lifecycle_state() {
        let mut folder = Folder::new().set_name("folders/42");
        folder.set_properties_from_api_repr(&json!({
            "lifecycleState": "STATE_NAME_FROM_THE_FUTURE",
        }));
        assert_eq!(
            folder.lifecycle_state,
            Some(LifecycleState::UnknownValue(
                "STATE_NAME_FROM_THE_FUTURE".to_string()
            ))
        );
    }
}
