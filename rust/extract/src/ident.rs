// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display identifier resolution.

use ifc_prims_model::Entity;

/// Fallback identifier for entities without any naming attribute
pub const UNNAMED: &str = "Unnamed";

/// Derive a display identifier for an entity.
///
/// Resolution order: `Name`, then `Description`, then `GlobalId`; the first
/// present, non-empty value wins. Never fails and never returns an empty
/// string.
pub fn display_identifier(entity: &Entity) -> String {
    for key in ["Name", "Description", "GlobalId"] {
        if let Some(text) = entity.attr_text(key) {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    UNNAMED.to_string()
}
