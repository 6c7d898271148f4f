//! # Payload Composition
//!
//! Builds the text encoded into the tag's scannable code from the pet and
//! owner details, and names the downloadable artifacts.

use serde::{Deserialize, Serialize};

/// Country prefix printed before the owner's phone number.
const PHONE_PREFIX: &str = "+54";

/// Base name used when the pet has no name.
const FALLBACK_NAME: &str = "mascota";

/// Pet and owner details collected by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetInfo {
    pub pet_name: String,
    pub pet_type: String,
    pub pet_breed: String,
    pub features: Vec<String>,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub medical_info: String,
    pub other_info: String,
}

impl PetInfo {
    /// Names of required fields that are empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("pet_name", &self.pet_name),
            ("owner_name", &self.owner_name),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// The multi-line text handed to the code encoder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tag_studio::PetInfo;
    ///
    /// let info = PetInfo {
    ///     pet_name: "Luna".into(),
    ///     pet_type: "Perro".into(),
    ///     owner_name: "Ana".into(),
    ///     phone: "11 5555 0000".into(),
    ///     ..PetInfo::default()
    /// };
    /// assert_eq!(
    ///     info.compose(),
    ///     "INFO MASCOTA\nNombre: Luna\nTipo: Perro\nDUEÑO\nNombre: Ana\nTeléfono: +54 11 5555 0000\n"
    /// );
    /// ```
    pub fn compose(&self) -> String {
        let mut lines = vec![
            "INFO MASCOTA".to_string(),
            format!("Nombre: {}", self.pet_name),
            format!("Tipo: {}", self.pet_type),
        ];
        if !self.pet_breed.is_empty() {
            lines.push(format!("Raza: {}", self.pet_breed));
        }
        if !self.features.is_empty() {
            lines.push(format!("Características: {}", self.features.join(", ")));
        }
        lines.push("DUEÑO".to_string());
        lines.push(format!("Nombre: {}", self.owner_name));
        lines.push(format!("Teléfono: {PHONE_PREFIX} {}", self.phone));
        if !self.email.is_empty() {
            lines.push(format!("Email: {}", self.email));
        }
        if !self.medical_info.is_empty() {
            lines.push(format!("Info Médica: {}", self.medical_info));
        }

        // Notes close the text without a trailing newline
        let mut text = lines.join("\n");
        if self.other_info.is_empty() {
            text.push('\n');
        } else {
            text.push_str("\nNotas: ");
            text.push_str(&self.other_info);
        }
        text
    }
}

/// File names for the two downloadable artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub stl: String,
    pub png: String,
}

/// Names the artifacts after the pet, falling back to a generic name.
pub fn artifact_names(pet_name: &str) -> ArtifactNames {
    let base = if pet_name.is_empty() {
        FALLBACK_NAME
    } else {
        pet_name
    };
    ArtifactNames {
        stl: format!("{base}-placa-qr.stl"),
        png: format!("{base}-codigo-qr.png"),
    }
}
