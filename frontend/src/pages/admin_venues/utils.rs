pub use crate::pages::admin::utils::EditorMode;

use crate::api::{ApiError, Venue, VenuePayload, VenueState};
use leptos::*;
use serde_json::json;

/// Image types the upload endpoint accepts.
pub const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub fn editor_title(mode: EditorMode) -> &'static str {
    if mode.is_edit() {
        "Editar escenario"
    } else {
        "Nuevo escenario"
    }
}

#[derive(Clone, Copy)]
pub struct VenueFormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub address: RwSignal<String>,
    pub capacity: RwSignal<String>,
    pub dimensions: RwSignal<String>,
    pub state: RwSignal<String>,
    pub images: RwSignal<Vec<String>>,
}

impl Default for VenueFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            address: create_rw_signal(String::new()),
            capacity: create_rw_signal(String::new()),
            dimensions: create_rw_signal(String::new()),
            state: create_rw_signal(VenueState::Available.as_param().to_string()),
            images: create_rw_signal(Vec::new()),
        }
    }
}

impl VenueFormState {
    pub fn load(&self, venue: &Venue) {
        self.name.set(venue.name.clone());
        self.description.set(venue.description.clone().unwrap_or_default());
        self.address.set(venue.address.clone().unwrap_or_default());
        self.capacity.set(if venue.capacity == 0 {
            String::new()
        } else {
            venue.capacity.to_string()
        });
        self.dimensions.set(venue.dimensions.clone().unwrap_or_default());
        self.state.set(venue.state.as_param().to_string());
        self.images
            .set(venue.images.iter().map(|image| image.name.clone()).collect());
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.address.set(String::new());
        self.capacity.set(String::new());
        self.dimensions.set(String::new());
        self.state.set(VenueState::Available.as_param().to_string());
        self.images.set(Vec::new());
    }

    pub fn to_payload(&self) -> Result<VenuePayload, ApiError> {
        validate_venue(VenueInput {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            address: self.address.get_untracked(),
            capacity: self.capacity.get_untracked(),
            dimensions: self.dimensions.get_untracked(),
            state: self.state.get_untracked(),
            images: self.images.get_untracked(),
        })
    }

    pub fn add_image(&self, url: String) {
        self.images.update(|images| {
            if !images.contains(&url) {
                images.push(url);
            }
        });
    }

    pub fn remove_image(&self, url: &str) {
        self.images.update(|images| images.retain(|image| image != url));
    }
}

#[derive(Debug, Clone, Default)]
pub struct VenueInput {
    pub name: String,
    pub description: String,
    pub address: String,
    pub capacity: String,
    pub dimensions: String,
    pub state: String,
    pub images: Vec<String>,
}

pub fn validate_venue(input: VenueInput) -> Result<VenuePayload, ApiError> {
    let mut problems = Vec::new();
    let name = input.name.trim();
    if name.is_empty() {
        problems.push("El nombre es obligatorio.");
    }
    let capacity = match input.capacity.trim() {
        "" => Some(0),
        raw => raw.parse::<u32>().ok(),
    };
    if capacity.is_none() {
        problems.push("La capacidad debe ser un número entero positivo.");
    }
    let state = VenueState::from_param(input.state.trim());
    if state.is_none() {
        problems.push("Selecciona el estado del escenario.");
    }
    match (capacity, state) {
        (Some(capacity), Some(state)) if problems.is_empty() => Ok(VenuePayload {
            name: name.to_string(),
            description: input.description.trim().to_string(),
            address: input.address.trim().to_string(),
            capacity,
            dimensions: input.dimensions.trim().to_string(),
            state,
            locality_id: None,
            primary_sport_id: None,
            images: input.images,
        }),
        _ => Err(ApiError {
            details: Some(json!(problems)),
            ..ApiError::validation("Revisa los datos del escenario.")
        }),
    }
}

/// Rejects files the upload endpoint would refuse before reading them.
pub fn check_image(mime: &str, size: usize) -> Result<(), ApiError> {
    if !IMAGE_TYPES.contains(&mime) {
        return Err(ApiError::validation(
            "Solo se admiten imágenes JPG, PNG o WebP.",
        ));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ApiError::validation("La imagen supera el tamaño máximo de 5 MB."));
    }
    Ok(())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_venue;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn loading_a_venue_fills_the_form() {
        with_runtime(|| {
            let form = VenueFormState::default();
            form.load(&sample_venue());
            assert_eq!(form.name.get(), "Coliseo Central");
            assert_eq!(form.capacity.get(), "40");
            assert_eq!(form.state.get(), "disponible");

            form.add_image("/uploads/a.jpg".into());
            form.add_image("/uploads/a.jpg".into());
            assert_eq!(form.images.get().len(), 1);
            form.remove_image("/uploads/a.jpg");
            assert!(form.images.get().is_empty());

            form.reset();
            assert!(form.name.get().is_empty());
        });
    }
}
