use pathwise_types::error::CatalogError;
use pathwise_types::persona::{Persona, PersonaFile, PersonaKey};

/// Catalog shipped inside the binary.
const BUILTIN_PERSONAS: &str = include_str!("personas.toml");

/// Immutable lookup from persona key to persona.
///
/// Construction guarantees every [`PersonaKey`] has an entry, so lookups
/// are infallible.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    // Indexed by `PersonaKey as usize`, in `PersonaKey::ALL` order.
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    /// The catalog embedded at compile time.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_PERSONAS)
    }

    /// Parse and validate a `personas.toml` document.
    pub fn from_toml(raw: &str) -> Result<Self, CatalogError> {
        let file: PersonaFile =
            toml::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    pub fn from_file(mut file: PersonaFile) -> Result<Self, CatalogError> {
        let mut personas = Vec::with_capacity(PersonaKey::ALL.len());
        for key in PersonaKey::ALL {
            let persona = file
                .personas
                .remove(&key)
                .ok_or_else(|| CatalogError::MissingPersona(key.to_string()))?;
            validate(key, &persona)?;
            personas.push(persona);
        }
        Ok(Self { personas })
    }

    pub fn get(&self, key: PersonaKey) -> &Persona {
        &self.personas[key as usize]
    }

    /// All personas in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonaKey, &Persona)> {
        PersonaKey::ALL.into_iter().zip(self.personas.iter())
    }
}

fn validate(key: PersonaKey, persona: &Persona) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidPersona {
        key: key.to_string(),
        reason: reason.to_string(),
    };
    if persona.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if persona.description.trim().is_empty() {
        return Err(invalid("description must not be empty"));
    }
    if persona.instructions.iter().any(|i| i.trim().is_empty()) {
        return Err(invalid("instructions must not contain blank entries"));
    }
    Ok(())
}
