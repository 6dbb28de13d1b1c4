//! Validadores de entidades
//!
//! Cada validador recorre todas sus reglas y acumula un mensaje por regla
//! incumplida; nunca se detiene en la primera ni modifica el DTO. El orden de
//! los mensajes es fijo para un mismo DTO.

pub mod invoice;
pub mod registration;
pub mod reservation;
pub mod user;
pub mod vehicle;

/// Lista ordenada de violaciones de reglas de negocio
pub trait Violations {
    fn violations(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

/// Acumulador de mensajes en orden de evaluación
#[derive(Debug, Default)]
pub(crate) struct ViolationList {
    messages: Vec<String>,
}

impl ViolationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega `message` si la regla falló
    pub fn check<E>(&mut self, rule: Result<(), E>, message: &str) {
        if rule.is_err() {
            self.messages.push(message.to_string());
        }
    }

    /// Agrega `message` cuando `failed` es verdadero
    pub fn push_if(&mut self, failed: bool, message: &str) {
        if failed {
            self.messages.push(message.to_string());
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.messages
    }
}
