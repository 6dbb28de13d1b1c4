//! Listas de referencia de los formularios.
//!
//! `load` se usa al mostrar un formulario por primera vez y falla si alguna
//! lista falla. `reload` se usa al volver a mostrarlo tras un rechazo: cada
//! lista que falle queda vacía.

use futures::{join, try_join};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::clients::{ApiClients, ClientResult};
use crate::dto::{Category, TransmissionOption, UserSummary};
use crate::normalizers::{
    derive_categories, fallback_transmissions, normalize_categories, normalize_list, normalize_transmissions,
    normalize_users, Resource,
};

#[derive(Debug, Default, Serialize)]
pub struct VehicleLists {
    pub categorias: Vec<Category>,
    pub transmisiones: Vec<TransmissionOption>,
    pub sucursales: Vec<Value>,
    pub promociones: Vec<Value>,
}

#[derive(Debug, Default, Serialize)]
pub struct ReservationLists {
    pub usuarios: Vec<UserSummary>,
    pub vehiculos: Vec<Value>,
}

#[derive(Debug, Default, Serialize)]
pub struct InvoiceLists {
    pub reservas: Vec<Value>,
}

/// Categorías; si el endpoint falla se derivan de los vehículos y, si eso
/// también falla, la lista queda vacía.
pub async fn categories(clients: &ApiClients) -> Vec<Category> {
    let primary = match clients.reference.categories().await {
        Ok(payload) => return normalize_categories(&payload),
        Err(e) => e,
    };
    warn!("⚠️ Categorías no disponibles ({}), se derivan de los vehículos", primary);

    match clients.vehicles.list().await {
        Ok(payload) => derive_categories(&normalize_list(&payload, Resource::Vehicles)),
        Err(e) => {
            error!("❌ Error generando categorías de respaldo: {}", e);
            Vec::new()
        }
    }
}

/// Transmisiones; cualquier fallo usa la lista fija
pub async fn transmissions(clients: &ApiClients) -> Vec<TransmissionOption> {
    match clients.reference.transmissions().await {
        Ok(payload) => normalize_transmissions(&payload),
        Err(e) => {
            warn!("⚠️ Transmisiones no disponibles ({}), se usa la lista fija", e);
            fallback_transmissions()
        }
    }
}

pub async fn branches(clients: &ApiClients) -> ClientResult<Vec<Value>> {
    let payload = clients.reference.branches().await?;
    Ok(normalize_list(&payload, Resource::Branches))
}

pub async fn promotions(clients: &ApiClients) -> ClientResult<Vec<Value>> {
    let payload = clients.reference.promotions().await?;
    Ok(normalize_list(&payload, Resource::Promotions))
}

/// Usuarios para elegir en las reservas, sin contraseña
pub async fn users(clients: &ApiClients) -> ClientResult<Vec<UserSummary>> {
    let payload = clients.users.list().await?;
    Ok(normalize_users(&payload).into_iter().map(UserSummary::from).collect())
}

pub async fn vehicles(clients: &ApiClients) -> ClientResult<Vec<Value>> {
    let payload = clients.vehicles.list().await?;
    Ok(normalize_list(&payload, Resource::Vehicles))
}

pub async fn reservations(clients: &ApiClients) -> ClientResult<Vec<Value>> {
    let payload = clients.reservations.list().await?;
    Ok(normalize_list(&payload, Resource::Reservations))
}

/// Lista vacía en lugar del error, que solo se registra
fn tolerate<T: Default>(result: ClientResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        warn!("⚠️ No se pudo recargar {}: {}", what, e);
        T::default()
    })
}

impl VehicleLists {
    pub async fn load(clients: &ApiClients) -> ClientResult<Self> {
        let (categorias, transmisiones, remotas) = join!(
            categories(clients),
            transmissions(clients),
            async { try_join!(branches(clients), promotions(clients)) }
        );
        let (sucursales, promociones) = remotas?;

        Ok(Self {
            categorias,
            transmisiones,
            sucursales,
            promociones,
        })
    }

    pub async fn reload(clients: &ApiClients) -> Self {
        let (categorias, transmisiones, sucursales, promociones) = join!(
            categories(clients),
            transmissions(clients),
            branches(clients),
            promotions(clients)
        );

        Self {
            categorias,
            transmisiones,
            sucursales: tolerate(sucursales, "sucursales"),
            promociones: tolerate(promociones, "promociones"),
        }
    }
}

impl ReservationLists {
    pub async fn load(clients: &ApiClients) -> ClientResult<Self> {
        let (usuarios, vehiculos) = try_join!(users(clients), vehicles(clients))?;
        Ok(Self { usuarios, vehiculos })
    }

    pub async fn reload(clients: &ApiClients) -> Self {
        let (usuarios, vehiculos) = join!(users(clients), vehicles(clients));
        Self {
            usuarios: tolerate(usuarios, "usuarios"),
            vehiculos: tolerate(vehiculos, "vehículos"),
        }
    }
}

impl InvoiceLists {
    pub async fn load(clients: &ApiClients) -> ClientResult<Self> {
        Ok(Self {
            reservas: reservations(clients).await?,
        })
    }

    pub async fn reload(clients: &ApiClients) -> Self {
        Self {
            reservas: tolerate(reservations(clients).await, "reservas"),
        }
    }
}
