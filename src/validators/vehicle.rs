use chrono::Datelike;

use crate::dto::{VehicleDto, VehicleStatus};
use crate::utils::validation::{validate_http_url, validate_not_empty, validate_positive, validate_range};

use super::{ViolationList, Violations};

pub const MIN_YEAR: i64 = 1990;
pub const MAX_CAPACITY: i64 = 9;

pub const MSG_MARCA: &str = "La marca es obligatoria.";
pub const MSG_MODELO: &str = "El modelo es obligatorio.";
pub const MSG_ANIO: &str = "El año es obligatorio.";
pub const MSG_ANIO_MIN: &str = "El año no puede ser menor a 1990.";
pub const MSG_ANIO_MAX: &str = "El año no puede ser mayor al año actual.";
pub const MSG_CAPACIDAD: &str = "La capacidad debe ser mayor a 0.";
pub const MSG_CAPACIDAD_MAX: &str = "La capacidad máxima permitida es 9 personas.";
pub const MSG_PRECIO: &str = "El precio por día debe ser mayor a 0.";
pub const MSG_CATEGORIA: &str = "La categoría es obligatoria.";
pub const MSG_SUCURSAL: &str = "La sucursal es obligatoria.";
pub const MSG_TRANSMISION: &str = "El ID de transmisión debe estar entre 1 y 3.";
pub const MSG_URL_IMAGEN: &str = "La URL de la imagen debe empezar con http:// o https://";
pub const MSG_ESTADO: &str = "El estado seleccionado no es válido.";

/// Valida un vehículo contra el año en curso dado
pub fn validate_vehicle(dto: &VehicleDto, current_year: i64) -> Vec<String> {
    let mut errors = ViolationList::new();

    errors.check(validate_not_empty(&dto.marca), MSG_MARCA);
    errors.check(validate_not_empty(&dto.modelo), MSG_MODELO);

    match dto.anio {
        None => errors.push_if(true, MSG_ANIO),
        Some(anio) => {
            errors.push_if(anio < MIN_YEAR, MSG_ANIO_MIN);
            errors.push_if(anio > current_year, MSG_ANIO_MAX);
        }
    }

    match dto.capacidad {
        Some(capacidad) if capacidad > 0 => {
            errors.push_if(capacidad > MAX_CAPACITY, MSG_CAPACIDAD_MAX)
        }
        _ => errors.push_if(true, MSG_CAPACIDAD),
    }

    errors.check(validate_positive(dto.precio_dia), MSG_PRECIO);

    errors.push_if(!is_positive_id(dto.id_categoria), MSG_CATEGORIA);
    errors.push_if(!is_positive_id(dto.id_sucursal), MSG_SUCURSAL);

    let transmision_ok = dto
        .id_transmision
        .map(|id| validate_range(id, 1, 3).is_ok())
        .unwrap_or(false);
    errors.push_if(!transmision_ok, MSG_TRANSMISION);

    if let Some(url) = dto.url_imagen.as_deref() {
        errors.check(validate_http_url(url), MSG_URL_IMAGEN);
    }

    errors.push_if(VehicleStatus::parse(&dto.estado).is_none(), MSG_ESTADO);

    errors.into_vec()
}

fn is_positive_id(id: Option<i64>) -> bool {
    matches!(id, Some(id) if id > 0)
}

impl Violations for VehicleDto {
    fn violations(&self) -> Vec<String> {
        validate_vehicle(self, chrono::Utc::now().year() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    const YEAR: i64 = 2025;

    fn valid() -> VehicleDto {
        VehicleDto {
            id_vehiculo: None,
            marca: "Kia".into(),
            modelo: "Rio".into(),
            anio: Some(2022),
            id_categoria: Some(1),
            id_transmision: Some(2),
            capacidad: Some(5),
            precio_dia: Decimal::new(3500, 2),
            precio_normal: Decimal::new(3500, 2),
            precio_actual: Decimal::new(3500, 2),
            matricula: Some("PCD-0987".into()),
            id_promocion: None,
            estado: "Disponible".into(),
            descripcion: String::new(),
            id_sucursal: Some(1),
            url_imagen: None,
        }
    }

    #[test]
    fn test_valid_vehicle() {
        assert!(validate_vehicle(&valid(), YEAR).is_empty());
    }

    #[test]
    fn test_capacity_bounds() {
        let mut dto = valid();
        dto.capacidad = Some(10);
        assert_eq!(validate_vehicle(&dto, YEAR), vec![MSG_CAPACIDAD_MAX]);
        dto.capacidad = Some(0);
        assert_eq!(validate_vehicle(&dto, YEAR), vec![MSG_CAPACIDAD]);
        dto.capacidad = None;
        assert_eq!(validate_vehicle(&dto, YEAR), vec![MSG_CAPACIDAD]);
        dto.capacidad = Some(9);
        assert!(validate_vehicle(&dto, YEAR).is_empty());
        dto.capacidad = Some(1);
        assert!(validate_vehicle(&dto, YEAR).is_empty());
    }

    #[test]
    fn test_year_bounds() {
        let mut dto = valid();
        dto.anio = Some(1989);
        assert_eq!(validate_vehicle(&dto, YEAR), vec![MSG_ANIO_MIN]);
        dto.anio = Some(1990);
        assert!(validate_vehicle(&dto, YEAR).is_empty());
        dto.anio = Some(YEAR);
        assert!(validate_vehicle(&dto, YEAR).is_empty());
        dto.anio = Some(YEAR + 1);
        assert_eq!(validate_vehicle(&dto, YEAR), vec![MSG_ANIO_MAX]);
        dto.anio = None;
        assert_eq!(validate_vehicle(&dto, YEAR), vec![MSG_ANIO]);
    }

    #[test]
    fn test_transmission_and_url() {
        let mut dto = valid();
        dto.id_transmision = Some(4);
        dto.url_imagen = Some("img/kia.png".into());
        assert_eq!(validate_vehicle(&dto, YEAR), vec![MSG_TRANSMISION, MSG_URL_IMAGEN]);
        dto.id_transmision = Some(3);
        dto.url_imagen = Some("http://cdn/kia.png".into());
        assert!(validate_vehicle(&dto, YEAR).is_empty());
    }

    #[test]
    fn test_empty_form_accumulates_in_order() {
        let dto = VehicleDto {
            marca: String::new(),
            modelo: String::new(),
            anio: None,
            id_categoria: None,
            id_transmision: None,
            capacidad: None,
            precio_dia: Decimal::ZERO,
            precio_normal: Decimal::ZERO,
            precio_actual: Decimal::ZERO,
            estado: "Vendido".into(),
            id_sucursal: None,
            ..valid()
        };
        assert_eq!(
            validate_vehicle(&dto, YEAR),
            vec![
                MSG_MARCA,
                MSG_MODELO,
                MSG_ANIO,
                MSG_CAPACIDAD,
                MSG_PRECIO,
                MSG_CATEGORIA,
                MSG_SUCURSAL,
                MSG_TRANSMISION,
                MSG_ESTADO,
            ]
        );
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let dto = valid();
        let before = dto.clone();
        let _ = dto.violations();
        assert_eq!(dto, before);
    }
}
