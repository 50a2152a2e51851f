//! Persistence Gateway
//!
//! Los repositorios traducen entre las formas públicas de las entidades
//! (snake_case, enumerados legibles como "Party Bus") y la representación
//! nativa del almacén (columnas camelCase, códigos como `PARTY_BUS`).
//!
//! Contrato de lectura del catálogo público: primero el almacén duradero;
//! ante cualquier error O un resultado vacío se sirven las fixtures, de
//! modo que las páginas públicas nunca fallan por una caída de storage.
//! Contrato de escritura: siempre contra el almacén, sin fallback.

pub mod booking_repository;
pub mod quote_repository;
pub mod service_repository;
pub mod testimonial_repository;
pub mod vehicle_repository;

/// Aplica la política de fallback de lecturas del catálogo: error de
/// storage o resultado vacío -> fixtures; si no, las filas mapeadas.
pub fn with_fixture_fallback<R, T, F>(
    db: Result<Vec<R>, sqlx::Error>,
    map: fn(R) -> T,
    fixtures: F,
) -> Vec<T>
where
    F: FnOnce() -> Vec<T>,
{
    match db {
        Ok(rows) if !rows.is_empty() => rows.into_iter().map(map).collect(),
        Ok(_) => {
            tracing::debug!("📦 Lectura de catálogo vacía, sirviendo fixtures");
            fixtures()
        }
        Err(e) => {
            tracing::warn!("⚠️ Storage no disponible para lectura pública, sirviendo fixtures: {}", e);
            fixtures()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(n: i32) -> i64 {
        (n as i64) * 2
    }

    #[test]
    fn test_fallback_on_error() {
        let db: Result<Vec<i32>, sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
        let out = with_fixture_fallback(db, double, || vec![99]);
        assert_eq!(out, vec![99]);
    }

    #[test]
    fn test_fallback_on_empty_result() {
        let db: Result<Vec<i32>, sqlx::Error> = Ok(vec![]);
        let out = with_fixture_fallback(db, double, || vec![99]);
        assert_eq!(out, vec![99]);
    }

    #[test]
    fn test_rows_win_when_present() {
        let db: Result<Vec<i32>, sqlx::Error> = Ok(vec![1, 2, 3]);
        let out = with_fixture_fallback(db, double, || vec![99]);
        assert_eq!(out, vec![2, 4, 6]);
    }
}
