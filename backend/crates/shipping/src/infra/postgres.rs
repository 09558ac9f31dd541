//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{OwnerId, ShipmentId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::shipment::Shipment;
use crate::domain::repository::ShipmentRepository;
use crate::domain::value_object::{package_spec::PackageSpec, postal_code::PostalCode};
use crate::error::{ShippingError, ShippingResult};

/// PostgreSQL-backed shipment repository
#[derive(Clone)]
pub struct PgShipmentRepository {
    pool: PgPool,
}

impl PgShipmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ShipmentRepository for PgShipmentRepository {
    async fn create(&self, shipment: &Shipment) -> ShippingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shipments (
                shipment_id,
                owner_id,
                origin_postal_code,
                destination_postal_code,
                weight_kg,
                height_cm,
                width_cm,
                length_cm,
                price,
                lead_time_days,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(shipment.shipment_id.as_uuid())
        .bind(shipment.owner_id.as_uuid())
        .bind(shipment.origin.as_str())
        .bind(shipment.destination.as_str())
        .bind(shipment.package.weight_kg)
        .bind(shipment.package.height_cm)
        .bind(shipment.package.width_cm)
        .bind(shipment.package.length_cm)
        .bind(shipment.price)
        .bind(shipment.lead_time_days)
        .bind(shipment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &OwnerId) -> ShippingResult<Vec<Shipment>> {
        let rows = sqlx::query_as::<_, ShipmentRow>(
            r#"
            SELECT
                shipment_id,
                owner_id,
                origin_postal_code,
                destination_postal_code,
                weight_kg,
                height_cm,
                width_cm,
                length_cm,
                price,
                lead_time_days,
                created_at
            FROM shipments
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_shipment()).collect()
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ShipmentRow {
    shipment_id: Uuid,
    owner_id: Uuid,
    origin_postal_code: String,
    destination_postal_code: String,
    weight_kg: f64,
    height_cm: f64,
    width_cm: f64,
    length_cm: f64,
    price: f64,
    lead_time_days: i32,
    created_at: DateTime<Utc>,
}

impl ShipmentRow {
    fn into_shipment(self) -> ShippingResult<Shipment> {
        let origin = PostalCode::parse(&self.origin_postal_code).map_err(|e| {
            ShippingError::Internal(format!("Corrupt origin postal code in storage: {}", e))
        })?;
        let destination = PostalCode::parse(&self.destination_postal_code).map_err(|e| {
            ShippingError::Internal(format!("Corrupt destination postal code in storage: {}", e))
        })?;
        let package = PackageSpec::new(self.weight_kg, self.height_cm, self.width_cm, self.length_cm)
            .map_err(|e| {
                ShippingError::Internal(format!("Corrupt package measurements in storage: {}", e))
            })?;

        Ok(Shipment {
            shipment_id: ShipmentId::from_uuid(self.shipment_id),
            owner_id: OwnerId::from_uuid(self.owner_id),
            origin,
            destination,
            package,
            price: self.price,
            lead_time_days: self.lead_time_days,
            created_at: self.created_at,
        })
    }
}
