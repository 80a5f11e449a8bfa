//! PostgreSQL Repository Implementations

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kernel::id::{HomeId, ImageId, MessageId, UserId};
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::domain::entities::{BuyerContact, Home, Image, Inquiry, Message};
use crate::domain::repository::{HomeRepository, MessageRepository};
use crate::domain::value_objects::{HomeFilter, ImageUrl, Price, PropertyType};
use crate::error::{HomeError, HomeResult};

const HOME_COLUMNS: &str = r#"
    home_id,
    address,
    number_of_bedrooms,
    number_of_bathrooms,
    city,
    listed_date,
    price,
    land_size,
    property_type,
    realtor_id,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed listing repository
#[derive(Clone)]
pub struct PgHomeRepository {
    pool: PgPool,
}

impl PgHomeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Images for a batch of homes, grouped by home and in display order
    async fn fetch_images(&self, home_ids: &[Uuid]) -> HomeResult<HashMap<Uuid, Vec<Image>>> {
        if home_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT image_id, home_id, url
            FROM images
            WHERE home_id = ANY($1)
            ORDER BY home_id, position
            "#,
        )
        .bind(home_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Image>> = HashMap::new();
        for row in rows {
            grouped.entry(row.home_id).or_default().push(Image {
                id: ImageId::from_uuid(row.image_id),
                url: ImageUrl::from_db(row.url),
            });
        }
        Ok(grouped)
    }

    async fn attach_images(&self, rows: Vec<HomeRow>) -> HomeResult<Vec<Home>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.home_id).collect();
        let mut images = self.fetch_images(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let home_images = images.remove(&row.home_id).unwrap_or_default();
                row.into_home(home_images)
            })
            .collect()
    }
}

async fn insert_images(
    tx: &mut Transaction<'_, Postgres>,
    home_id: &HomeId,
    images: &[Image],
) -> HomeResult<()> {
    if images.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO images (image_id, home_id, position, url) ");
    builder.push_values(images.iter().enumerate(), |mut b, (position, image)| {
        b.push_bind(image.id.into_uuid())
            .push_bind(home_id.into_uuid())
            .push_bind(position as i32)
            .push_bind(image.url.as_str().to_owned());
    });
    builder.build().execute(&mut **tx).await?;

    Ok(())
}

// ============================================================================
// Home Repository Implementation
// ============================================================================

impl HomeRepository for PgHomeRepository {
    async fn list(&self, filter: &HomeFilter) -> HomeResult<Vec<Home>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        query
            .push(HOME_COLUMNS)
            .push(" FROM homes WHERE property_type = ")
            .push_bind(filter.property_type.id());

        if let Some(city) = &filter.city {
            query.push(" AND city = ").push_bind(city.clone());
        }
        if let Some(range) = &filter.price {
            if let Some(min) = range.gte {
                query.push(" AND price >= ").push_bind(min.value());
            }
            if let Some(max) = range.lte {
                query.push(" AND price <= ").push_bind(max.value());
            }
        }
        query.push(" ORDER BY listed_date DESC, home_id");

        let rows = query
            .build_query_as::<HomeRow>()
            .fetch_all(&self.pool)
            .await?;

        self.attach_images(rows).await
    }

    async fn find_by_id(&self, home_id: &HomeId) -> HomeResult<Option<Home>> {
        let sql = format!("SELECT {HOME_COLUMNS} FROM homes WHERE home_id = $1");
        let row = sqlx::query_as::<_, HomeRow>(&sql)
            .bind(home_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.attach_images(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn create(&self, home: &Home) -> HomeResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO homes (
                home_id,
                address,
                number_of_bedrooms,
                number_of_bathrooms,
                city,
                listed_date,
                price,
                land_size,
                property_type,
                realtor_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(home.id.as_uuid())
        .bind(&home.address)
        .bind(home.number_of_bedrooms)
        .bind(home.number_of_bathrooms)
        .bind(&home.city)
        .bind(home.listed_date)
        .bind(home.price.value())
        .bind(home.land_size)
        .bind(home.property_type.id())
        .bind(home.realtor_id.as_uuid())
        .bind(home.created_at)
        .bind(home.updated_at)
        .execute(&mut *tx)
        .await?;

        insert_images(&mut tx, &home.id, &home.images).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn update(&self, home: &Home) -> HomeResult<()> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE homes SET
                address = $2,
                number_of_bedrooms = $3,
                number_of_bathrooms = $4,
                city = $5,
                price = $6,
                land_size = $7,
                property_type = $8,
                updated_at = $9
            WHERE home_id = $1
            "#,
        )
        .bind(home.id.as_uuid())
        .bind(&home.address)
        .bind(home.number_of_bedrooms)
        .bind(home.number_of_bathrooms)
        .bind(&home.city)
        .bind(home.price.value())
        .bind(home.land_size)
        .bind(home.property_type.id())
        .bind(home.updated_at)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(HomeError::HomeNotFound);
        }

        sqlx::query("DELETE FROM images WHERE home_id = $1")
            .bind(home.id.as_uuid())
            .execute(&mut *tx)
            .await?;
        insert_images(&mut tx, &home.id, &home.images).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, home_id: &HomeId) -> HomeResult<bool> {
        // images and messages cascade
        let deleted = sqlx::query("DELETE FROM homes WHERE home_id = $1")
            .bind(home_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Message Repository Implementation
// ============================================================================

impl MessageRepository for PgHomeRepository {
    async fn create(&self, message: &Message) -> HomeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (
                message_id,
                home_id,
                buyer_id,
                realtor_id,
                body,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.home_id.as_uuid())
        .bind(message.buyer_id.as_uuid())
        .bind(message.realtor_id.as_uuid())
        .bind(&message.body)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_home(&self, home_id: &HomeId) -> HomeResult<Vec<Inquiry>> {
        let rows = sqlx::query_as::<_, InquiryRow>(
            r#"
            SELECT
                m.message_id,
                m.home_id,
                m.buyer_id,
                m.realtor_id,
                m.body,
                m.created_at,
                u.name AS buyer_name,
                u.email AS buyer_email,
                u.phone AS buyer_phone
            FROM messages m
            JOIN users u ON u.user_id = m.buyer_id
            WHERE m.home_id = $1
            ORDER BY m.created_at, m.message_id
            "#,
        )
        .bind(home_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(InquiryRow::into_inquiry).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct HomeRow {
    home_id: Uuid,
    address: String,
    number_of_bedrooms: i32,
    number_of_bathrooms: f64,
    city: String,
    listed_date: DateTime<Utc>,
    price: f64,
    land_size: f64,
    property_type: i16,
    realtor_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HomeRow {
    fn into_home(self, images: Vec<Image>) -> HomeResult<Home> {
        let property_type = PropertyType::from_id(self.property_type).ok_or_else(|| {
            HomeError::Internal(format!("Unknown property type id: {}", self.property_type))
        })?;

        Ok(Home {
            id: HomeId::from_uuid(self.home_id),
            address: self.address,
            number_of_bedrooms: self.number_of_bedrooms,
            number_of_bathrooms: self.number_of_bathrooms,
            city: self.city,
            listed_date: self.listed_date,
            price: Price::from_db(self.price),
            land_size: self.land_size,
            property_type,
            realtor_id: UserId::from_uuid(self.realtor_id),
            images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    image_id: Uuid,
    home_id: Uuid,
    url: String,
}

#[derive(sqlx::FromRow)]
struct InquiryRow {
    message_id: Uuid,
    home_id: Uuid,
    buyer_id: Uuid,
    realtor_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
    buyer_name: String,
    buyer_email: String,
    buyer_phone: String,
}

impl InquiryRow {
    fn into_inquiry(self) -> Inquiry {
        Inquiry {
            message: Message {
                id: MessageId::from_uuid(self.message_id),
                home_id: HomeId::from_uuid(self.home_id),
                buyer_id: UserId::from_uuid(self.buyer_id),
                realtor_id: UserId::from_uuid(self.realtor_id),
                body: self.body,
                created_at: self.created_at,
            },
            buyer: BuyerContact {
                name: self.buyer_name,
                email: self.buyer_email,
                phone: self.buyer_phone,
            },
        }
    }
}
