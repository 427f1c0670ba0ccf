#[cfg(feature = "ssr")]
mod db_impl {
    use crate::content;
    use crate::models::{
        ContactMessage, ContactRequest, ContactStatus, MenuItem, NewMenuItem, Reservation,
        ReservationRequest, ReservationStatus, Review, UnknownStatus,
    };
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::types::Type;
    use rusqlite::{params, Connection, Error, OptionalExtension, Row};
    use std::str::FromStr;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Duration, NaiveDate, NaiveDateTime};
        use uuid::Uuid;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            log!("[TEST] Database schema created");
            db
        }

        fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        }

        fn sample_reservation(created_at: NaiveDateTime) -> Reservation {
            Reservation {
                id: Uuid::new_v4().to_string(),
                request: ReservationRequest {
                    date: "2026-11-02".into(),
                    time: "20:00".into(),
                    guests: "3".into(),
                    first_name: "Paul".into(),
                    last_name: "Bernard".into(),
                    phone: "0611223344".into(),
                    email: "paul@example.fr".into(),
                    message: "Anniversaire".into(),
                },
                status: ReservationStatus::Pending,
                created_at,
            }
        }

        #[tokio::test]
        async fn test_schema_creation() {
            log!("[TEST] Starting test_schema_creation");
            let db = create_test_db().await;

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"menu_items".to_string()));
            assert!(tables.contains(&"reviews".to_string()));
            assert!(tables.contains(&"reservations".to_string()));
            assert!(tables.contains(&"contacts".to_string()));
        }

        #[tokio::test]
        async fn test_seed_runs_once() {
            log!("[TEST] Starting test_seed_runs_once");
            let db = create_test_db().await;

            let first = db.seed_defaults().await.unwrap();
            assert_eq!(first, (5, 4));
            let second = db.seed_defaults().await.unwrap();
            assert_eq!(second, (0, 0));

            let menu = db.list_menu_items(None, true).await.unwrap();
            assert_eq!(menu.len(), 5);
            assert_eq!(menu[0].name, "Pavé de rumsteck grillé à la plancha");
            log!("[TEST] Seeding - PASSED");
        }

        #[tokio::test]
        async fn test_menu_filters_and_categories() {
            log!("[TEST] Starting test_menu_filters_and_categories");
            let db = create_test_db().await;
            db.seed_defaults().await.unwrap();

            let fish = db.list_menu_items(Some("Poissons"), true).await.unwrap();
            assert_eq!(fish.len(), 1);
            assert_eq!(fish[0].id, "3");

            assert!(db.set_menu_item_availability("3", false).await.unwrap());
            assert!(db.list_menu_items(Some("Poissons"), true).await.unwrap().is_empty());
            assert_eq!(db.list_menu_items(Some("Poissons"), false).await.unwrap().len(), 1);
            assert!(!db.set_menu_item_availability("missing", true).await.unwrap());

            let categories = db.menu_categories().await.unwrap();
            assert_eq!(
                categories,
                vec!["Plats principaux", "Poissons", "Spécialités", "Enfants"]
            );
            log!("[TEST] Menu filters - PASSED");
        }

        #[tokio::test]
        async fn test_menu_item_lifecycle() {
            log!("[TEST] Starting test_menu_item_lifecycle");
            let db = create_test_db().await;
            let new = NewMenuItem {
                name: "Tarte Tatin".into(),
                description: "crème fraîche".into(),
                price: "8€".into(),
                category: "Desserts".into(),
                available: true,
                image_url: None,
            };
            let id = Uuid::new_v4().to_string();
            db.insert_menu_item(&new.clone().into_item(id.clone())).await.unwrap();

            let stored = db.get_menu_item(&id).await.unwrap().unwrap();
            assert_eq!(stored.name, "Tarte Tatin");

            let mut changed = new;
            changed.price = "9€".into();
            assert!(db.update_menu_item(&id, &changed).await.unwrap());
            assert_eq!(db.get_menu_item(&id).await.unwrap().unwrap().price, "9€");

            assert!(db.delete_menu_item(&id).await.unwrap());
            assert!(db.get_menu_item(&id).await.unwrap().is_none());
            assert!(!db.delete_menu_item(&id).await.unwrap());
            log!("[TEST] Menu item lifecycle - PASSED");
        }

        #[tokio::test]
        async fn test_reviews_newest_first_and_approval() {
            log!("[TEST] Starting test_reviews_newest_first_and_approval");
            let db = create_test_db().await;
            db.seed_defaults().await.unwrap();

            let reviews = db.list_reviews(true).await.unwrap();
            let names: Vec<&str> = reviews.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["Jean-Pierre M.", "Isabelle R.", "Sophie L.", "Marc D."]);

            assert!(db.set_review_approval("2", false).await.unwrap());
            assert_eq!(db.list_reviews(true).await.unwrap().len(), 3);
            assert_eq!(db.list_reviews(false).await.unwrap().len(), 4);
            assert!(!db.get_review("2").await.unwrap().unwrap().approved);

            assert!(db.delete_review("2").await.unwrap());
            assert!(db.get_review("2").await.unwrap().is_none());
            log!("[TEST] Review approval - PASSED");
        }

        #[tokio::test]
        async fn test_reservation_lifecycle() {
            log!("[TEST] Starting test_reservation_lifecycle");
            let db = create_test_db().await;
            let reservation = sample_reservation(noon(2026, 10, 19));
            db.insert_reservation(&reservation).await.unwrap();

            let stored = db.get_reservation(&reservation.id).await.unwrap().unwrap();
            assert_eq!(stored, reservation);

            assert!(db
                .set_reservation_status(&reservation.id, ReservationStatus::Confirmed)
                .await
                .unwrap());
            let all = db.list_reservations().await.unwrap();
            assert_eq!(all.len(), 1);
            assert_eq!(all[0].status, ReservationStatus::Confirmed);
            assert!(!db
                .set_reservation_status("missing", ReservationStatus::Cancelled)
                .await
                .unwrap());
            log!("[TEST] Reservation lifecycle - PASSED");
        }

        #[tokio::test]
        async fn test_contacts_newest_first() {
            log!("[TEST] Starting test_contacts_newest_first");
            let db = create_test_db().await;
            let base = noon(2026, 10, 1);
            for (i, subject) in ["Privatisation", "Allergies"].iter().enumerate() {
                let message = ContactMessage {
                    id: format!("c{i}"),
                    request: ContactRequest {
                        name: "Julie".into(),
                        email: "julie@example.fr".into(),
                        subject: subject.to_string(),
                        message: "Bonjour".into(),
                    },
                    status: ContactStatus::New,
                    created_at: base + Duration::days(i as i64),
                };
                db.insert_contact(&message).await.unwrap();
            }

            let contacts = db.list_contacts().await.unwrap();
            assert_eq!(contacts[0].request.subject, "Allergies");
            assert!(db.set_contact_status("c0", ContactStatus::Read).await.unwrap());
            assert_eq!(
                db.get_contact("c0").await.unwrap().unwrap().status,
                ContactStatus::Read
            );
            log!("[TEST] Contacts - PASSED");
        }
    }

    fn parse_status<S>(row: &Row<'_>, idx: usize) -> Result<S, Error>
    where
        S: FromStr<Err = UnknownStatus>,
    {
        let raw: String = row.get(idx)?;
        raw.parse()
            .map_err(|e: UnknownStatus| Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }

    const MENU_COLUMNS: &str = "id, name, description, price, category, available, image_url";
    const REVIEW_COLUMNS: &str = "id, name, rating, comment, email, approved, created_at";
    const RESERVATION_COLUMNS: &str =
        "id, date, time, guests, first_name, last_name, phone, email, message, status, created_at";
    const CONTACT_COLUMNS: &str = "id, name, email, subject, message, status, created_at";

    fn menu_item_from_row(row: &Row<'_>) -> Result<MenuItem, Error> {
        Ok(MenuItem {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
            category: row.get(4)?,
            available: row.get(5)?,
            image_url: row.get(6)?,
        })
    }

    fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
        Ok(Review {
            id: row.get(0)?,
            name: row.get(1)?,
            rating: row.get(2)?,
            comment: row.get(3)?,
            email: row.get(4)?,
            approved: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn reservation_from_row(row: &Row<'_>) -> Result<Reservation, Error> {
        Ok(Reservation {
            id: row.get(0)?,
            request: ReservationRequest {
                date: row.get(1)?,
                time: row.get(2)?,
                guests: row.get(3)?,
                first_name: row.get(4)?,
                last_name: row.get(5)?,
                phone: row.get(6)?,
                email: row.get(7)?,
                message: row.get(8)?,
            },
            status: parse_status(row, 9)?,
            created_at: row.get(10)?,
        })
    }

    fn contact_from_row(row: &Row<'_>) -> Result<ContactMessage, Error> {
        Ok(ContactMessage {
            id: row.get(0)?,
            request: ContactRequest {
                name: row.get(1)?,
                email: row.get(2)?,
                subject: row.get(3)?,
                message: row.get(4)?,
            },
            status: parse_status(row, 5)?,
            created_at: row.get(6)?,
        })
    }

    fn write_menu_item(conn: &Connection, item: &MenuItem) -> Result<(), Error> {
        conn.execute(
            "INSERT INTO menu_items (id, name, description, price, category, available, image_url)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                &item.id,
                &item.name,
                &item.description,
                &item.price,
                &item.category,
                item.available,
                &item.image_url
            ],
        )?;
        Ok(())
    }

    fn write_review(conn: &Connection, review: &Review) -> Result<(), Error> {
        conn.execute(
            "INSERT INTO reviews (id, name, rating, comment, email, approved, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                &review.id,
                &review.name,
                review.rating,
                &review.comment,
                &review.email,
                review.approved,
                review.created_at
            ],
        )?;
        Ok(())
    }

    // Shared handle to the SQLite store; cloning shares the same connection.
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS menu_items (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    description TEXT NOT NULL,
                    price TEXT NOT NULL,
                    category TEXT NOT NULL,
                    available INTEGER NOT NULL DEFAULT 1,
                    image_url TEXT
                );",
            )
            .map_err(|e| {
                logging::error!("Failed creating menu_items table: {}", e);
                e
            })?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                    comment TEXT NOT NULL,
                    email TEXT,
                    approved INTEGER NOT NULL DEFAULT 1,
                    created_at TEXT NOT NULL
                );",
            )
            .map_err(|e| {
                logging::error!("Failed creating reviews table: {}", e);
                e
            })?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reservations (
                    id TEXT PRIMARY KEY,
                    date TEXT NOT NULL,
                    time TEXT NOT NULL,
                    guests TEXT NOT NULL,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    phone TEXT NOT NULL,
                    email TEXT NOT NULL,
                    message TEXT NOT NULL DEFAULT '',
                    status TEXT NOT NULL DEFAULT 'pending',
                    created_at TEXT NOT NULL
                );",
            )
            .map_err(|e| {
                logging::error!("Failed creating reservations table: {}", e);
                e
            })?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS contacts (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    subject TEXT NOT NULL,
                    message TEXT NOT NULL,
                    status TEXT NOT NULL DEFAULT 'new',
                    created_at TEXT NOT NULL
                );",
            )
            .map_err(|e| {
                logging::error!("Failed creating contacts table: {}", e);
                e
            })?;
            Ok(())
        }

        /// Fills empty menu/review tables with the house defaults.
        /// Returns how many menu items and reviews were inserted.
        pub async fn seed_defaults(&self) -> Result<(usize, usize), Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let menu_count: i64 = tx.query_row("SELECT COUNT(*) FROM menu_items", [], |row| row.get(0))?;
            let mut menu_inserted = 0;
            if menu_count == 0 {
                log!("[DB] Initializing menu items...");
                for item in content::fallback_menu() {
                    write_menu_item(&tx, &item)?;
                    menu_inserted += 1;
                }
                log!("[DB] Inserted {} menu items", menu_inserted);
            }

            let review_count: i64 = tx.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
            let mut reviews_inserted = 0;
            if review_count == 0 {
                log!("[DB] Initializing sample reviews...");
                for review in content::fallback_reviews() {
                    write_review(&tx, &review)?;
                    reviews_inserted += 1;
                }
                log!("[DB] Inserted {} sample reviews", reviews_inserted);
            }

            tx.commit()?;
            Ok((menu_inserted, reviews_inserted))
        }

        // Menu

        pub async fn list_menu_items(
            &self,
            category: Option<&str>,
            available_only: bool,
        ) -> Result<Vec<MenuItem>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT {MENU_COLUMNS} FROM menu_items
                 WHERE (?1 = 0 OR available = 1) AND (?2 IS NULL OR category = ?2)
                 ORDER BY rowid"
            ))?;
            let rows = stmt.query_map(params![available_only, category], menu_item_from_row)?;
            let items = rows.collect::<Result<Vec<_>, _>>()?;
            logging::log!("[DB] Fetched {} menu items", items.len());
            Ok(items)
        }

        /// Distinct categories in order of first insertion.
        pub async fn menu_categories(&self) -> Result<Vec<String>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT category FROM menu_items GROUP BY category ORDER BY MIN(rowid)",
            )?;
            let categories = stmt.query_map([], |row| row.get(0))?;
            categories.collect()
        }

        pub async fn get_menu_item(&self, id: &str) -> Result<Option<MenuItem>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {MENU_COLUMNS} FROM menu_items WHERE id = ?"),
                [id],
                menu_item_from_row,
            )
            .optional()
        }

        pub async fn insert_menu_item(&self, item: &MenuItem) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            write_menu_item(&conn, item)?;
            log!("[DB] Menu item inserted: {}", item.id);
            Ok(())
        }

        /// Returns false when no item has this id.
        pub async fn update_menu_item(&self, id: &str, item: &NewMenuItem) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute(
                "UPDATE menu_items
                 SET name = ?, description = ?, price = ?, category = ?, available = ?, image_url = ?
                 WHERE id = ?",
                params![
                    &item.name,
                    &item.description,
                    &item.price,
                    &item.category,
                    item.available,
                    &item.image_url,
                    id
                ],
            )?;
            Ok(changed > 0)
        }

        pub async fn set_menu_item_availability(&self, id: &str, available: bool) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute(
                "UPDATE menu_items SET available = ? WHERE id = ?",
                params![available, id],
            )?;
            Ok(changed > 0)
        }

        pub async fn delete_menu_item(&self, id: &str) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let deleted = conn.execute("DELETE FROM menu_items WHERE id = ?", [id])?;
            if deleted > 0 {
                log!("[DB] Menu item deleted: {}", id);
            }
            Ok(deleted > 0)
        }

        // Reviews

        /// Newest first.
        pub async fn list_reviews(&self, approved_only: bool) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT {REVIEW_COLUMNS} FROM reviews
                 WHERE (?1 = 0 OR approved = 1)
                 ORDER BY created_at DESC"
            ))?;
            let rows = stmt.query_map([approved_only], review_from_row)?;
            rows.collect()
        }

        pub async fn get_review(&self, id: &str) -> Result<Option<Review>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?"),
                [id],
                review_from_row,
            )
            .optional()
        }

        pub async fn insert_review(&self, review: &Review) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            write_review(&conn, review)?;
            log!("[DB] Review inserted: {} by {}", review.id, review.name);
            Ok(())
        }

        pub async fn set_review_approval(&self, id: &str, approved: bool) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute(
                "UPDATE reviews SET approved = ? WHERE id = ?",
                params![approved, id],
            )?;
            Ok(changed > 0)
        }

        pub async fn delete_review(&self, id: &str) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let deleted = conn.execute("DELETE FROM reviews WHERE id = ?", [id])?;
            Ok(deleted > 0)
        }

        // Reservations

        pub async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            let r = &reservation.request;
            conn.execute(
                &format!(
                    "INSERT INTO reservations ({RESERVATION_COLUMNS})
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
                ),
                params![
                    &reservation.id,
                    &r.date,
                    &r.time,
                    &r.guests,
                    &r.first_name,
                    &r.last_name,
                    &r.phone,
                    &r.email,
                    &r.message,
                    reservation.status.as_str(),
                    reservation.created_at
                ],
            )?;
            log!("[DB] Reservation inserted: {}", reservation.id);
            Ok(())
        }

        pub async fn list_reservations(&self) -> Result<Vec<Reservation>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY rowid"
            ))?;
            let rows = stmt.query_map([], reservation_from_row)?;
            rows.collect()
        }

        pub async fn get_reservation(&self, id: &str) -> Result<Option<Reservation>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?"),
                [id],
                reservation_from_row,
            )
            .optional()
        }

        pub async fn set_reservation_status(
            &self,
            id: &str,
            status: ReservationStatus,
        ) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute(
                "UPDATE reservations SET status = ? WHERE id = ?",
                params![status.as_str(), id],
            )?;
            Ok(changed > 0)
        }

        // Contact messages

        pub async fn insert_contact(&self, message: &ContactMessage) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            let m = &message.request;
            conn.execute(
                &format!("INSERT INTO contacts ({CONTACT_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?)"),
                params![
                    &message.id,
                    &m.name,
                    &m.email,
                    &m.subject,
                    &m.message,
                    message.status.as_str(),
                    message.created_at
                ],
            )?;
            log!("[DB] Contact message inserted: {} from {}", message.id, m.name);
            Ok(())
        }

        /// Newest first.
        pub async fn list_contacts(&self) -> Result<Vec<ContactMessage>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY created_at DESC"
            ))?;
            let rows = stmt.query_map([], contact_from_row)?;
            rows.collect()
        }

        pub async fn get_contact(&self, id: &str) -> Result<Option<ContactMessage>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?"),
                [id],
                contact_from_row,
            )
            .optional()
        }

        pub async fn set_contact_status(&self, id: &str, status: ContactStatus) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute(
                "UPDATE contacts SET status = ? WHERE id = ?",
                params![status.as_str(), id],
            )?;
            Ok(changed > 0)
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
