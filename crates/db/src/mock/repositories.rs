use chrono::{DateTime, NaiveDate, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAvailability, DbDriver, DbPeriod};

// Mock repositories for testing
mock! {
    pub PeriodRepo {
        pub async fn create_period(
            &self,
            name: &'static str,
            start_date: NaiveDate,
            end_date: NaiveDate,
            deadline: DateTime<Utc>,
        ) -> eyre::Result<DbPeriod>;

        pub async fn get_period_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbPeriod>>;
    }
}

mock! {
    pub DriverRepo {
        pub async fn create_driver(
            &self,
            first_name: &'static str,
            email: &'static str,
        ) -> eyre::Result<DbDriver>;

        pub async fn list_drivers(&self) -> eyre::Result<Vec<DbDriver>>;

        pub async fn get_driver_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbDriver>>;

        pub async fn update_driver_status(
            &self,
            id: Uuid,
            status: &'static str,
        ) -> eyre::Result<DbDriver>;
    }
}

mock! {
    pub AvailabilityRepo {
        pub async fn create_availability(
            &self,
            driver_id: Uuid,
            period_id: Uuid,
            selected_dates: Vec<NaiveDate>,
            selected_slots: Vec<String>,
        ) -> eyre::Result<DbAvailability>;

        pub async fn get_availabilities_by_period_id(
            &self,
            period_id: Uuid,
        ) -> eyre::Result<Vec<DbAvailability>>;
    }
}
