use async_trait::async_trait;
use shared::types::Appointment;

use crate::error::AppointmentServiceError;

/// Confirmation returned by a successful delete.
pub const DELETED_CONFIRMATION: &str = "Cita eliminada exitosamente";

#[derive(Debug, Clone)]
pub struct CreateAppointment {
    pub client_name: String,
    pub date: String,
    pub time: String,
}

/// Partial update. `None` and empty strings leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointment {
    pub client_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl UpdateAppointment {
    /// Overwrites every field of `target` that has a non-empty replacement.
    pub fn apply_to(self, target: &mut Appointment) {
        fn overwrite(slot: &mut String, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }

        overwrite(&mut target.client_name, self.client_name);
        overwrite(&mut target.date, self.date);
        overwrite(&mut target.time, self.time);
    }
}

#[cfg_attr(feature = "test-support", mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Appointment>, AppointmentServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppointmentServiceError>;
    async fn create(
        &self,
        appointment: CreateAppointment,
    ) -> Result<Appointment, AppointmentServiceError>;
    async fn update(
        &self,
        id: &str,
        changes: UpdateAppointment,
    ) -> Result<Appointment, AppointmentServiceError>;
    async fn delete(&self, id: &str) -> Result<(), AppointmentServiceError>;
}
