use async_trait::async_trait;
use shared::types::Appointment;
use tokio::sync::RwLock;

use crate::{
    domain::appointment::{AppointmentRepository, CreateAppointment, UpdateAppointment},
    error::AppointmentServiceError,
};

struct AppointmentBook {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl AppointmentBook {
    fn position(&self, id: &str) -> Option<usize> {
        self.appointments.iter().position(|a| a.id == id)
    }
}

/// Process-lifetime store kept in insertion order.
///
/// Ids are the stringified value of a counter that starts at 1 and only
/// grows, so a deleted id is never handed out again.
pub struct InMemoryAppointmentRepository {
    book: RwLock<AppointmentBook>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self {
            book: RwLock::new(AppointmentBook {
                appointments: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_all(&self) -> Result<Vec<Appointment>, AppointmentServiceError> {
        let book = self.book.read().await;

        Ok(book.appointments.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppointmentServiceError> {
        let book = self.book.read().await;
        let output = book.appointments.iter().find(|a| a.id == id).cloned();

        Ok(output)
    }

    async fn create(
        &self,
        appointment: CreateAppointment,
    ) -> Result<Appointment, AppointmentServiceError> {
        let mut book = self.book.write().await;

        let output = Appointment {
            id: book.next_id.to_string(),
            client_name: appointment.client_name,
            date: appointment.date,
            time: appointment.time,
        };
        book.appointments.push(output.clone());
        book.next_id += 1;

        tracing::debug!(id = %output.id, "Appointment stored");
        Ok(output)
    }

    async fn update(
        &self,
        id: &str,
        changes: UpdateAppointment,
    ) -> Result<Appointment, AppointmentServiceError> {
        let mut book = self.book.write().await;
        let index = book
            .position(id)
            .ok_or_else(|| AppointmentServiceError::not_found(id))?;

        let stored = &mut book.appointments[index];
        changes.apply_to(stored);

        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppointmentServiceError> {
        let mut book = self.book.write().await;
        let index = book
            .position(id)
            .ok_or_else(|| AppointmentServiceError::not_found(id))?;

        book.appointments.remove(index);

        Ok(())
    }
}
