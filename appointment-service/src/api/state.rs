use std::sync::Arc;

use crate::domain::appointment::AppointmentRepository;

pub struct AppointmentAppState {
    pub appointment_repo: Arc<dyn AppointmentRepository>,
}
