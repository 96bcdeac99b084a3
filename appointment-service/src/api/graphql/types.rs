use async_graphql::{ID, Object};
use shared::types::Appointment;

/// GraphQL view of an [`Appointment`].
#[derive(Clone)]
pub struct AppointmentObject {
    pub inner: Appointment,
}

impl From<Appointment> for AppointmentObject {
    fn from(appointment: Appointment) -> Self {
        Self { inner: appointment }
    }
}

#[Object(name = "Cita")]
impl AppointmentObject {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    #[graphql(name = "nombreCliente")]
    async fn client_name(&self) -> &str {
        &self.inner.client_name
    }

    #[graphql(name = "fecha")]
    async fn date(&self) -> &str {
        &self.inner.date
    }

    #[graphql(name = "hora")]
    async fn time(&self) -> &str {
        &self.inner.time
    }
}
