use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use super::{app_state, types::AppointmentObject};
use crate::domain::appointment::{CreateAppointment, DELETED_CONFIRMATION, UpdateAppointment};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Books a new appointment. The id is assigned by the server.
    #[graphql(name = "agregarCita")]
    #[tracing::instrument(skip(self, ctx))]
    async fn add_appointment(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "nombreCliente")] client_name: String,
        #[graphql(name = "fecha")] date: String,
        #[graphql(name = "hora")] time: String,
    ) -> Result<Option<AppointmentObject>> {
        let state = app_state(ctx)?;
        let created = state
            .appointment_repo
            .create(CreateAppointment {
                client_name,
                date,
                time,
            })
            .await
            .map_err(|e| e.extend())?;

        tracing::info!(id = %created.id, "Appointment added");
        Ok(Some(created.into()))
    }

    /// Overwrites the supplied, non-empty fields of an existing appointment.
    #[graphql(name = "modificarCita")]
    #[tracing::instrument(skip(self, ctx))]
    async fn modify_appointment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        #[graphql(name = "nombreCliente")] client_name: Option<String>,
        #[graphql(name = "fecha")] date: Option<String>,
        #[graphql(name = "hora")] time: Option<String>,
    ) -> Result<Option<AppointmentObject>> {
        let state = app_state(ctx)?;
        let updated = state
            .appointment_repo
            .update(
                &id,
                UpdateAppointment {
                    client_name,
                    date,
                    time,
                },
            )
            .await
            .map_err(|e| e.extend())?;

        tracing::info!(id = %updated.id, "Appointment modified");
        Ok(Some(updated.into()))
    }

    #[graphql(name = "eliminarCita")]
    #[tracing::instrument(skip(self, ctx))]
    async fn delete_appointment(&self, ctx: &Context<'_>, id: ID) -> Result<Option<String>> {
        let state = app_state(ctx)?;
        state
            .appointment_repo
            .delete(&id)
            .await
            .map_err(|e| e.extend())?;

        tracing::info!(id = %id.as_str(), "Appointment deleted");
        Ok(Some(DELETED_CONFIRMATION.to_string()))
    }
}
