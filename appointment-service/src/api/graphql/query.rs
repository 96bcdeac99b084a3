use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use super::{app_state, types::AppointmentObject};

pub struct Query;

#[Object]
impl Query {
    /// All appointments in booking order.
    #[graphql(name = "obtenerCitas")]
    #[tracing::instrument(skip_all)]
    async fn appointments(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Option<Vec<Option<AppointmentObject>>>> {
        let state = app_state(ctx)?;
        let output = state
            .appointment_repo
            .find_all()
            .await
            .map_err(|e| e.extend())?;

        Ok(Some(output.into_iter().map(|a| Some(a.into())).collect()))
    }

    /// A single appointment, or `null` when the id is unknown.
    #[graphql(name = "obtenerCita")]
    #[tracing::instrument(skip(self, ctx))]
    async fn appointment(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<Option<AppointmentObject>> {
        let state = app_state(ctx)?;
        let output = state
            .appointment_repo
            .find_by_id(&id)
            .await
            .map_err(|e| e.extend())?;

        Ok(output.map(AppointmentObject::from))
    }
}
